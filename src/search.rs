use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;

use crate::bag::TileBag;
use crate::board::{intersection_letters, Solution};
use crate::dedup::Deduplicator;
use crate::feasible::feasible_fills;
use crate::signature::{Signature, SignatureIndex};

/// Cooperative cancellation flag shared with the search workers, checked
/// once per outer signature.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Every outer signature was visited.
    Complete,
    /// The token fired; some outer signatures were skipped.
    Cancelled,
}

#[derive(Debug)]
pub struct SearchOutcome {
    /// Accepted solutions, transpose-deduplicated, in discovery order.
    pub solutions: Vec<Solution>,
    pub status: SearchStatus,
    /// Number of outer signatures in the search space.
    pub outer_total: usize,
}

/// The search driver. Every distinct signature is tried in the top-across
/// slot; the remaining five slots are filled by progressively narrower
/// index lookups, and each fully resolved grid goes to the tile
/// feasibility check.
///
/// Outer iterations are independent of one another, so they are sharded
/// over rayon; the per-shard solution lists are merged into one global
/// transpose-aware deduplication pass at the end.
pub struct Searcher<'a> {
    index: &'a SignatureIndex,
    bag: TileBag,
    cancel: CancelToken,
}

impl<'a> Searcher<'a> {
    pub fn new(index: &'a SignatureIndex) -> Self {
        Self {
            index,
            bag: TileBag::standard(),
            cancel: CancelToken::new(),
        }
    }

    /// Replaces the standard tile distribution with a custom template.
    pub fn with_bag(mut self, bag: TileBag) -> Self {
        self.bag = bag;
        self
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn run(&self) -> SearchOutcome {
        let outer = self.index.signatures();
        let total = outer.len();

        let shards: Vec<Vec<Solution>> = outer
            .par_iter()
            .enumerate()
            .map(|(i, &top)| {
                if self.cancel.is_cancelled() {
                    return Vec::new();
                }
                log::debug!("{}/{}: top-across signature {}", i + 1, total, top);
                self.solutions_for(top)
            })
            .collect();

        let mut dedup = Deduplicator::new();
        let mut raw = 0usize;
        for shard in shards {
            for solution in shard {
                raw += 1;
                dedup.insert(solution);
            }
        }

        let status = if self.cancel.is_cancelled() {
            SearchStatus::Cancelled
        } else {
            SearchStatus::Complete
        };
        log::info!(
            "{} solutions ({} before transpose dedup), {:?}",
            dedup.accepted().len(),
            raw,
            status
        );

        SearchOutcome {
            solutions: dedup.into_accepted(),
            status,
            outer_total: total,
        }
    }

    /// All structurally valid signature sextuples with `top` in the
    /// top-across slot.
    fn grids_for(&self, top: Signature) -> Vec<[Signature; 6]> {
        let mut grids = Vec::new();

        // The two inner down words hang off the top word's first and middle
        // intersection letters; the right-down word will need to start with
        // its last. Any of the three missing kills the whole outer branch.
        let left = self.index.with_first(top.first());
        let middle = self.index.with_first(top.mid());
        if left.is_empty() || middle.is_empty() || self.index.with_first(top.last()).is_empty() {
            return grids;
        }

        for &left_sig in &left {
            for &middle_sig in &middle {
                self.extend_down_pair(top, left_sig, middle_sig, &mut grids);
            }
        }
        grids
    }

    /// Given the top word and both inner down words, resolves the remaining
    /// across words by two-letter prefix, then the right-down word by full
    /// signature lookup.
    fn extend_down_pair(
        &self,
        top: Signature,
        left: Signature,
        middle: Signature,
        grids: &mut Vec<[Signature; 6]>,
    ) {
        let middle_across = self.index.with_first_two(left.mid(), middle.mid());
        let bottom_across = self.index.with_first_two(left.last(), middle.last());

        for &ma in &middle_across {
            for &ba in &bottom_across {
                let right = Signature::new([top.last(), ma.last(), ba.last()]);
                if self.index.contains(right) {
                    grids.push([top, left, middle, ma, ba, right]);
                }
            }
        }
    }

    fn solutions_for(&self, top: Signature) -> Vec<Solution> {
        let mut found = Vec::new();
        for sigs in self.grids_for(top) {
            let groups = sigs.map(|sig| self.index.group(sig));
            let bag = self.bag.with_letters(intersection_letters(&sigs));
            for words in feasible_fills(&groups, &bag) {
                found.push(Solution::new(words));
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Slot;
    use crate::lexicon::{AnchoredWord, Lexicon};

    fn entry(word: &str, anchor: &str) -> AnchoredWord {
        AnchoredWord {
            word: word.parse().unwrap(),
            anchor: anchor.parse().unwrap(),
        }
    }

    fn bag(a: u8, b: u8, wildcards: u8) -> TileBag {
        let mut counts = [0u8; 26];
        counts[0] = a;
        counts[1] = b;
        TileBag::new(counts, wildcards)
    }

    #[test]
    fn uniform_lexicon_fills_the_grid_once() {
        let lexicon = Lexicon::new(vec![entry("aaaaaaaaaaaaaaa", "aaaaaaaa")]);
        let index = SignatureIndex::build(&lexicon);

        let outcome = Searcher::new(&index).with_bag(bag(90, 0, 0)).run();
        assert_eq!(outcome.status, SearchStatus::Complete);
        assert_eq!(outcome.solutions.len(), 1);
        assert!(outcome.solutions[0].is_consistent());
    }

    #[test]
    fn missing_middle_letter_prunes_the_outer_branch() {
        // Signature (a, h, o): nothing starts with h, so no down word can
        // cross the top word's middle square.
        let lexicon = Lexicon::new(vec![entry("abcdefghijklmno", "abcdefgh")]);
        let index = SignatureIndex::build(&lexicon);

        let searcher = Searcher::new(&index).with_bag(bag(200, 200, 2));
        assert!(searcher.grids_for(Signature::new(*b"aho")).is_empty());
        assert!(searcher.run().solutions.is_empty());
    }

    #[test]
    fn mirrored_grids_collapse_to_one_solution() {
        // Three signatures (aba, baa, aaa) admit a lopsided grid whose
        // diagonal transpose is a different word assignment; both are
        // enumerated, one survives.
        let lexicon = Lexicon::new(vec![
            entry("aaaaaaaaaaaaaaa", "aaaaaaaa"),
            entry("aaaaaaabaaaaaaa", "aaaaaaab"),
            entry("baaaaaaaaaaaaaa", "baaaaaaa"),
        ]);
        let index = SignatureIndex::build(&lexicon);

        let outcome = Searcher::new(&index).with_bag(bag(120, 6, 0)).run();
        assert_eq!(outcome.status, SearchStatus::Complete);
        assert!(!outcome.solutions.is_empty());

        for solution in &outcome.solutions {
            assert!(solution.is_consistent());
        }
        for (i, a) in outcome.solutions.iter().enumerate() {
            for b in &outcome.solutions[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(*b, a.transpose());
            }
        }

        // The lopsided board shows up in exactly one orientation.
        let lopsided: Vec<_> = outcome
            .solutions
            .iter()
            .filter(|s| {
                s.word(Slot::TopAcross).as_str() == "aaaaaaabaaaaaaa"
                    || s.word(Slot::LeftDown).as_str() == "aaaaaaabaaaaaaa"
            })
            .collect();
        assert!(!lopsided.is_empty());
    }

    #[test]
    fn cancelled_token_skips_the_search() {
        let lexicon = Lexicon::new(vec![entry("aaaaaaaaaaaaaaa", "aaaaaaaa")]);
        let index = SignatureIndex::build(&lexicon);

        let cancel = CancelToken::new();
        cancel.cancel();
        let outcome = Searcher::new(&index)
            .with_bag(bag(90, 0, 0))
            .with_cancel_token(cancel)
            .run();
        assert_eq!(outcome.status, SearchStatus::Cancelled);
        assert!(outcome.solutions.is_empty());
    }

    #[test]
    fn infeasible_bag_yields_no_solutions() {
        let lexicon = Lexicon::new(vec![entry("aaaaaaaaaaaaaaa", "aaaaaaaa")]);
        let index = SignatureIndex::build(&lexicon);

        // 81 tiles are needed after the nine shared squares are credited
        // back; 70 + 2 wildcards falls short.
        let outcome = Searcher::new(&index).with_bag(bag(70, 0, 2)).run();
        assert_eq!(outcome.status, SearchStatus::Complete);
        assert!(outcome.solutions.is_empty());
    }
}
