use std::collections::{BTreeSet, HashMap};
use std::fmt;

use fst::automaton::Str;
use fst::{Automaton, IntoStreamer, Set, Streamer};

use crate::lexicon::{Lexicon, Word15};

/// The three letters of a fifteen-letter word that land on intersection
/// squares: positions 0, 7 and 14. Signatures are the join keys of the
/// whole search; many words share one signature.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature([u8; 3]);

impl Signature {
    pub fn new(letters: [u8; 3]) -> Self {
        Self(letters)
    }

    pub fn of(word: &Word15) -> Self {
        Self([word.letter(0), word.letter(7), word.letter(14)])
    }

    /// Letter on the first intersection square (word position 0).
    pub fn first(&self) -> u8 {
        self.0[0]
    }

    /// Letter on the middle intersection square (word position 7).
    pub fn mid(&self) -> u8 {
        self.0[1]
    }

    /// Letter on the last intersection square (word position 14).
    pub fn last(&self) -> u8 {
        self.0[2]
    }

    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({self})")
    }
}

/// Immutable signature lookup tables, built once from the lexicon.
///
/// The distinct signatures live in an fst set so the one- and two-letter
/// lookups the enumerator needs are both prefix searches over the same
/// structure; the full-signature lookup returns the word group itself.
pub struct SignatureIndex {
    signatures: Set<Vec<u8>>,
    groups: HashMap<Signature, Vec<Word15>>,
}

impl SignatureIndex {
    pub fn build(lexicon: &Lexicon) -> Self {
        let mut groups: HashMap<Signature, Vec<Word15>> = HashMap::new();
        for entry in lexicon.entries() {
            let group = groups.entry(Signature::of(&entry.word)).or_default();
            if !group.contains(&entry.word) {
                group.push(entry.word);
            }
        }

        // fst insertion requires sorted keys.
        let sorted: BTreeSet<[u8; 3]> = groups.keys().map(|s| s.0).collect();
        let signatures = Set::from_iter(sorted).expect("sorted three-byte keys");

        Self { signatures, groups }
    }

    /// Number of distinct signatures.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All distinct signatures in lexicographic order.
    pub fn signatures(&self) -> Vec<Signature> {
        self.collect_matches(Str::new("").starts_with())
    }

    /// Signatures whose first intersection letter is `letter`.
    pub fn with_first(&self, letter: u8) -> Vec<Signature> {
        let prefix = [letter];
        self.prefix_search(&prefix)
    }

    /// Signatures whose first two intersection letters are `first`, `mid`.
    pub fn with_first_two(&self, first: u8, mid: u8) -> Vec<Signature> {
        let prefix = [first, mid];
        self.prefix_search(&prefix)
    }

    pub fn contains(&self, sig: Signature) -> bool {
        self.groups.contains_key(&sig)
    }

    /// The word group sharing `sig`, empty when the signature is unknown.
    pub fn group(&self, sig: Signature) -> &[Word15] {
        self.groups.get(&sig).map(Vec::as_slice).unwrap_or(&[])
    }

    fn prefix_search(&self, prefix: &[u8]) -> Vec<Signature> {
        let prefix = std::str::from_utf8(prefix).expect("prefixes are ascii");
        self.collect_matches(Str::new(prefix).starts_with())
    }

    fn collect_matches(&self, automaton: impl Automaton) -> Vec<Signature> {
        let mut stream = self.signatures.search(automaton).into_stream();
        let mut out = Vec::new();
        while let Some(key) = stream.next() {
            let mut buf = [0u8; 3];
            buf.copy_from_slice(key);
            out.push(Signature(buf));
        }
        out
    }
}
