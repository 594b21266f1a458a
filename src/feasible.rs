use crate::bag::TileBag;
use crate::lexicon::Word15;

/// Every way to pick one word per group such that all six picks together
/// can be drawn from `bag`.
///
/// Works generation by generation: each surviving partial pick owns its own
/// depleted bag copy, each word of the next group is tried against every
/// survivor, and attempts that cannot draw their letters simply do not make
/// it into the next generation. An empty return means no pick works for
/// this grid, which the caller treats as an ordinary dead end.
pub fn feasible_fills(groups: &[&[Word15]; 6], bag: &TileBag) -> Vec<[Word15; 6]> {
    let mut partials: Vec<(TileBag, Vec<Word15>)> = vec![(bag.clone(), Vec::new())];

    for group in groups {
        let mut next = Vec::new();
        for word in *group {
            for (remaining, picked) in &partials {
                if let Some(depleted) = remaining.remove_word(word) {
                    let mut picked = picked.clone();
                    picked.push(*word);
                    next.push((depleted, picked));
                }
            }
        }
        partials = next;
        if partials.is_empty() {
            return Vec::new();
        }
    }

    partials
        .into_iter()
        .map(|(_, picked)| picked.try_into().expect("one pick per group"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word15 {
        s.parse().unwrap()
    }

    fn bag_of(letter: u8, count: u8, wildcards: u8) -> TileBag {
        let mut counts = [0u8; 26];
        counts[(letter - b'a') as usize] = count;
        TileBag::new(counts, wildcards)
    }

    #[test]
    fn rejects_when_short_three_letters_and_no_wildcards() {
        let only_e = [word("eeeeeeeeeeeeeee")];
        let groups: [&[Word15]; 6] = [&only_e; 6];
        // Six words need 90 e tiles; 87 without wildcards cannot cover it.
        assert!(feasible_fills(&groups, &bag_of(b'e', 87, 0)).is_empty());
    }

    #[test]
    fn wildcards_cover_a_shortfall_of_at_most_two() {
        let only_e = [word("eeeeeeeeeeeeeee")];
        let groups: [&[Word15]; 6] = [&only_e; 6];
        assert_eq!(feasible_fills(&groups, &bag_of(b'e', 88, 2)).len(), 1);
        assert!(feasible_fills(&groups, &bag_of(b'e', 87, 2)).is_empty());
    }

    #[test]
    fn keeps_only_picks_the_bag_supports() {
        let all_a = word("aaaaaaaaaaaaaaa");
        let all_b = word("bbbbbbbbbbbbbbb");
        let last: &[Word15] = &[all_a, all_b];
        let groups: [&[Word15]; 6] = [&[all_a], &[all_a], &[all_a], &[all_a], &[all_a], last];
        // 90 a tiles: picking all_b in the last slot has no letters to draw.
        let fills = feasible_fills(&groups, &bag_of(b'a', 90, 0));
        assert_eq!(fills.len(), 1);
        assert_eq!(fills[0][5], all_a);
    }

    #[test]
    fn an_empty_group_yields_nothing() {
        let all_a = word("aaaaaaaaaaaaaaa");
        let empty: &[Word15] = &[];
        let groups: [&[Word15]; 6] = [&[all_a], &[all_a], empty, &[all_a], &[all_a], &[all_a]];
        assert!(feasible_fills(&groups, &bag_of(b'a', 90, 0)).is_empty());
    }

    #[test]
    fn repeated_runs_return_identical_fills() {
        let only_a = [word("aaaaaaaaaaaaaaa")];
        let groups: [&[Word15]; 6] = [&only_a; 6];
        let bag = bag_of(b'a', 90, 0);
        assert_eq!(feasible_fills(&groups, &bag), feasible_fills(&groups, &bag));
    }
}
