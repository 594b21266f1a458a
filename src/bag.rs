use crate::lexicon::Word;

/// Tile counts for a..z in the standard English scrabble distribution.
const TILE_COUNTS: [u8; 26] = [
    9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1,
];

/// Number of blank tiles in the standard distribution.
const WILDCARDS: u8 = 2;

/// A multiset of letter tiles plus wildcard (blank) tiles.
///
/// The standard bag holds 100 tiles. Feasibility checks never mutate a shared
/// bag: every removal either happens on a fresh clone or returns a new bag,
/// so a failed candidate branch leaves its siblings untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileBag {
    /// Histogram count of each letter in the bag
    counts: [u8; 26],
    /// Number of wildcards remaining
    wildcards: u8,
}

impl TileBag {
    /// The full 100-tile English distribution (98 letters + 2 blanks).
    pub fn standard() -> Self {
        Self {
            counts: TILE_COUNTS,
            wildcards: WILDCARDS,
        }
    }

    pub fn new(counts: [u8; 26], wildcards: u8) -> Self {
        Self { counts, wildcards }
    }

    /// A copy of this bag with the given letters added. Used to account for
    /// the nine intersection letters, which every word pair shares but which
    /// each word consumes once. Counts saturate at `u8::MAX` so a custom
    /// near-full template cannot wrap around.
    pub fn with_letters(&self, letters: impl IntoIterator<Item = u8>) -> Self {
        let mut bag = self.clone();
        for l in letters {
            let i = (l - b'a') as usize;
            bag.counts[i] = bag.counts[i].saturating_add(1);
        }
        bag
    }

    pub fn count(&self, letter: u8) -> u8 {
        self.counts[(letter - b'a') as usize]
    }

    pub fn wildcards(&self) -> u8 {
        self.wildcards
    }

    /// Total number of tiles remaining, wildcards included.
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| c as u32).sum::<u32>() + self.wildcards as u32
    }

    /// Removes one tile of the given letter, or `None` if none remain.
    pub fn remove(&self, letter: u8) -> Option<Self> {
        let i = (letter - b'a') as usize;
        if self.counts[i] > 0 {
            let mut tmp = self.clone();
            tmp.counts[i] -= 1;
            Some(tmp)
        } else {
            None
        }
    }

    /// Removes one wildcard tile, or `None` if none remain.
    pub fn remove_wildcard(&self) -> Option<Self> {
        if self.wildcards > 0 {
            let mut tmp = self.clone();
            tmp.wildcards -= 1;
            Some(tmp)
        } else {
            None
        }
    }

    /// Tries to draw every letter of `word` from this bag, preferring exact
    /// tiles and falling back to wildcards. Returns the depleted bag, or
    /// `None` if the word cannot be built from what remains.
    pub fn remove_word<const N: usize>(&self, word: &Word<N>) -> Option<Self> {
        let mut bag = self.clone();
        for l in word.letters() {
            let i = (l - b'a') as usize;
            if bag.counts[i] > 0 {
                bag.counts[i] -= 1;
            } else if bag.wildcards > 0 {
                bag.wildcards -= 1;
            } else {
                return None;
            }
        }
        Some(bag)
    }
}
