use serde::Serialize;

use crate::lexicon::Word15;
use crate::signature::Signature;

/// Side length of the board. The six words span a full row or column each.
pub const BOARD_SIZE: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub fn flip(&self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// The six word slots of the fixed layout, in solution order. The across
/// words occupy rows 0, 7 and 14; the down words columns 0, 7 and 14; the
/// nine squares where they cross carry the intersection letters.
///
/// ```text
///     LeftDown  MiddleDown  RightDown
/// TopAcross    x......x......x
///              .      .      .
/// MiddleAcross x......x......x
///              .      .      .
/// BottomAcross x......x......x
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Slot {
    TopAcross,
    LeftDown,
    MiddleDown,
    MiddleAcross,
    BottomAcross,
    RightDown,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::TopAcross,
        Slot::LeftDown,
        Slot::MiddleDown,
        Slot::MiddleAcross,
        Slot::BottomAcross,
        Slot::RightDown,
    ];

    /// Position of this slot in the solution word order.
    pub fn index(self) -> usize {
        match self {
            Slot::TopAcross => 0,
            Slot::LeftDown => 1,
            Slot::MiddleDown => 2,
            Slot::MiddleAcross => 3,
            Slot::BottomAcross => 4,
            Slot::RightDown => 5,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Slot::TopAcross | Slot::MiddleAcross | Slot::BottomAcross => Direction::Across,
            Slot::LeftDown | Slot::MiddleDown | Slot::RightDown => Direction::Down,
        }
    }

    /// Square where the slot's word begins.
    pub fn start(self) -> Position {
        let mid = BOARD_SIZE / 2;
        let far = BOARD_SIZE - 1;
        match self {
            Slot::TopAcross => Position { row: 0, col: 0 },
            Slot::LeftDown => Position { row: 0, col: 0 },
            Slot::MiddleDown => Position { row: 0, col: mid },
            Slot::MiddleAcross => Position { row: mid, col: 0 },
            Slot::BottomAcross => Position { row: far, col: 0 },
            Slot::RightDown => Position { row: 0, col: far },
        }
    }

    /// The slot this one maps to under the diagonal transpose of the board.
    pub fn transpose(self) -> Slot {
        match self {
            Slot::TopAcross => Slot::LeftDown,
            Slot::LeftDown => Slot::TopAcross,
            Slot::MiddleDown => Slot::MiddleAcross,
            Slot::MiddleAcross => Slot::MiddleDown,
            Slot::BottomAcross => Slot::RightDown,
            Slot::RightDown => Slot::BottomAcross,
        }
    }
}

/// The nine intersection letters of a candidate grid, row-major:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
///
/// Cells 0..3 come straight from the top-across signature; the rest from
/// the mid/last letters of the down and across signatures that cross there.
pub fn intersection_letters(sigs: &[Signature; 6]) -> [u8; 9] {
    [
        sigs[0].first(),
        sigs[0].mid(),
        sigs[0].last(),
        sigs[1].mid(),
        sigs[2].mid(),
        sigs[3].last(),
        sigs[1].last(),
        sigs[2].last(),
        sigs[4].last(),
    ]
}

/// Six concrete words filling the board, indexed by [`Slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Solution {
    words: [Word15; 6],
}

impl Solution {
    pub fn new(words: [Word15; 6]) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[Word15; 6] {
        &self.words
    }

    pub fn word(&self, slot: Slot) -> &Word15 {
        &self.words[slot.index()]
    }

    /// The same board mirrored along the main diagonal: every slot takes
    /// the word of its transpose partner.
    pub fn transpose(&self) -> Self {
        let mut words = self.words;
        for slot in Slot::ALL {
            words[slot.index()] = self.words[slot.transpose().index()];
        }
        Self { words }
    }

    /// Whether the six words actually agree on all nine shared squares.
    pub fn is_consistent(&self) -> bool {
        let cell = |slot: Slot, i: usize| self.word(slot).letter(i);
        let downs = [Slot::LeftDown, Slot::MiddleDown, Slot::RightDown];
        let acrosses = [Slot::TopAcross, Slot::MiddleAcross, Slot::BottomAcross];
        for (r, &across) in acrosses.iter().enumerate() {
            for (c, &down) in downs.iter().enumerate() {
                if cell(across, c * 7) != cell(down, r * 7) {
                    return false;
                }
            }
        }
        true
    }
}
