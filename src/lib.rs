//! Finds sets of six fifteen-letter words that fit together on a scrabble
//! board: three across words on rows 0, 7 and 14 and three down words on
//! columns 0, 7 and 14, agreeing on the nine squares where they cross.
//!
//! Every word must contain an eight-letter dictionary word, and the whole
//! set must be buildable from the standard 100-tile letter distribution
//! (intersection letters count once; the two blanks cover shortfalls).
//!
//! The pipeline: [`lexicon`] pairs fifteen-letter words with their
//! eight-letter anchors, [`signature`] indexes them by their intersection
//! letters, [`search`] enumerates grid-consistent signature sextuples and
//! runs each through [`feasible`]'s tile check, [`dedup`] collapses
//! diagonal mirror images, and [`format`] renders what is left.

pub mod bag;
pub mod board;
pub mod dedup;
pub mod errors;
pub mod feasible;
pub mod format;
pub mod lexicon;
pub mod search;
pub mod signature;
