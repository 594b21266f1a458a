use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write as _};
use std::path::Path;
use std::str::FromStr;

use aho_corasick::AhoCorasick;

use crate::errors::LexiconError;

/// A fixed-length lowercase word, stored as raw ASCII bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word<const N: usize>([u8; N]);

/// A fifteen-letter word, one of the six that make up a board.
pub type Word15 = Word<15>;

/// An eight-letter word embedded in a fifteen-letter one.
pub type Word8 = Word<8>;

impl<const N: usize> Word<N> {
    pub fn as_str(&self) -> &str {
        // Construction only accepts ASCII letters.
        std::str::from_utf8(&self.0).expect("words are ascii")
    }

    pub fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Letter at a fixed position; `i` must be below `N`.
    pub fn letter(&self, i: usize) -> u8 {
        self.0[i]
    }

    /// Byte offset of `needle` within this word, if present.
    pub fn find<const M: usize>(&self, needle: &Word<M>) -> Option<usize> {
        self.as_str().find(needle.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidWord(pub String);

impl fmt::Display for InvalidWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a lowercase word of the expected length: {:?}", self.0)
    }
}

impl<const N: usize> FromStr for Word<N> {
    type Err = InvalidWord;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != N || !bytes.iter().all(|b| b.is_ascii_lowercase()) {
            return Err(InvalidWord(s.to_string()));
        }
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        Ok(Self(buf))
    }
}

impl<const N: usize> fmt::Display for Word<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> fmt::Debug for Word<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

/// A fifteen-letter word paired with the eight-letter word it contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchoredWord {
    pub word: Word15,
    pub anchor: Word8,
}

/// Every fifteen-letter dictionary word that embeds an eight-letter
/// dictionary word, in dictionary order, with anchor lookup by word.
///
/// When a word contains several eight-letter substrings the anchor is the
/// one that appears first in the dictionary, matching how previous runs of
/// the tool populated their pairs files.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<AnchoredWord>,
    anchors: HashMap<Word15, Word8>,
}

impl Lexicon {
    pub fn new(entries: Vec<AnchoredWord>) -> Self {
        let anchors = entries.iter().map(|e| (e.word, e.anchor)).collect();
        Self { entries, anchors }
    }

    pub fn entries(&self) -> &[AnchoredWord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn anchor_of(&self, word: &Word15) -> Option<Word8> {
        self.anchors.get(word).copied()
    }

    /// Loads the precomputed pairs file if it exists, otherwise builds the
    /// pairing from the raw dictionary and writes the pairs file for next
    /// time. A missing pairs file is expected, not an error.
    pub fn load_or_build(dictionary: &Path, pairs: &Path) -> Result<Self, LexiconError> {
        match File::open(pairs) {
            Ok(file) => {
                log::info!("loading word pairs from {}", pairs.display());
                Self::from_pairs_reader(BufReader::new(file), pairs)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!(
                    "{} not found, rebuilding from {}",
                    pairs.display(),
                    dictionary.display()
                );
                let file = File::open(dictionary).map_err(|source| LexiconError::Io {
                    path: dictionary.to_path_buf(),
                    source,
                })?;
                let lexicon = Self::from_dictionary_reader(BufReader::new(file), dictionary)?;
                if let Err(e) = lexicon.write_pairs(pairs) {
                    log::warn!("could not write {}: {e}", pairs.display());
                }
                Ok(lexicon)
            }
            Err(source) => Err(LexiconError::Io {
                path: pairs.to_path_buf(),
                source,
            }),
        }
    }

    /// Builds the lexicon from a raw word list, one word per line. Only 8-
    /// and 15-letter lines matter; fifteen-letter words with no eight-letter
    /// substring are dropped.
    pub fn from_dictionary_reader(
        reader: impl BufRead,
        path: &Path,
    ) -> Result<Self, LexiconError> {
        let mut eights: Vec<Word8> = Vec::new();
        let mut fifteens: Vec<Word15> = Vec::new();

        for (lineno, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LexiconError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let word = line.trim().to_ascii_lowercase();
            match word.len() {
                8 => eights.push(parse_word(&word, path, lineno + 1)?),
                15 => fifteens.push(parse_word(&word, path, lineno + 1)?),
                _ => {}
            }
        }

        Ok(Self::new(pair_anchors(&eights, &fifteens)))
    }

    /// Reads a previously written pairs file (`<fifteen> <eight>` per line).
    pub fn from_pairs_reader(reader: impl BufRead, path: &Path) -> Result<Self, LexiconError> {
        let mut entries = Vec::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LexiconError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split_whitespace();
            let (word, anchor) = match (fields.next(), fields.next(), fields.next()) {
                (Some(w), Some(a), None) => (w, a),
                _ => {
                    return Err(LexiconError::MalformedLine {
                        path: path.to_path_buf(),
                        line: lineno + 1,
                        text: line.clone(),
                    })
                }
            };
            entries.push(AnchoredWord {
                word: parse_word(word, path, lineno + 1)?,
                anchor: parse_word(anchor, path, lineno + 1)?,
            });
        }
        Ok(Self::new(entries))
    }

    pub fn write_pairs(&self, path: &Path) -> Result<(), LexiconError> {
        let to_io_err = |source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(to_io_err)?;
        let mut writer = BufWriter::new(file);
        for entry in &self.entries {
            writeln!(writer, "{} {}", entry.word, entry.anchor).map_err(to_io_err)?;
        }
        writer.flush().map_err(to_io_err)
    }
}

fn parse_word<const N: usize>(
    word: &str,
    path: &Path,
    line: usize,
) -> Result<Word<N>, LexiconError> {
    word.parse().map_err(|_| LexiconError::MalformedLine {
        path: path.to_path_buf(),
        line,
        text: word.to_string(),
    })
}

/// Associates each fifteen-letter word with the first eight-letter word, in
/// dictionary order, that occurs inside it. One automaton pass over each
/// word replaces the quadratic scan over the whole eight-letter list.
fn pair_anchors(eights: &[Word8], fifteens: &[Word15]) -> Vec<AnchoredWord> {
    if eights.is_empty() {
        return Vec::new();
    }
    let automaton = AhoCorasick::new(eights.iter().map(|w| w.as_str()))
        .expect("eight-letter patterns are well formed");

    let mut entries = Vec::new();
    for &word in fifteens {
        let hit = automaton
            .find_overlapping_iter(word.as_str())
            .min_by_key(|m| m.pattern().as_usize());
        match hit {
            Some(m) => entries.push(AnchoredWord {
                word,
                anchor: eights[m.pattern().as_usize()],
            }),
            None => log::debug!("{word} has no eight-letter anchor, skipping"),
        }
    }
    entries
}
