use std::io::{self, Write};

use serde::Serialize;

use crate::board::{Direction, Position, Slot, Solution};
use crate::lexicon::{Lexicon, Word15};

/// A word with its anchor bracketed in place: `de(material)izing`.
/// Words with no recorded anchor render plain.
pub fn annotate(word: &Word15, lexicon: &Lexicon) -> String {
    match lexicon.anchor_of(word).and_then(|a| word.find(&a).map(|i| (a, i))) {
        Some((anchor, start)) => {
            let s = word.as_str();
            format!("{}({}){}", &s[..start], anchor, &s[start + 8..])
        }
        None => word.to_string(),
    }
}

/// The spaced 15x15 text rendering: across words space-joined on rows 0, 7
/// and 14, down-word letters in between at columns 0, 14 and 28.
pub fn render_board(solution: &Solution) -> String {
    let spaced = |slot: Slot| {
        let mut line = String::new();
        for (i, c) in solution.word(slot).as_str().chars().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push(c);
        }
        line
    };
    let down_row = |i: usize| {
        format!(
            "{}             {}             {}",
            solution.word(Slot::LeftDown).letter(i) as char,
            solution.word(Slot::MiddleDown).letter(i) as char,
            solution.word(Slot::RightDown).letter(i) as char,
        )
    };

    let mut out = String::new();
    out.push_str(&spaced(Slot::TopAcross));
    out.push('\n');
    for i in 1..7 {
        out.push_str(&down_row(i));
        out.push('\n');
    }
    out.push_str(&spaced(Slot::MiddleAcross));
    out.push('\n');
    for i in 8..14 {
        out.push_str(&down_row(i));
        out.push('\n');
    }
    out.push_str(&spaced(Slot::BottomAcross));
    out
}

/// One numbered output block: the three across words, the three down
/// words (all anchor-annotated), then the rendered board.
pub fn render_solution(number: usize, solution: &Solution, lexicon: &Lexicon) -> String {
    let a = |slot: Slot| annotate(solution.word(slot), lexicon);
    format!(
        "\n\n{}\n\n{}\n {}\n {}\n\n {}\n {}\n {}\n\n{}",
        number,
        a(Slot::TopAcross),
        a(Slot::MiddleAcross),
        a(Slot::BottomAcross),
        a(Slot::LeftDown),
        a(Slot::MiddleDown),
        a(Slot::RightDown),
        render_board(solution),
    )
}

pub fn write_solutions(
    out: &mut impl Write,
    solutions: &[Solution],
    lexicon: &Lexicon,
) -> io::Result<()> {
    for (i, solution) in solutions.iter().enumerate() {
        writeln!(out, "{}", render_solution(i + 1, solution, lexicon))?;
    }
    Ok(())
}

/// A single placed word as the board-animation tool consumes it: the word,
/// its anchor, and where and in which direction it is played.
#[derive(Debug, Clone, Serialize)]
pub struct PlacementRecord {
    pub word: String,
    pub anchor: Option<String>,
    pub slot: Slot,
    pub start: Position,
    pub direction: Direction,
}

#[derive(Debug, Clone, Serialize)]
pub struct SolutionRecord {
    pub number: usize,
    pub placements: Vec<PlacementRecord>,
}

pub fn solution_records(solutions: &[Solution], lexicon: &Lexicon) -> Vec<SolutionRecord> {
    solutions
        .iter()
        .enumerate()
        .map(|(i, solution)| SolutionRecord {
            number: i + 1,
            placements: Slot::ALL
                .iter()
                .map(|&slot| {
                    let word = solution.word(slot);
                    PlacementRecord {
                        word: word.to_string(),
                        anchor: lexicon.anchor_of(word).map(|a| a.to_string()),
                        slot,
                        start: slot.start(),
                        direction: slot.direction(),
                    }
                })
                .collect(),
        })
        .collect()
}

pub fn write_json(
    out: &mut impl Write,
    solutions: &[Solution],
    lexicon: &Lexicon,
) -> io::Result<()> {
    let records = solution_records(solutions, lexicon);
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::AnchoredWord;

    fn lexicon() -> Lexicon {
        Lexicon::new(vec![AnchoredWord {
            word: "dematerializing".parse().unwrap(),
            anchor: "material".parse().unwrap(),
        }])
    }

    #[test]
    fn annotation_brackets_the_anchor() {
        let word: Word15 = "dematerializing".parse().unwrap();
        assert_eq!(annotate(&word, &lexicon()), "de(material)izing");
    }

    #[test]
    fn unknown_words_render_plain() {
        let word: Word15 = "aaaaaaaaaaaaaaa".parse().unwrap();
        assert_eq!(annotate(&word, &lexicon()), "aaaaaaaaaaaaaaa");
    }

    #[test]
    fn board_rows_and_columns_line_up() {
        let word: Word15 = "dematerializing".parse().unwrap();
        let board = render_board(&Solution::new([word; 6]));
        let lines: Vec<&str> = board.lines().collect();

        assert_eq!(lines.len(), 15);
        assert_eq!(lines[0], "d e m a t e r i a l i z i n g");
        assert_eq!(lines[0].len(), 29);
        // Row 1 carries letter 1 of each down word at columns 0, 14, 28.
        assert_eq!(lines[1].as_bytes()[0], b'e');
        assert_eq!(lines[1].as_bytes()[14], b'e');
        assert_eq!(lines[1].as_bytes()[28], b'e');
        // Rows 7 and 14 are the other two across words.
        assert_eq!(lines[7], lines[0]);
        assert_eq!(lines[14], lines[0]);
    }

    #[test]
    fn solution_block_numbers_and_groups_words() {
        let word: Word15 = "dematerializing".parse().unwrap();
        let block = render_solution(3, &Solution::new([word; 6]), &lexicon());
        assert!(block.starts_with("\n\n3\n\n"));
        assert_eq!(block.matches("de(material)izing").count(), 6);
    }

    #[test]
    fn json_records_carry_placement_metadata() {
        let word: Word15 = "dematerializing".parse().unwrap();
        let records = solution_records(&[Solution::new([word; 6])], &lexicon());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].number, 1);
        assert_eq!(records[0].placements.len(), 6);

        let top = &records[0].placements[0];
        assert_eq!(top.slot, Slot::TopAcross);
        assert_eq!(top.direction, Direction::Across);
        assert_eq!(top.start, Position { row: 0, col: 0 });
        assert_eq!(top.anchor.as_deref(), Some("material"));

        let json = serde_json::to_string(&records).unwrap();
        assert!(json.contains("\"Across\""));
        assert!(json.contains("\"row\""));
    }
}
