//! Clue Tokenizer
//!
//! Splits the multi-line clue into words and annotates each word with its
//! positional and whitespace counters in a single left-to-right pass.
//!
//! # Counter Scopes
//!
//! Two accumulators are threaded through the pass and reset on different
//! boundaries:
//!
//! - **line scope** (`number_in_line`, `space_before_line_cumulative`) resets
//!   at the first word of every non-blank line;
//! - **text scope** (`number_global`, `space_before_global_cumulative`) never
//!   resets.
//!
//! Blank lines carry no words and leave both accumulators untouched.
//!
//! `letter_count` counts ASCII letters and digits only; punctuation and any
//! non-ASCII characters are excluded.

use serde::{Deserialize, Serialize};

/// The built-in clue
pub const CLUE_TEXT: &str = "The time and the tide wait for no man

A light will show you the way, but won't show you land

Far across the distance and spaces between us

There's a ball that descends to countdown the day



On the other side of water, resting high on sacred grounds

Find the 72 squares to which this puzzle is bound";

/// A word with its counters
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// The word as written, punctuation included
    pub text: String,
    /// ASCII letters and digits in the word
    pub letter_count: usize,
    /// 1-based position within its line
    pub number_in_line: usize,
    /// 1-based position within the whole clue
    pub number_global: usize,
    /// Whitespace characters separating this word from the previous one on the same line
    pub space_before_local: usize,
    /// Sum of `space_before_local` from the start of the line up to this word
    pub space_before_line_cumulative: usize,
    /// Sum of `space_before_local` from the start of the clue up to this word
    pub space_before_global_cumulative: usize,
}

impl Word {
    /// Value of one counter
    #[must_use]
    pub fn counter(&self, kind: CounterKind) -> usize {
        match kind {
            CounterKind::Letters => self.letter_count,
            CounterKind::WordInLine => self.number_in_line,
            CounterKind::WordInClue => self.number_global,
            CounterKind::SpaceBefore => self.space_before_local,
            CounterKind::SpaceInLine => self.space_before_line_cumulative,
            CounterKind::SpaceInClue => self.space_before_global_cumulative,
        }
    }
}

/// The per-word numbers a surface can annotate
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterKind {
    /// Character count
    Letters,
    /// Word number within the line
    WordInLine,
    /// Word number within the clue
    WordInClue,
    /// Spaces before this word
    SpaceBefore,
    /// Spaces so far in this line
    SpaceInLine,
    /// Spaces so far in the clue
    SpaceInClue,
}

impl CounterKind {
    /// All counters in display order
    pub const ALL: [Self; 6] = [
        Self::Letters,
        Self::WordInLine,
        Self::WordInClue,
        Self::SpaceBefore,
        Self::SpaceInLine,
        Self::SpaceInClue,
    ];

    /// Checkbox-style description
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Letters => "Word character count",
            Self::WordInLine => "Word count (per line)",
            Self::WordInClue => "Word count (entire clue)",
            Self::SpaceBefore => "Space count",
            Self::SpaceInLine => "Space count (per line)",
            Self::SpaceInClue => "Space count (entire clue)",
        }
    }
}

/// One source line of the clue
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "words", rename_all = "snake_case")]
pub enum Line {
    /// Empty or whitespace-only source line
    Blank,
    /// A line with at least one word
    Words(Vec<Word>),
}

impl Line {
    /// Words on this line; empty for a blank line
    #[must_use]
    pub fn words(&self) -> &[Word] {
        match self {
            Self::Blank => &[],
            Self::Words(words) => words,
        }
    }

    /// Whether this is a blank marker
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

/// Text-scope accumulator, carried across lines
#[derive(Debug, Default)]
struct ClueTotals {
    words: usize,
    spaces: usize,
}

/// A word's location inside a trimmed line, in characters
struct WordSpan<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

/// Tokenize `text` into lines of annotated words
///
/// Empty or whitespace-only text yields no lines at all; otherwise every
/// source line produces one [`Line`], blank ones included.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Line> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut totals = ClueTotals::default();
    text.split('\n')
        .map(|line| tokenize_line(line, &mut totals))
        .collect()
}

/// Total number of words across `lines`
#[must_use]
pub fn word_count(lines: &[Line]) -> usize {
    lines.iter().map(|l| l.words().len()).sum()
}

/// Find a word by its clue-wide number
#[must_use]
pub fn find_word(lines: &[Line], number_global: usize) -> Option<&Word> {
    lines
        .iter()
        .flat_map(Line::words)
        .find(|w| w.number_global == number_global)
}

fn tokenize_line(line: &str, totals: &mut ClueTotals) -> Line {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }

    let mut line_spaces = 0;
    let mut previous_end = None;

    let words = word_spans(trimmed)
        .into_iter()
        .enumerate()
        .map(|(idx, span)| {
            let space_before = previous_end.map_or(0, |end| span.start - end);
            previous_end = Some(span.end);

            line_spaces += space_before;
            totals.spaces += space_before;
            totals.words += 1;

            Word {
                text: span.text.to_string(),
                letter_count: span.text.chars().filter(char::is_ascii_alphanumeric).count(),
                number_in_line: idx + 1,
                number_global: totals.words,
                space_before_local: space_before,
                space_before_line_cumulative: line_spaces,
                space_before_global_cumulative: totals.spaces,
            }
        })
        .collect();

    Line::Words(words)
}

/// Split a trimmed line on whitespace runs, recording char offsets
fn word_spans(line: &str) -> Vec<WordSpan<'_>> {
    let mut spans = Vec::new();
    let mut open: Option<(usize, usize)> = None;
    let mut chars_seen = 0;

    for (byte_pos, ch) in line.char_indices() {
        match (ch.is_whitespace(), open) {
            (true, Some((start_byte, start))) => {
                spans.push(WordSpan {
                    text: &line[start_byte..byte_pos],
                    start,
                    end: chars_seen,
                });
                open = None;
            }
            (false, None) => open = Some((byte_pos, chars_seen)),
            _ => {}
        }
        chars_seen += 1;
    }

    if let Some((start_byte, start)) = open {
        spans.push(WordSpan {
            text: &line[start_byte..],
            start,
            end: chars_seen,
        });
    }

    spans
}
