//! Canonical Label Sequence
//!
//! The clock face is a fixed run of 72 two-digit labels: the twelve hour
//! marks `01`..`12` followed by the sixty minute/second marks `00`..`59`.
//! Everything else in the engine lays out or highlights this sequence.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of hour marks at the head of the sequence
pub const HOUR_MARKS: usize = 12;

/// Number of minute/second marks following the hour marks
pub const MINUTE_MARKS: usize = 60;

/// Total length of the canonical sequence
pub const SEQUENCE_LEN: usize = HOUR_MARKS + MINUTE_MARKS;

/// A two-character, zero-padded clock number (`"00"`..`"99"`)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label([u8; 2]);

impl Label {
    /// Build a label from a number below 100
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        if value < 100 {
            Some(Self([b'0' + value / 10, b'0' + value % 10]))
        } else {
            None
        }
    }

    /// Build a label, capping values above 99 at `99`
    #[must_use]
    pub fn saturating(value: u32) -> Self {
        let value = value.min(99) as u8;
        Self([b'0' + value / 10, b'0' + value % 10])
    }

    /// Parse an already-padded two-digit string
    ///
    /// Anything that is not exactly two ASCII digits yields `None`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text.as_bytes() {
            [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => Some(Self([*a, *b])),
            _ => None,
        }
    }

    /// Numeric value of the label
    #[must_use]
    pub fn value(self) -> u8 {
        (self.0[0] - b'0') * 10 + (self.0[1] - b'0')
    }

    /// The label as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII digits by construction.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label({})", self.as_str())
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid label {text:?}")))
    }
}

/// One entry of the canonical sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledItem {
    /// The two-digit label shown in the cell
    pub label: Label,
}

/// Build the canonical sequence: `01`..`12`, then `00`..`59`
#[must_use]
pub fn generate() -> Vec<LabeledItem> {
    let hours = 1..=HOUR_MARKS as u8;
    let minutes = 0..MINUTE_MARKS as u8;

    hours
        .chain(minutes)
        .filter_map(Label::new)
        .map(|label| LabeledItem { label })
        .collect()
}

/// The process-wide canonical sequence, generated on first use
pub fn canonical() -> &'static [LabeledItem] {
    static SEQUENCE: OnceLock<Vec<LabeledItem>> = OnceLock::new();
    SEQUENCE.get_or_init(generate)
}

/// Whether `text` is one of the labels in the canonical sequence
#[must_use]
pub fn contains_label(text: &str) -> bool {
    Label::parse(text).is_some_and(|label| canonical().iter().any(|item| item.label == label))
}
