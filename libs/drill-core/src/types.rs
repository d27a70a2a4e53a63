//! Core types for the vocabulary drill.

use crate::matching::DEFAULT_THRESHOLD;

/// One vocabulary record. The symbol is the prompt shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabEntry {
    pub symbol: String,
    pub phonetic: String,
    /// May list several glosses separated by commas ("to eat, to drink").
    pub translation: String,
    pub example_source: String,
    pub example_target: String,
    pub part_of_speech: String,
}

/// How much of the current entry is disclosed beyond the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintLevel {
    Off,
    Partial,
    Full,
}

impl Default for HintLevel {
    fn default() -> Self {
        Self::Off
    }
}

impl HintLevel {
    /// Next level in the toggle cycle: Off -> Partial -> Full -> Off.
    pub fn next(self) -> Self {
        match self {
            Self::Off => Self::Partial,
            Self::Partial => Self::Full,
            Self::Full => Self::Off,
        }
    }

    /// Whether the phonetic field is visible given the baseline preference.
    pub fn shows_phonetic(self, baseline: bool) -> bool {
        match self {
            Self::Off => baseline,
            Self::Partial | Self::Full => true,
        }
    }

    /// Whether the translation is visible given the baseline preference.
    pub fn shows_translation(self, baseline: bool) -> bool {
        match self {
            Self::Off | Self::Partial => baseline,
            Self::Full => true,
        }
    }
}

/// Startup configuration for a drill session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrillSettings {
    /// Show the phonetic field when no hint is active.
    pub show_phonetic: bool,
    /// Show the translation when no hint is active.
    pub show_translation: bool,
    /// Minimum similarity for an answer to count as correct.
    pub threshold: f64,
}

impl Default for DrillSettings {
    fn default() -> Self {
        Self {
            show_phonetic: false,
            show_translation: false,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// A judged answer, kept in the session history.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub sequence_number: u64,
    pub symbol: String,
    pub phonetic: String,
    pub translation: String,
    pub example_target: String,
    /// The text the user submitted.
    pub answer: String,
    pub correct: bool,
    /// Best similarity score of the answer, between 0.0 and 1.0.
    pub similarity: f64,
    /// Accepted only because it matched the first listed translation.
    pub matched_first_alternative: bool,
}
