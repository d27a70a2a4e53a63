//! Core drill engine used by the terminal application.
//!
//! Provides:
//! - Answer matching with fuzzy similarity (Levenshtein distance)
//! - Vocabulary source reader for the JSON vocabulary format
//! - Shuffled, cyclic deck of entries
//! - Session state machine (hint levels, bounded answer history)

pub mod deck;
pub mod error;
pub mod matching;
pub mod session;
pub mod types;
pub mod vocabulary;

pub use deck::Deck;
pub use error::{LoadError, Result};
pub use matching::{is_correct, judge, levenshtein_distance, similarity, Verdict, DEFAULT_THRESHOLD};
pub use session::{Session, SessionEvent, SessionSummary, SessionView, HISTORY_LIMIT};
pub use types::{DrillSettings, HintLevel, HistoryEntry, VocabEntry};
pub use vocabulary::VocabSource;
