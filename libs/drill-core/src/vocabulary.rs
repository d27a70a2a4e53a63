//! Vocabulary source reader.
//!
//! # Format
//! ```json
//! {
//!     "三": {
//!         "kana": "さん",
//!         "translation": "three",
//!         "sentence_jp": "彼女は三人の子供の母親です。",
//!         "sentence_en": "She's the mother of three children.",
//!         "pos": "Numeral"
//!     }
//! }
//! ```
//!
//! Every record must carry all five fields as strings. The long field names
//! (`phonetic`, `example_source`, `example_target`, `part_of_speech`) are
//! accepted as well.

use crate::error::{LoadError, Result};
use crate::types::VocabEntry;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::Path;

/// Keyed vocabulary mapping: symbol -> record.
pub type VocabSource = Map<String, Value>;

#[derive(Debug, Deserialize)]
struct VocabRecord {
    #[serde(alias = "kana")]
    phonetic: String,
    translation: String,
    #[serde(alias = "sentence_jp")]
    example_source: String,
    #[serde(alias = "sentence_en")]
    example_target: String,
    #[serde(alias = "pos")]
    part_of_speech: String,
}

impl VocabRecord {
    fn into_entry(self, symbol: String) -> Result<VocabEntry> {
        if symbol.trim().is_empty() {
            return Err(LoadError::EmptyField {
                symbol,
                field: "symbol",
            });
        }
        if self.translation.trim().is_empty() {
            return Err(LoadError::EmptyField {
                symbol,
                field: "translation",
            });
        }

        Ok(VocabEntry {
            symbol,
            phonetic: self.phonetic,
            translation: self.translation,
            example_source: self.example_source,
            example_target: self.example_target,
            part_of_speech: self.part_of_speech,
        })
    }
}

/// Parse JSON text into a vocabulary mapping.
pub fn parse(content: &str) -> Result<VocabSource> {
    match serde_json::from_str::<Value>(content)? {
        Value::Object(map) => Ok(map),
        _ => Err(LoadError::NotAnObject),
    }
}

/// Read and parse a vocabulary file from disk.
pub fn read(path: &Path) -> Result<VocabSource> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    parse(&content)
}

/// Convert every record of a mapping into an entry.
///
/// Fails on the first record that is missing a field, has a non-string
/// field, or has an empty symbol or translation.
pub fn entries(source: VocabSource) -> Result<Vec<VocabEntry>> {
    source
        .into_iter()
        .map(|(symbol, value)| match serde_json::from_value::<VocabRecord>(value) {
            Ok(record) => record.into_entry(symbol),
            Err(source) => Err(LoadError::Malformed { symbol, source }),
        })
        .collect()
}
