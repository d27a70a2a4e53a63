//! Shuffled, cyclic deck of vocabulary entries.

use crate::error::{LoadError, Result};
use crate::types::VocabEntry;
use crate::vocabulary::{self, VocabSource};
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::Path;

/// Vocabulary entries in a fixed random order, drawn round-robin.
///
/// The order is chosen once at construction. Reaching the end of the deck
/// starts over from the first entry in the same order.
#[derive(Debug, Clone)]
pub struct Deck {
    entries: Vec<VocabEntry>,
    next_index: usize,
}

impl Deck {
    /// Build a deck from a keyed mapping, shuffled with the thread RNG.
    pub fn load(source: VocabSource) -> Result<Self> {
        Self::load_with_rng(source, &mut rand::rng())
    }

    /// Build a deck from a keyed mapping, shuffled with the given RNG.
    pub fn load_with_rng<R: Rng + ?Sized>(source: VocabSource, rng: &mut R) -> Result<Self> {
        let mut entries = vocabulary::entries(source)?;
        if entries.is_empty() {
            return Err(LoadError::Empty);
        }

        entries.shuffle(rng);
        entries.shrink_to_fit();

        Ok(Self {
            entries,
            next_index: 0,
        })
    }

    /// Read a vocabulary file and build a deck from it.
    pub fn open(path: &Path) -> Result<Self> {
        Self::load(vocabulary::read(path)?)
    }

    /// Return a copy of the next entry, wrapping around at the end.
    pub fn get_next(&mut self) -> VocabEntry {
        if self.next_index >= self.entries.len() {
            self.next_index = 0;
        }

        let entry = self.entries[self.next_index].clone();
        self.next_index += 1;
        entry
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: an empty deck cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
