//! Candidate pool: ordered, duplicate-free participant identifiers.

use crate::models::session::RouletteError;
use serde::{Deserialize, Serialize};

/// Ordered collection of participant identifiers. Insertion order is the
/// display/draw order until a shuffle or consuming draw reorders it.
/// Uniqueness is enforced at insertion (case-sensitive exact match).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pool {
    entries: Vec<String>,
}

impl Pool {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Trim and append a new identifier. Blank names (after trimming) and
    /// duplicates are rejected, not silently merged.
    pub fn add(&mut self, name: &str) -> Result<(), RouletteError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RouletteError::EmptyIdentifier);
        }
        if self.entries.iter().any(|e| e == name) {
            return Err(RouletteError::DuplicateIdentifier);
        }
        self.entries.push(name.to_string());
        Ok(())
    }

    /// Remove and return the identifier at `index`, shifting later entries left.
    pub fn remove_at(&mut self, index: usize) -> Result<String, RouletteError> {
        if index >= self.entries.len() {
            return Err(RouletteError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Empty the pool unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Owned copy of the ordered entries, for rendering or for seeding an
    /// assignment run without aliasing the live pool.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.clone()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
