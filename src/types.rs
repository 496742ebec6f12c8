//! Core type definitions for compile-time safety.
//!
//! Newtype wrappers keep 0-based catalog positions apart from the 1-based
//! book numbers found in persisted entries and human-facing references.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based position of a book in a language catalog and verse document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookIndex(pub usize);

impl BookIndex {
    /// Create a new `BookIndex` from a 0-based position.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Convert a 1-based book number (Genesis = 1). Zero means "absent".
    pub const fn from_number(number: u32) -> Option<Self> {
        if number == 0 {
            None
        } else {
            Some(Self(number as usize - 1))
        }
    }

    /// Get the 0-based position.
    pub const fn get(self) -> usize {
        self.0
    }

    /// The 1-based book number used in persisted records.
    pub const fn number(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for BookIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.number())
    }
}

/// Granularity of a periodic verse assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// Verse of the month, period formatted `YYYY-MM`.
    Monthly,
    /// Verse of the year, period formatted `YYYY`.
    Annual,
}

impl PeriodKind {
    /// Returns the human-readable name of this period kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Annual => "annual",
        }
    }
}
