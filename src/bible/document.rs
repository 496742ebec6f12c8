//! Verse document model.
//!
//! Mirrors the static per-language JSON published with the site:
//! `{"Book": [{"Chapter": [{"Verse": [{"Verse": "text"}]}]}]}`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::BookIndex;

/// One language's Book → Chapter → Verse tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerseDocument {
    /// Books in catalog order.
    #[serde(rename = "Book", default)]
    pub books: Vec<Book>,
}

/// A book's chapters, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Book {
    /// Chapters in order; chapter `n` is at index `n - 1`.
    #[serde(rename = "Chapter", default)]
    pub chapters: Vec<Chapter>,
}

/// A chapter's verses, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Chapter {
    /// Verses in order; verse `n` is at index `n - 1`.
    #[serde(rename = "Verse", default)]
    pub verses: Vec<Verse>,
}

/// A single verse.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Verse {
    /// Verse text.
    #[serde(rename = "Verse", default)]
    pub text: String,
}

impl VerseDocument {
    /// Parse a document body. `source_name` is used in error messages.
    pub fn from_json(body: &str, source_name: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| Error::parse(format!("Invalid verse document: {e}"), source_name))
    }

    /// Number of books present.
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Book at a 0-based index.
    pub fn book(&self, index: BookIndex) -> Option<&Book> {
        self.books.get(index.get())
    }

    /// Chapter by 1-based number.
    pub fn chapter(&self, index: BookIndex, chapter: u32) -> Option<&Chapter> {
        let chapter = usize::try_from(chapter).ok()?.checked_sub(1)?;
        self.book(index)?.chapters.get(chapter)
    }

    /// Text of one 1-based verse.
    pub fn verse_text(&self, index: BookIndex, chapter: u32, verse: u32) -> Option<&str> {
        let verse = usize::try_from(verse).ok()?.checked_sub(1)?;
        self.chapter(index, chapter)?
            .verses
            .get(verse)
            .map(|v| v.text.as_str())
    }

    /// Iterate every verse as `(book, chapter, verse, text)` with 1-based
    /// chapter and verse numbers.
    pub fn iter_verses(&self) -> impl Iterator<Item = (BookIndex, u32, u32, &str)> {
        self.books.iter().enumerate().flat_map(|(b, book)| {
            book.chapters.iter().zip(1u32..).flat_map(move |(chapter, c)| {
                chapter
                    .verses
                    .iter()
                    .zip(1u32..)
                    .map(move |(verse, v)| (BookIndex(b), c, v, verse.text.as_str()))
            })
        })
    }
}

impl Chapter {
    /// Number of verses.
    pub fn verse_count(&self) -> usize {
        self.verses.len()
    }
}
