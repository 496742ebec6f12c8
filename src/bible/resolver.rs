//! Verse extraction and formatting.
//!
//! Output is one line per verse, `"{n}. {text}"`, joined with newlines, for
//! every language. Out-of-range coordinates yield `None`, never a panic.

use super::document::VerseDocument;
use super::verse_spec::VerseSpec;
use crate::types::BookIndex;

/// A verse picked out of a chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVerse<'a> {
    /// 1-based verse number.
    pub number: usize,
    /// Verse text, trimmed.
    pub text: &'a str,
}

/// Select the verses named by `spec` from one chapter.
///
/// `catalog_len` bounds the book index in addition to the document itself,
/// so a document carrying extra books cannot be read past the catalog.
/// Returns `None` when coordinates are out of range or nothing survives.
pub fn select_verses<'a>(
    document: &'a VerseDocument,
    catalog_len: usize,
    book: BookIndex,
    chapter: u32,
    spec: &VerseSpec,
) -> Option<Vec<ResolvedVerse<'a>>> {
    if book.get() >= catalog_len {
        return None;
    }
    let chapter = document.chapter(book, chapter)?;

    let verses: Vec<_> = spec
        .indices(chapter.verse_count())
        .into_iter()
        .filter_map(|i| {
            chapter.verses.get(i).map(|v| ResolvedVerse {
                number: i + 1,
                text: v.text.trim(),
            })
        })
        .collect();

    (!verses.is_empty()).then_some(verses)
}

/// Format selected verses as numbered lines.
pub fn format_verses(verses: &[ResolvedVerse<'_>]) -> String {
    verses
        .iter()
        .map(|v| format!("{}. {}", v.number, v.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Select and format in one step.
pub fn resolve_in(
    document: &VerseDocument,
    catalog_len: usize,
    book: BookIndex,
    chapter: u32,
    spec: &VerseSpec,
) -> Option<String> {
    select_verses(document, catalog_len, book, chapter, spec).map(|v| format_verses(&v))
}
