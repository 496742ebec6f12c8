//! Verse text search and book-name suggestions.
//!
//! Suggestions are a "did you mean" aid for the CLI and search box only.
//! Entry normalization never uses them; it matches book names exactly.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::bible::catalog::book_name;
use crate::bible::{BookCatalog, LanguageService, VerseDocument};
use crate::constants::search::{MAX_BOOK_SUGGESTIONS, MIN_SUGGESTION_SCORE};
use crate::types::BookIndex;

/// A verse whose text matched a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Book position.
    pub book: BookIndex,
    /// 1-based chapter.
    pub chapter: u32,
    /// 1-based verse.
    pub verse: u32,
    /// Label such as `"John 3:16"`.
    pub reference: String,
    /// Verse text, trimmed.
    pub text: String,
}

/// Case-insensitive substring search over a document, in canon order.
pub fn search_document(document: &VerseDocument, catalog: &BookCatalog, query: &str, limit: usize) -> Vec<SearchHit> {
    let query = query.trim().to_lowercase();
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    document
        .iter_verses()
        .filter(|(book, ..)| book.get() < catalog.len())
        .filter(|(.., text)| text.to_lowercase().contains(&query))
        .take(limit)
        .map(|(book, chapter, verse, text)| SearchHit {
            book,
            chapter,
            verse,
            reference: format!("{} {chapter}:{verse}", book_name(catalog, book).unwrap_or("?")),
            text: text.trim().to_string(),
        })
        .collect()
}

/// Catalog names closest to `query`, best first.
pub fn suggest_books(catalog: &BookCatalog, query: &str) -> Vec<&'static str> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let matcher = SkimMatcherV2::default();
    let query_lower = query.to_lowercase();

    let mut scored: Vec<_> = catalog
        .iter()
        .filter_map(|name| {
            let score = matcher.fuzzy_match(&name.to_lowercase(), &query_lower)?;
            (score >= MIN_SUGGESTION_SCORE).then_some((*name, score))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().take(MAX_BOOK_SUGGESTIONS).map(|(name, _)| name).collect()
}

/// Search one language's document.
pub async fn search(service: &LanguageService<'_>, query: &str, limit: usize) -> Vec<SearchHit> {
    match service.document().await {
        Some(document) => search_document(&document, service.catalog(), query, limit),
        None => Vec::new(),
    }
}
