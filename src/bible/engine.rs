//! Language dispatch: one generic verse engine, parameterized per language.

use std::sync::Arc;

use super::catalog::{book_index, book_name, BookCatalog, Language};
use super::document::VerseDocument;
use super::loader::{source_from_config, DocumentSource, VerseStore};
use super::normalize::{normalize_entry, Coordinates, VerseEntry};
use super::reference::{parse_reference, Reference};
use super::resolver::resolve_in;
use super::verse_spec::VerseSpec;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::BookIndex;

/// What differs between languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageProfile {
    /// The language described.
    pub language: Language,
    /// Accept `"Book 23"` (no colon) as a whole-chapter reference.
    pub chapter_only_references: bool,
    /// An empty verse spec returns the whole chapter.
    pub supports_whole_chapter: bool,
    /// `a-b` tokens in a verse spec expand to ranges.
    pub supports_ranges: bool,
}

impl LanguageProfile {
    const fn new(language: Language, chapter_only_references: bool) -> Self {
        Self {
            language,
            chapter_only_references,
            supports_whole_chapter: true,
            supports_ranges: true,
        }
    }

    /// The language's book catalog.
    pub fn catalog(&self) -> &'static BookCatalog {
        self.language.catalog()
    }
}

/// Static dispatch table. Only Tamil and Kannada accept chapter-only
/// references; every language gets whole-chapter and range support.
static PROFILES: [LanguageProfile; 10] = [
    LanguageProfile::new(Language::English, false),
    LanguageProfile::new(Language::Tamil, true),
    LanguageProfile::new(Language::Kannada, true),
    LanguageProfile::new(Language::Telugu, false),
    LanguageProfile::new(Language::Hindi, false),
    LanguageProfile::new(Language::Malayalam, false),
    LanguageProfile::new(Language::Marathi, false),
    LanguageProfile::new(Language::Bengali, false),
    LanguageProfile::new(Language::Gujarati, false),
    LanguageProfile::new(Language::Punjabi, false),
];

/// Owns the document cache; hands out per-language services.
pub struct VerseEngine {
    store: VerseStore,
}

impl VerseEngine {
    /// Create an engine over a document source with an empty cache.
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self { store: VerseStore::new(source) }
    }

    /// Create an engine over the configured document source.
    pub fn from_config(config: &Config) -> Self {
        Self::new(source_from_config(config))
    }

    /// The shared document cache.
    pub const fn store(&self) -> &VerseStore {
        &self.store
    }

    /// Profile for a language.
    pub fn profile(language: Language) -> &'static LanguageProfile {
        PROFILES
            .iter()
            .find(|p| p.language == language)
            .unwrap_or(&PROFILES[0])
    }

    /// Services for a language code. Unknown codes are a configuration
    /// defect and fail loudly.
    pub fn for_language(&self, code: &str) -> Result<LanguageService<'_>> {
        let language =
            Language::from_code(code).ok_or_else(|| Error::LanguageUnsupported(code.trim().to_string()))?;
        Ok(self.service(language))
    }

    /// Services for a known language.
    pub fn service(&self, language: Language) -> LanguageService<'_> {
        LanguageService {
            profile: Self::profile(language),
            store: &self.store,
        }
    }
}

/// Catalog, parser and resolver bound to one language.
#[derive(Clone, Copy)]
pub struct LanguageService<'a> {
    profile: &'static LanguageProfile,
    store: &'a VerseStore,
}

impl LanguageService<'_> {
    /// The language served.
    pub const fn language(&self) -> Language {
        self.profile.language
    }

    /// The language's profile flags.
    pub const fn profile(&self) -> &'static LanguageProfile {
        self.profile
    }

    /// The language's book catalog.
    pub fn catalog(&self) -> &'static BookCatalog {
        self.profile.catalog()
    }

    /// Parse a free-text reference with this language's rules.
    pub fn parse(&self, reference: &str) -> Option<Reference> {
        parse_reference(reference, self.profile.chapter_only_references)
    }

    /// Parse a verse spec with this language's rules.
    pub fn verse_spec(&self, spec: &str) -> VerseSpec {
        VerseSpec::parse_with(spec, self.profile.supports_ranges)
    }

    /// Load (or reuse) this language's verse document.
    pub async fn document(&self) -> Option<Arc<VerseDocument>> {
        self.store.load(self.profile.language).await
    }

    /// Resolve coordinates given as a 0-based book, 1-based chapter and a
    /// textual verse spec.
    pub async fn resolve(&self, book: BookIndex, chapter: u32, verse_spec: &str) -> Option<String> {
        self.resolve_spec(book, chapter, &self.verse_spec(verse_spec)).await
    }

    /// Resolve normalized coordinates.
    pub async fn resolve_coordinates(&self, coords: &Coordinates) -> Option<String> {
        self.resolve_spec(coords.book, coords.chapter, &coords.verses).await
    }

    async fn resolve_spec(&self, book: BookIndex, chapter: u32, spec: &VerseSpec) -> Option<String> {
        if spec.is_whole_chapter() && !self.profile.supports_whole_chapter {
            return None;
        }
        let document = self.document().await?;
        resolve_in(&document, self.catalog().len(), book, chapter, spec)
    }

    /// Parse a reference into coordinates without loading anything.
    pub fn coordinates(&self, reference: &str) -> Option<Coordinates> {
        let parsed = self.parse(reference)?;
        Some(Coordinates {
            book: book_index(self.catalog(), &parsed.book)?,
            chapter: parsed.chapter_number()?,
            verses: self.verse_spec(&parsed.verses),
        })
    }

    /// Parse and resolve a free-text reference.
    pub async fn lookup(&self, reference: &str) -> Option<String> {
        let Some(coords) = self.coordinates(reference) else {
            tracing::debug!("Unresolvable {} reference: {reference:?}", self.language().name());
            return None;
        };
        self.resolve_coordinates(&coords).await
    }

    /// Normalize a persisted entry against this language's catalog.
    pub fn normalize(&self, entry: &VerseEntry) -> Option<Coordinates> {
        normalize_entry(entry, self.catalog())
    }

    /// Human-readable label such as `"John 3:16"` or `"Psalms 23"`.
    pub fn label(&self, coords: &Coordinates) -> String {
        let book = book_name(self.catalog(), coords.book).unwrap_or("?");
        if coords.verses.is_whole_chapter() {
            format!("{book} {}", coords.chapter)
        } else {
            format!("{book} {}:{}", coords.chapter, coords.verses)
        }
    }
}
