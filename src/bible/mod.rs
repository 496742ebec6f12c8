//! Scripture reference parsing, verse document loading and lookup.
//!
//! One generic engine serves every language; the per-language differences
//! are a book catalog, a document path and a few parsing flags.

/// Per-language book catalogs and the `Language` enum
pub mod catalog;
/// Verse document model
pub mod document;
/// Language dispatch and per-language services
pub mod engine;
/// Document sources and the per-language cache
pub mod loader;
/// Persisted entry shapes and coordinate normalization
pub mod normalize;
/// Free-text reference parsing
pub mod reference;
/// Verse selection and formatting
pub mod resolver;
/// Verse list / range grammar
pub mod verse_spec;

// Re-export key components
pub use catalog::{BookCatalog, Language};
pub use document::VerseDocument;
pub use engine::{LanguageProfile, LanguageService, VerseEngine};
pub use loader::{DocumentSource, FsDocumentSource, HttpDocumentSource, SlotState, VerseStore};
pub use normalize::{Coordinates, EntryShape, VerseEntry};
pub use reference::Reference;
pub use verse_spec::{VerseSelector, VerseSpec};
