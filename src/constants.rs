//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Scripture catalog constants.
pub mod catalog {
    /// Number of books in every language catalog (39 OT + 27 NT).
    pub const BOOK_COUNT: usize = 66;

    /// Directory under the verse source holding one document per language.
    pub const DOCUMENT_DIR: &str = "bibles";
}

/// Search constants.
pub mod search {
    /// Default maximum number of verse search results.
    pub const MAX_SEARCH_RESULTS: usize = 20;

    /// Maximum number of book-name suggestions offered for an unknown book.
    pub const MAX_BOOK_SUGGESTIONS: usize = 3;

    /// Minimum fuzzy score for a book-name suggestion.
    pub const MIN_SUGGESTION_SCORE: i64 = 20;
}

/// Session gate constants.
pub mod session {
    /// Default inactivity period before an admin session is signed out.
    pub const DEFAULT_TIMEOUT_MINUTES: u64 = 30;

    /// Channel buffer size for session events and activity notifications.
    pub const CHANNEL_BUFFER_SIZE: usize = 64;
}

/// Network constants.
pub mod network {
    /// Default HTTP client timeout for document fetches.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
}
