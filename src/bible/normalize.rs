//! Persisted verse entries and their normalization to coordinates.
//!
//! Entries written by the admin console come in two shapes: newer rows carry
//! an explicit 1-based `book_number`, older rows only a `book_name`, and
//! either kind may pack `"chapter:verses"` into `verse_numbers`. Entries are
//! classified into an [`EntryShape`] on ingestion and reduced to
//! [`Coordinates`] before anything else looks at them.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::catalog::{book_index, BookCatalog};
use super::verse_spec::VerseSpec;
use crate::types::{BookIndex, PeriodKind};

/// A persisted verse row (daily, monthly or annual).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseEntry {
    /// Calendar date for daily verses.
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Period granularity for monthly/annual verses.
    #[serde(default)]
    pub period_type: Option<PeriodKind>,

    /// Period key: `YYYY-MM` or `YYYY`.
    #[serde(default)]
    pub period: Option<String>,

    /// 1-based book number; zero or absent means "use `book_name`".
    #[serde(default, deserialize_with = "number_or_string")]
    pub book_number: Option<u32>,

    /// 1-based chapter number.
    #[serde(default, deserialize_with = "number_or_string")]
    pub chapter_number: Option<u32>,

    /// Verse spec, possibly prefixed with `"chapter:"`.
    #[serde(default)]
    pub verse_numbers: Option<String>,

    /// Book name in the entry's language.
    #[serde(default)]
    pub book_name: Option<String>,

    /// Verse text as typed by the editor.
    #[serde(default)]
    pub verse_text: Option<String>,

    /// Devotional note shown under the verse.
    #[serde(default)]
    pub annotation: Option<String>,
}

/// Backend columns arrive as numbers or numeric strings depending on the
/// client that wrote them.
fn number_or_string<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

/// The two persisted encodings of a verse location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryShape {
    /// Book given by number.
    Explicit {
        /// 0-based book position.
        book: BookIndex,
        /// Chapter column, if set.
        chapter: Option<u32>,
        /// Raw `verse_numbers` column.
        verses: String,
    },
    /// Book given only by name.
    Legacy {
        /// Book name as stored.
        book_name: String,
        /// Chapter column, if set.
        chapter: Option<u32>,
        /// Raw `verse_numbers` column, possibly `"c:v"`.
        combined_verse_numbers: String,
    },
}

impl EntryShape {
    /// Classify an entry.
    pub fn of(entry: &VerseEntry) -> Self {
        let chapter = entry.chapter_number.filter(|c| *c > 0);
        let verses = entry.verse_numbers.clone().unwrap_or_default();
        match entry.book_number.and_then(BookIndex::from_number) {
            Some(book) => Self::Explicit { book, chapter, verses },
            None => Self::Legacy {
                book_name: entry.book_name.clone().unwrap_or_default(),
                chapter,
                combined_verse_numbers: verses,
            },
        }
    }
}

/// Structured location of the verses to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    /// 0-based book position.
    pub book: BookIndex,
    /// 1-based chapter.
    pub chapter: u32,
    /// Which verses.
    pub verses: VerseSpec,
}

/// Reduce an entry shape to coordinates against a language catalog.
///
/// `None` means the book could not be identified (including a book number
/// past the end of the catalog), or the `"c:v"` prefix was not a chapter
/// number.
pub fn normalize(shape: &EntryShape, catalog: &BookCatalog) -> Option<Coordinates> {
    let (book, chapter, verses) = match shape {
        EntryShape::Explicit { book, chapter, verses } => {
            if book.get() >= catalog.len() {
                return None;
            }
            (*book, *chapter, verses.as_str())
        }
        EntryShape::Legacy { book_name, chapter, combined_verse_numbers } => {
            let book = book_index(catalog, book_name)?;
            (book, *chapter, combined_verse_numbers.as_str())
        }
    };

    let mut chapter = chapter.unwrap_or(1);
    let mut verses = verses.trim();
    if let Some((prefix, rest)) = verses.split_once(':') {
        chapter = prefix.trim().parse::<u32>().ok().filter(|c| *c > 0)?;
        verses = rest.trim();
    }

    Some(Coordinates {
        book,
        chapter,
        verses: VerseSpec::parse(verses),
    })
}

/// Classify and normalize in one step.
pub fn normalize_entry(entry: &VerseEntry, catalog: &BookCatalog) -> Option<Coordinates> {
    normalize(&EntryShape::of(entry), catalog)
}
