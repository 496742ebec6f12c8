//! Verses for the site's display widgets: today's verse, the verse of the
//! month or year, and a random verse.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

use super::entries::{month_key, year_key, VerseEntrySource};
use crate::bible::normalize::Coordinates;
use crate::bible::{LanguageService, VerseEngine, VerseEntry, VerseSpec};
use crate::error::Result;
use crate::types::{BookIndex, PeriodKind};

/// A verse ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedVerse {
    /// Label such as `"John 3:16"`.
    pub reference: String,
    /// Numbered verse lines.
    pub text: String,
    /// Devotional note, if the entry has one.
    pub annotation: Option<String>,
}

/// Resolves persisted entries for display in a chosen language.
pub struct VerseDisplay<'a> {
    engine: &'a VerseEngine,
    entries: &'a dyn VerseEntrySource,
}

impl<'a> VerseDisplay<'a> {
    /// Create a display service over an engine and an entry source.
    pub fn new(engine: &'a VerseEngine, entries: &'a dyn VerseEntrySource) -> Self {
        Self { engine, entries }
    }

    /// Verse assigned to `date`.
    ///
    /// `Err` only for an unsupported language; a missing entry or an
    /// unreachable backend is `Ok(None)`.
    pub async fn for_date(&self, language: &str, date: NaiveDate) -> Result<Option<DisplayedVerse>> {
        let service = self.engine.for_language(language)?;
        let entry = match self.entries.daily(date).await {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Failed to fetch verse for {date}: {e}");
                None
            }
        };
        Ok(match entry {
            Some(entry) => display_entry(&service, &entry).await,
            None => None,
        })
    }

    /// Verse of the month containing `date`.
    pub async fn for_month(&self, language: &str, date: NaiveDate) -> Result<Option<DisplayedVerse>> {
        self.for_period(language, PeriodKind::Monthly, &month_key(date)).await
    }

    /// Verse of the year containing `date`.
    pub async fn for_year(&self, language: &str, date: NaiveDate) -> Result<Option<DisplayedVerse>> {
        self.for_period(language, PeriodKind::Annual, &year_key(date)).await
    }

    /// Verse assigned to an explicit period key.
    pub async fn for_period(&self, language: &str, kind: PeriodKind, period: &str) -> Result<Option<DisplayedVerse>> {
        let service = self.engine.for_language(language)?;
        let entry = match self.entries.periodic(kind, period).await {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Failed to fetch {} verse for {period}: {e}", kind.name());
                None
            }
        };
        Ok(match entry {
            Some(entry) => display_entry(&service, &entry).await,
            None => None,
        })
    }
}

/// Resolve an entry's coordinates; fall back to the text stored with the
/// entry when the document has nothing for them.
pub async fn display_entry(service: &LanguageService<'_>, entry: &VerseEntry) -> Option<DisplayedVerse> {
    let coords = service.normalize(entry);
    let resolved = match &coords {
        Some(c) => service.resolve_coordinates(c).await,
        None => None,
    };

    let stored = entry
        .verse_text
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);
    let text = resolved.or(stored)?;

    let reference = coords.as_ref().map_or_else(
        || {
            let book = entry.book_name.as_deref().unwrap_or_default().trim();
            let verses = entry.verse_numbers.as_deref().unwrap_or_default().trim();
            format!("{book} {verses}").trim().to_string()
        },
        |c| service.label(c),
    );

    Some(DisplayedVerse {
        reference,
        text,
        annotation: entry.annotation.clone().filter(|a| !a.trim().is_empty()),
    })
}

/// Pick a verse uniformly by book, then chapter, then verse, skipping
/// empty books and chapters.
pub async fn random_verse<R: Rng>(service: &LanguageService<'_>, rng: &mut R) -> Option<DisplayedVerse> {
    let document = service.document().await?;

    let books: Vec<_> = document
        .books
        .iter()
        .enumerate()
        .take(service.catalog().len())
        .filter(|(_, b)| b.chapters.iter().any(|c| !c.verses.is_empty()))
        .collect();
    let (book, contents) = books.choose(rng)?;

    let chapters: Vec<_> = contents
        .chapters
        .iter()
        .zip(1u32..)
        .filter(|(c, _)| !c.verses.is_empty())
        .collect();
    let (chapter, chapter_number) = chapters.choose(rng)?;

    let verse = u32::try_from(rng.gen_range(0..chapter.verses.len())).ok()? + 1;
    let coords = Coordinates {
        book: BookIndex(*book),
        chapter: *chapter_number,
        verses: VerseSpec::single(verse),
    };

    let text = service.resolve_coordinates(&coords).await?;
    Some(DisplayedVerse {
        reference: service.label(&coords),
        text,
        annotation: None,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::bible::loader::tests::CountingSource;
    use crate::bible::Language;
    use crate::services::entries::EntryTable;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    const GENESIS_ONLY: &str = r#"{"Book":[{"Chapter":[{"Verse":[{"Verse":"In the beginning"},{"Verse":"And the earth"}]}]}]}"#;

    fn engine() -> VerseEngine {
        let source = CountingSource::with("bibles/en.json", GENESIS_ONLY.to_string());
        source
            .bodies
            .lock()
            .unwrap()
            .insert("bibles/kn.json".to_string(), GENESIS_ONLY.to_string());
        VerseEngine::new(Arc::new(source))
    }

    fn table() -> EntryTable {
        EntryTable::new(vec![
            VerseEntry {
                date: NaiveDate::from_ymd_opt(2026, 10, 18),
                book_number: Some(1),
                verse_numbers: Some("1:2".into()),
                annotation: Some("Creation".into()),
                ..Default::default()
            },
            VerseEntry {
                date: NaiveDate::from_ymd_opt(2026, 10, 19),
                book_name: Some("Nowhere".into()),
                verse_numbers: Some("9:9".into()),
                verse_text: Some("Typed by the editor".into()),
                ..Default::default()
            },
            VerseEntry {
                date: NaiveDate::from_ymd_opt(2026, 10, 20),
                book_number: Some(99),
                book_name: Some("Enoch".into()),
                verse_numbers: Some("1:1".into()),
                verse_text: Some("Stored apocrypha".into()),
                ..Default::default()
            },
            VerseEntry {
                period_type: Some(PeriodKind::Annual),
                period: Some("2026".into()),
                book_name: Some("ಆದಿಕಾಂಡ".into()),
                verse_numbers: Some("1:1-2".into()),
                ..Default::default()
            },
        ])
    }

    #[tokio::test]
    async fn todays_verse_resolves_from_document() {
        let engine = engine();
        let table = table();
        let display = VerseDisplay::new(&engine, &table);

        let verse = display
            .for_date("en", NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(verse.reference, "Genesis 1:2");
        assert_eq!(verse.text, "2. And the earth");
        assert_eq!(verse.annotation.as_deref(), Some("Creation"));
    }

    #[tokio::test]
    async fn unresolvable_entry_falls_back_to_stored_text() {
        let engine = engine();
        let table = table();
        let display = VerseDisplay::new(&engine, &table);

        let verse = display
            .for_date("en", NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(verse.text, "Typed by the editor");
        assert_eq!(verse.reference, "Nowhere 9:9");
    }

    #[tokio::test]
    async fn book_number_past_catalog_keeps_stored_label() {
        let engine = engine();
        let table = table();
        let display = VerseDisplay::new(&engine, &table);

        let verse = display
            .for_date("en", NaiveDate::from_ymd_opt(2026, 10, 20).unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(verse.reference, "Enoch 1:1");
        assert_eq!(verse.text, "Stored apocrypha");
    }

    #[tokio::test]
    async fn missing_day_is_none_and_bad_language_is_err() {
        let engine = engine();
        let table = table();
        let display = VerseDisplay::new(&engine, &table);
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        assert!(display.for_date("en", date).await.unwrap().is_none());
        assert!(display.for_date("zz", date).await.is_err());
    }

    #[tokio::test]
    async fn annual_verse_uses_language_catalog() {
        let engine = engine();
        let table = table();
        let display = VerseDisplay::new(&engine, &table);

        let verse = display
            .for_year("kn", NaiveDate::from_ymd_opt(2026, 5, 1).unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(verse.reference, "ಆದಿಕಾಂಡ 1:1-2");
        assert_eq!(verse.text, "1. In the beginning\n2. And the earth");
        assert!(display
            .for_month("kn", NaiveDate::from_ymd_opt(2026, 5, 1).unwrap())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn random_verse_comes_from_document() {
        let engine = engine();
        let service = engine.service(Language::English);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            let verse = random_verse(&service, &mut rng).await.unwrap();
            assert!(verse.reference == "Genesis 1:1" || verse.reference == "Genesis 1:2");
            assert!(verse.text.starts_with("1. ") || verse.text.starts_with("2. "));
        }
        assert!(random_verse(&engine.service(Language::Hindi), &mut rng).await.is_none());
    }
}
