//! Persisted verse entries.
//!
//! The hosted backend is reached only through [`VerseEntrySource`]. The
//! bundled [`EntryTable`] serves a JSON export of the daily and periodic
//! verse tables, which is also what tests run against.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};

use crate::bible::VerseEntry;
use crate::error::{Error, Result};
use crate::types::PeriodKind;

/// Key-by-date / key-by-period access to persisted verse entries.
#[async_trait]
pub trait VerseEntrySource: Send + Sync {
    /// Entry assigned to a calendar date.
    async fn daily(&self, date: NaiveDate) -> Result<Option<VerseEntry>>;

    /// Entry assigned to a month (`YYYY-MM`) or year (`YYYY`).
    async fn periodic(&self, kind: PeriodKind, period: &str) -> Result<Option<VerseEntry>>;
}

/// Period key for the month containing `date`.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Period key for the year containing `date`.
pub fn year_key(date: NaiveDate) -> String {
    format!("{:04}", date.year())
}

/// In-memory table of entries, optionally loaded from a JSON array.
#[derive(Debug, Clone, Default)]
pub struct EntryTable {
    entries: Vec<VerseEntry>,
    origin: Option<PathBuf>,
}

impl EntryTable {
    /// Create a table from entries.
    pub fn new(entries: Vec<VerseEntry>) -> Self {
        let mut table = Self::default();
        for entry in entries {
            table.upsert(entry);
        }
        table
    }

    /// Load a JSON array of entries from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs_err::read_to_string(path).map_err(|e| Error::io(e, Some(path.to_path_buf())))?;
        let entries: Vec<VerseEntry> = serde_json::from_str(&content)
            .map_err(|e| Error::parse(format!("Invalid entries export: {e}"), path.display().to_string()))?;
        tracing::info!("Loaded {} verse entries from {}", entries.len(), path.display());

        let mut table = Self::new(entries);
        table.origin = Some(path.to_path_buf());
        Ok(table)
    }

    /// Insert or replace by unique key: the date for daily rows, the
    /// `(period_type, period)` pair for periodic rows. Rows with neither
    /// key are rejected and reported as `false`.
    pub fn upsert(&mut self, entry: VerseEntry) -> bool {
        let position = if let Some(date) = entry.date {
            self.entries.iter().position(|e| e.date == Some(date))
        } else if let (Some(kind), Some(period)) = (entry.period_type, entry.period.as_deref()) {
            self.entries
                .iter()
                .position(|e| e.period_type == Some(kind) && e.period.as_deref() == Some(period))
        } else {
            tracing::warn!("Skipping verse entry with neither date nor period");
            return false;
        };

        match position {
            Some(i) => self.entries[i] = entry,
            None => self.entries.push(entry),
        }
        true
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File the table was loaded from, if any.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }
}

#[async_trait]
impl VerseEntrySource for EntryTable {
    async fn daily(&self, date: NaiveDate) -> Result<Option<VerseEntry>> {
        Ok(self.entries.iter().find(|e| e.date == Some(date)).cloned())
    }

    async fn periodic(&self, kind: PeriodKind, period: &str) -> Result<Option<VerseEntry>> {
        let period = period.trim();
        Ok(self
            .entries
            .iter()
            .find(|e| e.period_type == Some(kind) && e.period.as_deref().map(str::trim) == Some(period))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn daily(date: &str, verses: &str) -> VerseEntry {
        VerseEntry {
            date: Some(date.parse().unwrap()),
            book_name: Some("John".into()),
            verse_numbers: Some(verses.into()),
            ..Default::default()
        }
    }

    #[test]
    fn period_keys() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(month_key(date), "2026-03");
        assert_eq!(year_key(date), "2026");
    }

    #[test]
    fn upsert_replaces_by_date() {
        let mut table = EntryTable::default();
        assert!(table.upsert(daily("2026-10-18", "3:16")));
        assert!(table.upsert(daily("2026-10-18", "3:17")));
        assert!(table.upsert(daily("2026-10-19", "1:1")));
        assert!(!table.upsert(VerseEntry::default()));
        assert_eq!(table.len(), 2);
    }

    #[tokio::test]
    async fn lookups_by_date_and_period() {
        let monthly = VerseEntry {
            period_type: Some(PeriodKind::Monthly),
            period: Some("2026-10".into()),
            book_name: Some("Ruth".into()),
            verse_numbers: Some("1:16".into()),
            ..Default::default()
        };
        let table = EntryTable::new(vec![daily("2026-10-18", "3:17"), monthly]);

        let hit = table.daily("2026-10-18".parse().unwrap()).await.unwrap().unwrap();
        assert_eq!(hit.verse_numbers.as_deref(), Some("3:17"));
        assert!(table.daily("2026-10-17".parse().unwrap()).await.unwrap().is_none());

        let month = table.periodic(PeriodKind::Monthly, "2026-10").await.unwrap().unwrap();
        assert_eq!(month.book_name.as_deref(), Some("Ruth"));
        assert!(table.periodic(PeriodKind::Annual, "2026").await.unwrap().is_none());
    }

    #[test]
    fn load_reads_json_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        std::fs::write(
            &path,
            r#"[{"date":"2026-01-01","book_number":1,"chapter_number":1,"verse_numbers":"1"},
                {"period_type":"annual","period":"2026","book_name":"Joshua","verse_numbers":"1:9"}]"#,
        )
        .unwrap();

        let table = EntryTable::load(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.origin(), Some(path.as_path()));
    }

    #[test]
    fn load_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        std::fs::write(&path, "{}").unwrap();
        assert!(matches!(EntryTable::load(&path), Err(Error::Parse { .. })));
        assert!(matches!(EntryTable::load(&dir.path().join("missing.json")), Err(Error::Io { .. })));
    }
}
