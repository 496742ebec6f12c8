//! Verse document loading and the per-language document cache.
//!
//! Documents are fetched once per language and kept for the lifetime of the
//! owning [`VerseStore`]. A failed fetch is logged and leaves the slot empty,
//! so the next call retries. Concurrent first loads of one language share a
//! single fetch.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future;
use reqwest::Client;
use tokio::sync::OnceCell;

use super::catalog::Language;
use super::document::VerseDocument;
use crate::config::{Config, VerseSource};
use crate::constants::catalog::BOOK_COUNT;
use crate::error::{Error, Result};

/// Transport for the static verse documents.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the raw body stored at a relative path such as `bibles/ta.json`.
    async fn fetch(&self, path: &str) -> Result<String>;

    /// Where documents come from (for logging).
    fn describe(&self) -> String;
}

/// Fetches documents over HTTP from the site's static root.
#[derive(Clone)]
pub struct HttpDocumentSource {
    base_url: String,
    client: Client,
}

impl HttpDocumentSource {
    /// Create a source rooted at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::network(format!("Request to {url} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::network_status(
                format!("Request to {url} returned {status}"),
                status.as_u16(),
            ));
        }

        resp.text()
            .await
            .map_err(|e| Error::network(format!("Reading body of {url} failed: {e}")))
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Reads documents from a local copy of the site's static root.
#[derive(Debug, Clone)]
pub struct FsDocumentSource {
    root: PathBuf,
}

impl FsDocumentSource {
    /// Create a source rooted at a directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DocumentSource for FsDocumentSource {
    async fn fetch(&self, path: &str) -> Result<String> {
        let full = self.root.join(path);
        tokio::fs::read_to_string(&full)
            .await
            .map_err(|e| Error::io(e, Some(full)))
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Build the document source named by the configuration.
pub fn source_from_config(config: &Config) -> Arc<dyn DocumentSource> {
    match &config.verse_source {
        VerseSource::Http(url) => Arc::new(HttpDocumentSource::new(url.clone(), config.http_timeout)),
        VerseSource::Directory(dir) => Arc::new(FsDocumentSource::new(dir.clone())),
    }
}

/// Observable lifecycle of one language's cache slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Nothing loaded; the next call fetches.
    Empty,
    /// A fetch is in flight.
    Loading,
    /// Document cached for the lifetime of the store.
    Ready,
}

#[derive(Default)]
struct Slot {
    cell: OnceCell<Arc<VerseDocument>>,
    loading: AtomicBool,
}

/// Clears the loading flag when a fetch finishes or is dropped mid-flight.
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn new(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Per-language document cache in front of a [`DocumentSource`].
pub struct VerseStore {
    source: Arc<dyn DocumentSource>,
    slots: HashMap<Language, Slot>,
}

impl VerseStore {
    /// Create an empty store over a source.
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        let slots = Language::all().iter().map(|l| (*l, Slot::default())).collect();
        Self { source, slots }
    }

    /// Load (or return the cached) document for a language.
    ///
    /// Never fails loudly: transport and parse errors are logged and
    /// reported as `None`, and nothing is cached so a later call retries.
    pub async fn load(&self, language: Language) -> Option<Arc<VerseDocument>> {
        let slot = self.slots.get(&language)?;
        match slot
            .cell
            .get_or_try_init(|| self.fetch_document(language, &slot.loading))
            .await
        {
            Ok(doc) => Some(Arc::clone(doc)),
            Err(e) => {
                tracing::warn!(
                    "Failed to load {} verse document from {}: {e}",
                    language.name(),
                    self.source.describe()
                );
                None
            }
        }
    }

    /// Current cache state for a language.
    pub fn state(&self, language: Language) -> SlotState {
        self.slots.get(&language).map_or(SlotState::Empty, |slot| {
            if slot.cell.initialized() {
                SlotState::Ready
            } else if slot.loading.load(Ordering::SeqCst) {
                SlotState::Loading
            } else {
                SlotState::Empty
            }
        })
    }

    /// Warm every language concurrently; returns how many are now cached.
    pub async fn preload_all(&self) -> usize {
        let loads = Language::all().iter().map(|l| self.load(*l));
        let loaded = future::join_all(loads)
            .await
            .into_iter()
            .filter(Option::is_some)
            .count();
        tracing::info!("Preloaded {loaded}/{} verse documents", Language::all().len());
        loaded
    }

    async fn fetch_document(&self, language: Language, loading: &AtomicBool) -> Result<Arc<VerseDocument>> {
        let _guard = LoadingGuard::new(loading);
        let path = language.document_path();
        tracing::debug!("Fetching {path} from {}", self.source.describe());

        let body = self.source.fetch(&path).await?;
        let document = VerseDocument::from_json(&body, &path)?;

        if document.book_count() != BOOK_COUNT {
            tracing::warn!(
                "{path} has {} books, expected {BOOK_COUNT}; lookups past the end will miss",
                document.book_count()
            );
        }
        Ok(Arc::new(document))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    /// In-memory source that counts fetches and can be told to fail.
    #[derive(Default)]
    pub(crate) struct CountingSource {
        pub(crate) bodies: Mutex<HashMap<String, String>>,
        pub(crate) fetches: AtomicUsize,
        pub(crate) fail_next: AtomicBool,
    }

    impl CountingSource {
        pub(crate) fn with(path: &str, body: String) -> Self {
            let source = Self::default();
            source.bodies.lock().unwrap().insert(path.to_string(), body);
            source
        }
    }

    #[async_trait]
    impl DocumentSource for CountingSource {
        async fn fetch(&self, path: &str) -> Result<String> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            if self.fail_next.swap(false, Ordering::SeqCst) {
                return Err(Error::network("connection reset"));
            }
            self.bodies
                .lock()
                .unwrap()
                .get(path)
                .cloned()
                .ok_or_else(|| Error::network_status(format!("{path} not found"), 404))
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    const DOC: &str = r#"{"Book":[{"Chapter":[{"Verse":[{"Verse":"a"}]}]}]}"#;

    #[tokio::test]
    async fn second_load_is_a_cache_hit() {
        let source = Arc::new(CountingSource::with("bibles/en.json", DOC.to_string()));
        let store = VerseStore::new(Arc::clone(&source) as Arc<dyn DocumentSource>);

        assert_eq!(store.state(Language::English), SlotState::Empty);
        let first = store.load(Language::English).await.unwrap();
        let second = store.load(Language::English).await.unwrap();

        assert_eq!(first, second);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
        assert_eq!(store.state(Language::English), SlotState::Ready);
    }

    #[tokio::test]
    async fn failed_load_is_retried() {
        let source = Arc::new(CountingSource::with("bibles/ta.json", DOC.to_string()));
        source.fail_next.store(true, Ordering::SeqCst);
        let store = VerseStore::new(Arc::clone(&source) as Arc<dyn DocumentSource>);

        assert!(store.load(Language::Tamil).await.is_none());
        assert_eq!(store.state(Language::Tamil), SlotState::Empty);

        assert!(store.load(Language::Tamil).await.is_some());
        assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn malformed_document_is_not_cached() {
        let source = Arc::new(CountingSource::with("bibles/kn.json", "{oops".to_string()));
        let store = VerseStore::new(Arc::clone(&source) as Arc<dyn DocumentSource>);

        assert!(store.load(Language::Kannada).await.is_none());
        assert!(store.load(Language::Kannada).await.is_none());
        assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn concurrent_first_loads_share_one_fetch() {
        let source = Arc::new(CountingSource::with("bibles/hi.json", DOC.to_string()));
        let store = VerseStore::new(Arc::clone(&source) as Arc<dyn DocumentSource>);

        let (a, b, c) = tokio::join!(
            store.load(Language::Hindi),
            store.load(Language::Hindi),
            store.load(Language::Hindi)
        );

        assert!(a.is_some() && b.is_some() && c.is_some());
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn dropped_caller_does_not_poison_slot() {
        let source = Arc::new(CountingSource::with("bibles/te.json", DOC.to_string()));
        let store = VerseStore::new(Arc::clone(&source) as Arc<dyn DocumentSource>);

        // Abandon a load mid-flight; in-flight fetches are never aborted for
        // other callers, and an abandoned one leaves the slot retryable.
        {
            let pending = store.load(Language::Telugu);
            tokio::pin!(pending);
            let _ = futures::poll!(pending.as_mut());
        }
        assert_eq!(store.state(Language::Telugu), SlotState::Empty);
        assert!(store.load(Language::Telugu).await.is_some());
    }

    #[tokio::test]
    async fn preload_counts_available_languages() {
        let source = CountingSource::with("bibles/en.json", DOC.to_string());
        source
            .bodies
            .lock()
            .unwrap()
            .insert("bibles/ml.json".to_string(), DOC.to_string());
        let store = VerseStore::new(Arc::new(source));

        assert_eq!(store.preload_all().await, 2);
        assert_eq!(store.state(Language::Malayalam), SlotState::Ready);
        assert_eq!(store.state(Language::Bengali), SlotState::Empty);
    }

    #[tokio::test]
    async fn fs_source_reads_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("bibles")).unwrap();
        std::fs::write(dir.path().join("bibles/gu.json"), DOC).unwrap();

        let store = VerseStore::new(Arc::new(FsDocumentSource::new(dir.path())));
        let doc = store.load(Language::Gujarati).await.unwrap();
        assert_eq!(doc.book_count(), 1);
        assert!(store.load(Language::Punjabi).await.is_none());
    }
}
