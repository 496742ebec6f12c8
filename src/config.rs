//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants;
use crate::error::{Error, Result};

/// Where per-language verse documents are fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerseSource {
    /// Base URL; documents are fetched over HTTP.
    Http(String),
    /// Local directory holding the same layout as the hosted site.
    Directory(PathBuf),
}

impl VerseSource {
    /// Interpret a configured value as either a URL or a local path.
    pub fn from_setting(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Http(value.trim_end_matches('/').to_string())
        } else {
            Self::Directory(PathBuf::from(shellexpand::tilde(value).to_string()))
        }
    }
}

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Source of the per-language verse documents
    pub verse_source: VerseSource,
    /// Language used when none is given on the command line
    pub default_language: String,
    /// Inactivity period before an admin session is signed out
    pub session_timeout: Duration,
    /// Directory holding one session file per admin area
    pub session_dir: Option<PathBuf>,
    /// JSON export of the persisted verse entries table
    pub entries_path: Option<PathBuf>,
    /// HTTP client timeout for document fetches
    pub http_timeout: Duration,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            verse_source: VerseSource::Directory(PathBuf::from("data")),
            default_language: "en".to_string(),
            session_timeout: Duration::from_secs(constants::session::DEFAULT_TIMEOUT_MINUTES * 60),
            session_dir: default_session_dir(),
            entries_path: None,
            http_timeout: Duration::from_secs(constants::network::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(source) = env::var("VERSE_SOURCE") {
            config.verse_source = parse_verse_source(&source)?;
        }

        if let Ok(lang) = env::var("DEFAULT_LANGUAGE") {
            config.default_language = lang.trim().to_lowercase();
        }

        if let Ok(minutes) = env::var("SESSION_TIMEOUT_MINUTES") {
            config.session_timeout = parse_timeout_minutes(&minutes)?;
        }

        if let Ok(dir) = env::var("SESSION_DIR") {
            config.session_dir = Some(PathBuf::from(shellexpand::tilde(&dir).to_string()));
        }

        config.entries_path = env::var("ENTRIES_PATH")
            .ok()
            .map(|p| PathBuf::from(shellexpand::tilde(&p).to_string()));

        if let Ok(secs) = env::var("HTTP_TIMEOUT_SECS") {
            if let Ok(secs) = secs.trim().parse::<u64>() {
                config.http_timeout = Duration::from_secs(secs);
            }
        }

        Ok(config)
    }
}

/// Parse `VERSE_SOURCE`; an empty value is a configuration error.
fn parse_verse_source(value: &str) -> Result<VerseSource> {
    if value.trim().is_empty() {
        return Err(Error::config(
            "VERSE_SOURCE is set but empty",
            "Set it to a base URL or a directory containing bibles/<code>.json",
        ));
    }
    Ok(VerseSource::from_setting(value))
}

/// Parse `SESSION_TIMEOUT_MINUTES` as a positive number of minutes.
fn parse_timeout_minutes(value: &str) -> Result<Duration> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|m| *m > 0)
        .and_then(|m| m.checked_mul(60))
        .map(Duration::from_secs)
        .ok_or_else(|| {
            Error::config(
                format!("Invalid SESSION_TIMEOUT_MINUTES: {value:?}"),
                "Use a positive whole number of minutes",
            )
        })
}

/// Platform data directory for persisted admin sessions.
fn default_session_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(env!("CARGO_PKG_NAME")).join("sessions"))
}
