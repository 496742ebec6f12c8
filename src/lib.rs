//! `Verselight` - multilingual scripture reference resolution.
//!
//! Parses references such as `"John 3:16"` or `"சங்கீதம் 23"` in ten
//! languages, resolves them against per-language verse documents, and backs
//! the church site's verse widgets and admin session gating.

pub mod bible;
pub mod config;
pub mod constants;
pub mod error;
pub mod services;
pub mod session;
pub mod types;
