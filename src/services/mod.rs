//! Services built on the verse engine.
//!
//! These back the site's display widgets (today's verse, periodic verses,
//! random verse, search) and the persisted entry tables they read from.

pub mod display;
pub mod entries;
pub mod search;
