//! Session gating for the admin consoles.
//!
//! Each admin area has its own gate: `LoggedOut → LoggedIn` on a successful
//! credential check, back to `LoggedOut` on logout or inactivity timeout.
//! The session payload is opaque JSON owned by the caller and kept in the
//! area's storage slot, or in a slot the caller names.

/// Session storage slots
pub mod storage;
/// Inactivity timeout
pub mod timeout;

use std::fmt;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Error, Result};

pub use storage::{FileSessionStorage, MemorySessionStorage, SessionStorage};
pub use timeout::{ActivityEvent, InactivityMonitor, SessionEvent};

/// The independently authenticated admin consoles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminArea {
    /// Event administration.
    Events,
    /// Magazine publishing.
    Magazine,
    /// Branch registry.
    Branches,
    /// Member directory.
    Members,
}

impl AdminArea {
    /// Returns all admin areas.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Events, Self::Magazine, Self::Branches, Self::Members]
    }

    /// Short name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::Magazine => "magazine",
            Self::Branches => "branches",
            Self::Members => "members",
        }
    }

    /// Look up an area by its short name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all().iter().copied().find(|a| a.name().eq_ignore_ascii_case(name))
    }

    /// Storage slot holding this area's session.
    #[must_use]
    pub const fn session_key(self) -> &'static str {
        match self {
            Self::Events => "event_admin_session",
            Self::Magazine => "magazine_admin_session",
            Self::Branches => "branch_admin_session",
            Self::Members => "member_admin_session",
        }
    }

    /// Where a signed-out user is sent.
    #[must_use]
    pub const fn login_route(self) -> &'static str {
        match self {
            Self::Events => "/admin/events/login",
            Self::Magazine => "/admin/magazine/login",
            Self::Branches => "/admin/branches/login",
            Self::Members => "/admin/members/login",
        }
    }
}

/// Login form input.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account name or email.
    pub username: String,
    /// Password; never logged.
    pub password: String,
}

impl Credentials {
    /// Create credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Caller-supplied credential check.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// `Some(payload)` on success, `None` on bad credentials, `Err` when
    /// the check itself could not run.
    async fn authenticate(&self, area: AdminArea, credentials: &Credentials) -> Result<Option<Value>>;
}

/// Gate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No session.
    LoggedOut,
    /// Signed in with an opaque payload.
    LoggedIn(Value),
}

/// One admin area's session gate.
pub struct SessionGate<S: SessionStorage> {
    area: AdminArea,
    key: String,
    storage: S,
    state: Mutex<SessionState>,
}

impl<S: SessionStorage> SessionGate<S> {
    /// Create a signed-out gate using the area's default slot.
    pub fn new(area: AdminArea, storage: S) -> Self {
        Self::with_key(area, area.session_key(), storage)
    }

    /// Create a signed-out gate over a caller-chosen storage slot.
    pub fn with_key(area: AdminArea, key: impl Into<String>, storage: S) -> Self {
        Self {
            area,
            key: key.into(),
            storage,
            state: Mutex::new(SessionState::LoggedOut),
        }
    }

    /// Create a gate from whatever the area's default slot holds. An
    /// unreadable or corrupt slot is cleared and the gate starts signed out.
    pub fn restore(area: AdminArea, storage: S) -> Self {
        Self::new(area, storage).reloaded()
    }

    /// Like [`restore`](Self::restore), over a caller-chosen slot.
    pub fn restore_with_key(area: AdminArea, key: impl Into<String>, storage: S) -> Self {
        Self::with_key(area, key, storage).reloaded()
    }

    fn reloaded(self) -> Self {
        let area = self.area;
        let key = self.key.as_str();
        match self.storage.read(key) {
            Ok(Some(raw)) => match serde_json::from_str::<Value>(&raw) {
                Ok(payload) => {
                    tracing::debug!("Restored {} session", area.name());
                    self.set_state(SessionState::LoggedIn(payload));
                }
                Err(e) => {
                    tracing::warn!("Discarding corrupt {} session: {e}", area.name());
                    if let Err(e) = self.storage.clear(key) {
                        tracing::warn!("Failed to clear {} session: {e}", area.name());
                    }
                }
            },
            Ok(None) => {}
            Err(e) => tracing::warn!("Failed to read {} session: {e}", area.name()),
        }
        self
    }

    /// The area this gate protects.
    pub const fn area(&self) -> AdminArea {
        self.area
    }

    /// Storage slot holding this gate's session.
    pub fn session_key(&self) -> &str {
        &self.key
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Whether a session is active.
    pub fn is_logged_in(&self) -> bool {
        matches!(*self.state.lock().unwrap_or_else(PoisonError::into_inner), SessionState::LoggedIn(_))
    }

    /// The active session payload.
    pub fn session(&self) -> Option<Value> {
        match self.state() {
            SessionState::LoggedIn(payload) => Some(payload),
            SessionState::LoggedOut => None,
        }
    }

    /// Check credentials and sign in on success. Returns whether the check
    /// passed; a failed check leaves the current state untouched.
    pub async fn login<A>(&self, authenticator: &A, credentials: &Credentials) -> Result<bool>
    where
        A: Authenticator + ?Sized,
    {
        let payload = match authenticator.authenticate(self.area, credentials).await {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                tracing::info!("Rejected {} login for {}", self.area.name(), credentials.username);
                return Ok(false);
            }
            Err(e) => {
                tracing::warn!("{} login check failed: {e}", self.area.name());
                return Err(e);
            }
        };

        let serialized = serde_json::to_string(&payload)
            .map_err(|e| Error::Session(format!("Unserializable session payload: {e}")))?;
        self.storage.write(&self.key, &serialized)?;
        self.set_state(SessionState::LoggedIn(payload));
        tracing::info!("{} admin signed in as {}", self.area.name(), credentials.username);
        Ok(true)
    }

    /// Sign out and clear the storage slot. The in-memory state is cleared
    /// even if the slot cannot be.
    pub fn logout(&self) -> Result<()> {
        self.set_state(SessionState::LoggedOut);
        tracing::info!("{} admin signed out", self.area.name());
        self.storage.clear(&self.key)
    }

    fn set_state(&self, state: SessionState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    struct Fixed;

    #[async_trait]
    impl Authenticator for Fixed {
        async fn authenticate(&self, area: AdminArea, credentials: &Credentials) -> Result<Option<Value>> {
            if credentials.username == "down" {
                return Err(Error::network("backend unreachable"));
            }
            Ok((credentials.password == "secret").then(|| json!({ "user": credentials.username, "area": area.name() })))
        }
    }

    #[tokio::test]
    async fn login_and_logout_persist_to_slot() {
        let storage = Arc::new(MemorySessionStorage::new());
        let gate = SessionGate::new(AdminArea::Magazine, Arc::clone(&storage));

        assert!(!gate.login(&Fixed, &Credentials::new("ana", "wrong")).await.unwrap());
        assert_eq!(gate.state(), SessionState::LoggedOut);

        assert!(gate.login(&Fixed, &Credentials::new("ana", "secret")).await.unwrap());
        assert!(gate.is_logged_in());
        assert_eq!(gate.session().unwrap()["area"], "magazine");
        assert!(storage.read("magazine_admin_session").unwrap().is_some());

        gate.logout().unwrap();
        assert!(!gate.is_logged_in());
        assert!(storage.read("magazine_admin_session").unwrap().is_none());
    }

    #[tokio::test]
    async fn backend_failure_is_reported_and_state_kept() {
        let gate = SessionGate::new(AdminArea::Events, MemorySessionStorage::new());
        assert!(gate.login(&Fixed, &Credentials::new("down", "secret")).await.is_err());
        assert_eq!(gate.state(), SessionState::LoggedOut);
    }

    #[test]
    fn restore_reads_slot_at_startup() {
        let storage = Arc::new(MemorySessionStorage::new());
        storage.write("branch_admin_session", r#"{"user":"ben"}"#).unwrap();
        storage.write("member_admin_session", "not json").unwrap();

        let branches = SessionGate::restore(AdminArea::Branches, Arc::clone(&storage));
        assert_eq!(branches.session(), Some(json!({ "user": "ben" })));

        let members = SessionGate::restore(AdminArea::Members, Arc::clone(&storage));
        assert!(!members.is_logged_in());
        assert!(storage.read("member_admin_session").unwrap().is_none());

        let events = SessionGate::restore(AdminArea::Events, storage);
        assert!(!events.is_logged_in());
    }

    #[tokio::test]
    async fn caller_chosen_slot_is_used() {
        let storage = Arc::new(MemorySessionStorage::new());
        let gate = SessionGate::with_key(AdminArea::Events, "events_staging", Arc::clone(&storage));
        assert_eq!(gate.session_key(), "events_staging");

        assert!(gate.login(&Fixed, &Credentials::new("ana", "secret")).await.unwrap());
        assert!(storage.read("events_staging").unwrap().is_some());
        assert!(storage.read("event_admin_session").unwrap().is_none());

        let restored = SessionGate::restore_with_key(AdminArea::Events, "events_staging", Arc::clone(&storage));
        assert_eq!(restored.session().unwrap()["user"], "ana");
        assert!(!SessionGate::restore(AdminArea::Events, Arc::clone(&storage)).is_logged_in());

        restored.logout().unwrap();
        assert!(storage.read("events_staging").unwrap().is_none());
    }

    #[test]
    fn areas_have_distinct_slots() {
        let keys: std::collections::HashSet<_> = AdminArea::all().iter().map(|a| a.session_key()).collect();
        assert_eq!(keys.len(), 4);
        assert_eq!(AdminArea::from_name("Magazine"), Some(AdminArea::Magazine));
        assert_eq!(AdminArea::from_name("ushers"), None);
    }

    #[test]
    fn credentials_debug_hides_password() {
        let rendered = format!("{:?}", Credentials::new("ana", "hunter2"));
        assert!(rendered.contains("ana"));
        assert!(!rendered.contains("hunter2"));
    }
}
