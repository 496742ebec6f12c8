//! Inactivity timeout for a signed-in admin area.
//!
//! One background task owns a single deadline. Each qualifying activity
//! event pushes the deadline out by the full timeout; timers never stack.
//! When the deadline passes the gate is signed out and an
//! [`SessionEvent::Expired`] is sent so the caller can redirect.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::storage::SessionStorage;
use super::{AdminArea, SessionGate};
use crate::config::Config;
use crate::constants::session::CHANNEL_BUFFER_SIZE;

/// User activity that keeps a session alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityEvent {
    /// Mouse or pen press.
    PointerDown,
    /// Key press.
    KeyDown,
    /// Scroll.
    Scroll,
    /// Touch start.
    TouchStart,
    /// Click.
    Click,
}

/// Notifications from the monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The session was signed out for inactivity.
    Expired {
        /// Area that was signed out.
        area: AdminArea,
        /// Login surface to send the user to.
        redirect_to: &'static str,
    },
}

/// Handle to a running inactivity timer.
///
/// Dropping the handle closes the activity channel, which ends the task
/// without signing out.
pub struct InactivityMonitor {
    activity: mpsc::Sender<ActivityEvent>,
    task: JoinHandle<()>,
}

impl InactivityMonitor {
    /// Start the timer for `gate`; the first deadline is `timeout` from now.
    pub fn spawn<S>(gate: Arc<SessionGate<S>>, timeout: Duration, events: mpsc::Sender<SessionEvent>) -> Self
    where
        S: SessionStorage + 'static,
    {
        let (activity, activity_rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);
        let task = tokio::spawn(run(gate, timeout, activity_rx, events));
        Self { activity, task }
    }

    /// Start the timer with the configured inactivity period.
    pub fn from_config<S>(gate: Arc<SessionGate<S>>, config: &Config, events: mpsc::Sender<SessionEvent>) -> Self
    where
        S: SessionStorage + 'static,
    {
        Self::spawn(gate, config.session_timeout, events)
    }

    /// Report activity. Returns `false` once the monitor has stopped.
    pub async fn record(&self, event: ActivityEvent) -> bool {
        self.activity.send(event).await.is_ok()
    }

    /// Report activity without waiting. A full channel already holds
    /// pending resets, so dropping the event loses nothing.
    pub fn try_record(&self, event: ActivityEvent) -> bool {
        match self.activity.try_send(event) {
            Ok(()) | Err(mpsc::error::TrySendError::Full(_)) => true,
            Err(mpsc::error::TrySendError::Closed(_)) => false,
        }
    }

    /// Cancel the timer without signing out.
    pub fn stop(self) {
        self.task.abort();
    }
}

async fn run<S: SessionStorage>(
    gate: Arc<SessionGate<S>>,
    timeout: Duration,
    mut activity_rx: mpsc::Receiver<ActivityEvent>,
    events: mpsc::Sender<SessionEvent>,
) {
    let area = gate.area();
    let deadline = tokio::time::sleep(timeout);
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            event = activity_rx.recv() => {
                let Some(event) = event else {
                    tracing::debug!("{} activity channel closed", area.name());
                    return;
                };
                tracing::trace!("{} activity: {event:?}", area.name());
                deadline.as_mut().reset(Instant::now() + timeout);
            }
            () = &mut deadline => break,
        }
    }

    if !gate.is_logged_in() {
        return;
    }

    tracing::info!("{} session expired after {} minutes idle", area.name(), timeout.as_secs() / 60);
    if let Err(e) = gate.logout() {
        tracing::warn!("Failed to clear expired {} session: {e}", area.name());
    }

    let expired = SessionEvent::Expired {
        area,
        redirect_to: area.login_route(),
    };
    if events.send(expired).await.is_err() {
        tracing::debug!("No listener for {} expiry", area.name());
    }
}
