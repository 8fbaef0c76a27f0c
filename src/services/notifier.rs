//! Post-save notifications.
//!
//! Subscribes to check-in events and emits a "check-in complete" notice for
//! each new entry. Delivery is a structured log line; a front-end can render
//! the same text from the check-in response.

use serde::Serialize;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

use crate::services::checkin::CheckInEvent;

/// A user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// Notification for an event, if it warrants one.
pub fn notification_for(event: &CheckInEvent) -> Option<Notification> {
    match event {
        CheckInEvent::Recorded { entry, .. } => Some(Notification {
            title: "Check-in complete!".to_string(),
            body: format!(
                "You just finished {} minutes of {}.",
                entry.duration_minutes, entry.workout_type
            ),
        }),
        CheckInEvent::Reset => None,
    }
}

/// Spawn a task that turns events into notifications until the sender closes.
pub fn spawn_notifier(mut events: broadcast::Receiver<CheckInEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => {
                    if let Some(notice) = notification_for(&event) {
                        tracing::info!(title = %notice.title, body = %notice.body, "Notification");
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Notifier lagged behind check-in events");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}
