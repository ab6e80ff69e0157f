//! Best-effort notification fan-out.
//!
//! Property changes and domain events are broadcast to zero or more
//! subscribers. A slow or absent subscriber never blocks the operation that
//! emitted the notification.

use crate::model::ResourceId;
use serde::Serialize;
use std::fmt;
use tokio::sync::broadcast;
use tracing::debug;

/// Observable properties that raise change notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Property {
    #[serde(rename = "maintenanceNeeded")]
    MaintenanceNeeded,
}

impl Property {
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::MaintenanceNeeded => "maintenanceNeeded",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification emitted by the appliance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Notification {
    /// An observable property changed value.
    PropertyChanged { property: Property },
    /// A brew was refused because `resource` would have dropped to `level`.
    OutOfResource { resource: ResourceId, level: i32 },
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::PropertyChanged { property } => {
                write!(f, "Property '{property}' changed")
            }
            Notification::OutOfResource { resource, level } => {
                write!(f, "Low {resource}: {level}%")
            }
        }
    }
}

/// Fan-out handle for appliance notifications.
///
/// Cloning is cheap; every clone publishes into the same channel.
#[derive(Debug, Clone)]
pub struct NotificationSink {
    tx: broadcast::Sender<Notification>,
}

impl NotificationSink {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Delivers to current subscribers without blocking. When nobody is
    /// listening the notification is dropped.
    pub fn publish(&self, notification: Notification) {
        match self.tx.send(notification) {
            Ok(subscribers) => debug!(subscribers, "Notification delivered"),
            Err(broadcast::error::SendError(dropped)) => {
                debug!(%dropped, "No subscribers, notification dropped");
            }
        }
    }

    /// Registers a new observer. Each receiver sees every notification
    /// published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }
}
