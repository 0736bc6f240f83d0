// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Network availability notifications for the owning coordinator.
//!
//! Notifications are fire-and-forget: sending never blocks the monitor and
//! never calls back into it. A coordinator that falls behind loses the
//! oldest notifications and should re-read the monitor's current state.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

/// Maximum number of notifications buffered per subscriber.
const NOTIFICATION_BUFFER_SIZE: usize = 16;

/// Messages emitted by the connectivity monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NetworkNotification {
    /// The network has become trusted.
    NetworkAvailable,
    /// The network is no longer trusted.
    NetworkUnavailable,
}

/// Broadcaster for network notifications.
///
/// A thin wrapper around `tokio::sync::broadcast` so any number of
/// coordinators can register.
#[derive(Debug, Clone)]
pub struct NetworkNotifier {
    tx: broadcast::Sender<NetworkNotification>,
}

impl NetworkNotifier {
    /// Creates a new notifier with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(NOTIFICATION_BUFFER_SIZE);
        Self { tx }
    }

    /// Sends `notification` to every subscriber.
    ///
    /// With no subscribers the notification is dropped.
    pub fn notify(&self, notification: NetworkNotification) {
        match self.tx.send(notification) {
            Ok(count) => {
                debug!(?notification, receivers = count, "Sent network notification");
            }
            Err(_) => {
                debug!(?notification, "No receivers for network notification");
            }
        }
    }

    /// Registers a new subscriber.
    ///
    /// Notifications sent before subscription are not received.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<NetworkNotification> {
        self.tx.subscribe()
    }
}

impl Default for NetworkNotifier {
    fn default() -> Self {
        Self::new()
    }
}
