// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The boundary between the platform connectivity probe and the monitor.

use serde::{Deserialize, Serialize};

/// A raw sample from the platform connectivity probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivitySample {
    /// Whether the device has an active network interface.
    pub is_connected: bool,
    /// Whether the internet is reachable through that interface.
    pub is_internet_reachable: bool,
}

impl ConnectivitySample {
    /// Creates a sample from the two probe flags.
    #[must_use]
    pub const fn new(is_connected: bool, is_internet_reachable: bool) -> Self {
        Self {
            is_connected,
            is_internet_reachable,
        }
    }

    /// The event this sample feeds into the monitor.
    ///
    /// Only a connected device with a reachable internet is `Available`.
    #[must_use]
    pub const fn event(&self) -> ConnectivityEvent {
        if self.is_connected && self.is_internet_reachable {
            ConnectivityEvent::Available
        } else {
            ConnectivityEvent::Unavailable
        }
    }
}

/// Connectivity as seen by the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectivityEvent {
    /// The network is usable right now.
    Available,
    /// The network is not usable right now.
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_flags_required() {
        assert_eq!(
            ConnectivitySample::new(true, true).event(),
            ConnectivityEvent::Available
        );
        assert_eq!(
            ConnectivitySample::new(true, false).event(),
            ConnectivityEvent::Unavailable
        );
        assert_eq!(
            ConnectivitySample::new(false, true).event(),
            ConnectivityEvent::Unavailable
        );
        assert_eq!(
            ConnectivitySample::new(false, false).event(),
            ConnectivityEvent::Unavailable
        );
    }
}
