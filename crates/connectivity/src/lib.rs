// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Debounced network availability for field sync.
//!
//! Raw `(is_connected, is_internet_reachable)` samples are conjoined into
//! availability events and fed through a hierarchical state machine.
//! The network is trusted only after it stays available for the debounce
//! delay, which keeps retry schedulers from storming on brief radio flaps.
//!
//! The machine itself (`transition`) is pure; `ConnectivityMonitor` runs it
//! on a single tokio task that owns the sample stream and the timer.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod machine;
mod monitor;
mod notifier;
mod probe;

#[cfg(test)]
mod tests;

pub use error::MonitorError;
pub use machine::{Effect, MachineInput, NetworkState, OfflineState, Transition, transition};
pub use monitor::{ConnectivityMonitor, MonitorConfig, MonitorHandle};
pub use notifier::{NetworkNotification, NetworkNotifier};
pub use probe::{ConnectivityEvent, ConnectivitySample};
