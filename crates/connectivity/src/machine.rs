// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hierarchical network state machine.
//!
//! ```text
//! loading ──AVAILABLE──▶ online ◀──────────── delay elapsed ─┐
//!    │                     │                                  │
//!    └──UNAVAILABLE──┐     └──UNAVAILABLE──┐                  │
//!                    ▼                     ▼                  │
//!              offline { idle ──AVAILABLE──▶ waitingForDelay ─┘ }
//!                          ◀──UNAVAILABLE──
//! ```
//!
//! ## Invariants
//!
//! - Entering `online` always announces `NetworkAvailable`
//! - Entering `offline` announces `NetworkUnavailable` once; moving between
//!   its substates announces nothing
//! - The delay timer runs only while in `offline.waitingForDelay`
//! - Inputs with no transition leave the state unchanged with no effects

use crate::notifier::NetworkNotification;
use crate::probe::ConnectivityEvent;

/// Substates of `offline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OfflineState {
    /// Waiting for the network to come back.
    Idle,
    /// The network came back; waiting for it to stay up.
    WaitingForDelay,
}

/// Top-level network state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NetworkState {
    /// No sample has been received yet.
    #[default]
    Loading,
    /// The network is trusted.
    Online,
    /// The network is not trusted.
    Offline(OfflineState),
}

impl NetworkState {
    /// Returns true if the network is currently trusted.
    #[must_use]
    pub const fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }
}

/// An input processed by the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineInput {
    /// A connectivity event from the probe.
    Connectivity(ConnectivityEvent),
    /// The debounce delay ran out.
    DelayElapsed,
}

/// A side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Send a notification to the coordinator.
    Notify(NetworkNotification),
    /// Arm the debounce timer.
    StartDelay,
    /// Disarm the debounce timer.
    CancelDelay,
}

/// The result of processing one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The state after the input.
    pub state: NetworkState,
    /// Effects to apply, in order.
    pub effects: Vec<Effect>,
}

impl Transition {
    const fn unchanged(state: NetworkState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn enter_online() -> Self {
        Self {
            state: NetworkState::Online,
            effects: vec![Effect::Notify(NetworkNotification::NetworkAvailable)],
        }
    }

    fn enter_offline() -> Self {
        Self {
            state: NetworkState::Offline(OfflineState::Idle),
            effects: vec![Effect::Notify(NetworkNotification::NetworkUnavailable)],
        }
    }
}

/// Computes the next state and effects for `input` in `state`.
#[must_use]
pub fn transition(state: NetworkState, input: MachineInput) -> Transition {
    use ConnectivityEvent::{Available, Unavailable};
    use MachineInput::{Connectivity, DelayElapsed};
    use NetworkState::{Loading, Offline, Online};
    use OfflineState::{Idle, WaitingForDelay};

    match (state, input) {
        (Loading, Connectivity(Available)) | (Offline(WaitingForDelay), DelayElapsed) => {
            Transition::enter_online()
        }
        (Loading | Online, Connectivity(Unavailable)) => Transition::enter_offline(),
        (Offline(Idle), Connectivity(Available)) => Transition {
            state: Offline(WaitingForDelay),
            effects: vec![Effect::StartDelay],
        },
        (Offline(WaitingForDelay), Connectivity(Unavailable)) => Transition {
            state: Offline(Idle),
            effects: vec![Effect::CancelDelay],
        },
        (state, _) => Transition::unchanged(state),
    }
}
