// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The long-lived connectivity monitor task.
//!
//! # Architecture
//!
//! - One tokio task owns the sample stream, the machine state and the
//!   debounce timer, so inputs are processed strictly one at a time
//! - Samples are polled before the timer; an `Unavailable` sample that is
//!   ready when the timer fires wins and the promotion never happens
//! - Cancelling the timer drops it inside the same iteration that applies
//!   the transition, so a cancelled timer can never fire
//! - The current state is published through a `watch` channel for
//!   callers that only need to ask "online right now?"
//! - The task ends when the sample stream ends or `stop` is called; any
//!   pending timer is dropped with it

use crate::error::MonitorError;
use crate::machine::{Effect, MachineInput, NetworkState, transition};
use crate::notifier::{NetworkNotification, NetworkNotifier};
use crate::probe::ConnectivitySample;
use futures::{Stream, StreamExt};
use std::pin::Pin;
use std::time::Duration;
use tokio::sync::{broadcast, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::Sleep;
use tracing::{debug, info};

/// Tunables for the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    /// How long the network must stay available before it is trusted.
    pub debounce_delay: Duration,
}

impl MonitorConfig {
    /// Default debounce delay.
    pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(3000);

    /// Creates a config with the given debounce delay.
    #[must_use]
    pub const fn new(debounce_delay: Duration) -> Self {
        Self { debounce_delay }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEBOUNCE_DELAY)
    }
}

/// Converts connectivity samples into debounced availability notifications.
#[derive(Debug, Clone, Default)]
pub struct ConnectivityMonitor {
    config: MonitorConfig,
    notifier: NetworkNotifier,
}

impl ConnectivityMonitor {
    /// Creates a monitor that is not yet running.
    #[must_use]
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            config,
            notifier: NetworkNotifier::new(),
        }
    }

    /// Registers a coordinator for notifications.
    ///
    /// Subscribe before `start` to observe the first notification.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<NetworkNotification> {
        self.notifier.subscribe()
    }

    /// Spawns the monitor task consuming `samples`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<S>(&self, samples: S) -> MonitorHandle
    where
        S: Stream<Item = ConnectivitySample> + Send + 'static,
    {
        let (stop_tx, stop_rx) = oneshot::channel();
        let (state_tx, state_rx) = watch::channel(NetworkState::Loading);

        let task = tokio::spawn(run(
            samples,
            self.config,
            self.notifier.clone(),
            state_tx,
            stop_rx,
        ));

        info!(
            debounce = ?self.config.debounce_delay,
            "Connectivity monitor started"
        );

        MonitorHandle {
            stop_tx: Some(stop_tx),
            task,
            state_rx,
        }
    }
}

/// Handle to a running monitor.
///
/// Dropping the handle stops the monitor.
#[derive(Debug)]
pub struct MonitorHandle {
    stop_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
    state_rx: watch::Receiver<NetworkState>,
}

impl MonitorHandle {
    /// The monitor's current state.
    #[must_use]
    pub fn state(&self) -> NetworkState {
        *self.state_rx.borrow()
    }

    /// Returns true if the network is currently trusted.
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.state().is_online()
    }

    /// A receiver that observes every state change.
    #[must_use]
    pub fn subscribe_state(&self) -> watch::Receiver<NetworkState> {
        self.state_rx.clone()
    }

    /// Stops the monitor and waits for its task to finish.
    ///
    /// # Errors
    ///
    /// Returns `MonitorError::TaskFailed` if the task panicked.
    pub async fn stop(mut self) -> Result<(), MonitorError> {
        if let Some(stop_tx) = self.stop_tx.take() {
            // The task may already have ended with its sample stream.
            let _ = stop_tx.send(());
        }
        self.task.await?;
        Ok(())
    }
}

async fn run<S>(
    samples: S,
    config: MonitorConfig,
    notifier: NetworkNotifier,
    state_tx: watch::Sender<NetworkState>,
    mut stop_rx: oneshot::Receiver<()>,
) where
    S: Stream<Item = ConnectivitySample> + Send + 'static,
{
    let mut samples = std::pin::pin!(samples);
    let mut state = NetworkState::Loading;
    let mut delay: Option<Pin<Box<Sleep>>> = None;

    loop {
        let input = tokio::select! {
            biased;
            _ = &mut stop_rx => {
                debug!("Connectivity monitor stop requested");
                break;
            }
            sample = samples.next() => match sample {
                Some(sample) => {
                    debug!(?sample, "Received connectivity sample");
                    MachineInput::Connectivity(sample.event())
                }
                None => {
                    debug!("Connectivity subscription released");
                    break;
                }
            },
            () = delay_elapsed(&mut delay) => {
                delay = None;
                MachineInput::DelayElapsed
            }
        };

        let next = transition(state, input);
        for effect in next.effects {
            match effect {
                Effect::Notify(notification) => notifier.notify(notification),
                Effect::StartDelay => {
                    delay = Some(Box::pin(tokio::time::sleep(config.debounce_delay)));
                }
                Effect::CancelDelay => delay = None,
            }
        }

        if next.state != state {
            info!(from = ?state, to = ?next.state, "Network state changed");
            state = next.state;
            state_tx.send_replace(state);
        }
    }

    info!("Connectivity monitor stopped");
}

/// Resolves when the armed delay elapses; never resolves while disarmed.
async fn delay_elapsed(delay: &mut Option<Pin<Box<Sleep>>>) {
    match delay {
        Some(sleep) => sleep.as_mut().await,
        None => std::future::pending().await,
    }
}
