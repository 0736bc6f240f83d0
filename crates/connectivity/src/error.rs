// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors surfaced by the monitor lifecycle.
///
/// Connectivity problems are never errors; the probe reports them as
/// unavailable samples.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// The monitor task panicked or was aborted.
    #[error("Connectivity monitor task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
