// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors raised while loading rule configuration.
///
/// The rules themselves never fail; only their configuration can.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A configuration value could not be parsed or is out of range.
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        /// The configuration key.
        key: String,
        /// The rejected raw value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}
