// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tunable windows and tolerances for the rules.
//!
//! Every value has a default and can be overridden per environment through
//! `FIELDSYNC_*` variables, or deserialized from a config document.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Environment variable overriding `injured_correction_days`.
pub const ENV_INJURED_CORRECTION_DAYS: &str = "FIELDSYNC_INJURED_CORRECTION_DAYS";
/// Environment variable overriding `report_retention_days`.
pub const ENV_REPORT_RETENTION_DAYS: &str = "FIELDSYNC_REPORT_RETENTION_DAYS";
/// Environment variable overriding `position_buffer_meters`.
pub const ENV_POSITION_BUFFER_METERS: &str = "FIELDSYNC_POSITION_BUFFER_METERS";
/// Environment variable overriding `connectivity_debounce_ms`.
pub const ENV_CONNECTIVITY_DEBOUNCE_MS: &str = "FIELDSYNC_CONNECTIVITY_DEBOUNCE_MS";

/// Configuration for the eligibility and retention rules.
///
/// Deserializing a config document applies the same checks as
/// `from_lookup`; missing fields keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RulesConfigDocument")]
pub struct RulesConfig {
    /// Days after an injured report during which it may be amended.
    pub injured_correction_days: u32,
    /// Days a queued report is retried before it is discarded.
    pub report_retention_days: u32,
    /// Tolerance around district boundaries, in meters.
    pub position_buffer_meters: f64,
    /// How long connectivity must stay available before it is trusted.
    pub connectivity_debounce_ms: u64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            injured_correction_days: Self::DEFAULT_INJURED_CORRECTION_DAYS,
            report_retention_days: Self::DEFAULT_REPORT_RETENTION_DAYS,
            position_buffer_meters: Self::DEFAULT_POSITION_BUFFER_METERS,
            connectivity_debounce_ms: Self::DEFAULT_CONNECTIVITY_DEBOUNCE_MS,
        }
    }
}

impl RulesConfig {
    /// Default injured correction window.
    pub const DEFAULT_INJURED_CORRECTION_DAYS: u32 = 14;
    /// Default report retention window.
    pub const DEFAULT_REPORT_RETENTION_DAYS: u32 = 30;
    /// Default district boundary tolerance.
    pub const DEFAULT_POSITION_BUFFER_METERS: f64 = 50.0;
    /// Default connectivity debounce delay.
    pub const DEFAULT_CONNECTIVITY_DEBOUNCE_MS: u64 = 3000;

    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration using `lookup` to resolve variables.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a value cannot be parsed, or if
    /// the buffer is negative or not finite.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(days) = parse_var(&lookup, ENV_INJURED_CORRECTION_DAYS)? {
            config.injured_correction_days = days;
        }
        if let Some(days) = parse_var(&lookup, ENV_REPORT_RETENTION_DAYS)? {
            config.report_retention_days = days;
        }
        if let Some(meters) = parse_var(&lookup, ENV_POSITION_BUFFER_METERS)? {
            config.position_buffer_meters = validate_buffer(ENV_POSITION_BUFFER_METERS, meters)?;
        }
        if let Some(millis) = parse_var(&lookup, ENV_CONNECTIVITY_DEBOUNCE_MS)? {
            config.connectivity_debounce_ms = millis;
        }

        Ok(config)
    }

    /// The connectivity debounce delay as a `Duration`.
    #[must_use]
    pub const fn connectivity_debounce(&self) -> Duration {
        Duration::from_millis(self.connectivity_debounce_ms)
    }
}

/// Wire form of `RulesConfig`, validated on conversion.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RulesConfigDocument {
    injured_correction_days: Option<u32>,
    report_retention_days: Option<u32>,
    position_buffer_meters: Option<f64>,
    connectivity_debounce_ms: Option<u64>,
}

impl TryFrom<RulesConfigDocument> for RulesConfig {
    type Error = ConfigError;

    fn try_from(document: RulesConfigDocument) -> Result<Self, Self::Error> {
        let defaults = Self::default();
        let position_buffer_meters = match document.position_buffer_meters {
            Some(meters) => validate_buffer("positionBufferMeters", meters)?,
            None => defaults.position_buffer_meters,
        };
        Ok(Self {
            injured_correction_days: document
                .injured_correction_days
                .unwrap_or(defaults.injured_correction_days),
            report_retention_days: document
                .report_retention_days
                .unwrap_or(defaults.report_retention_days),
            position_buffer_meters,
            connectivity_debounce_ms: document
                .connectivity_debounce_ms
                .unwrap_or(defaults.connectivity_debounce_ms),
        })
    }
}

fn validate_buffer(key: &str, meters: f64) -> Result<f64, ConfigError> {
    if meters.is_finite() && meters >= 0.0 {
        Ok(meters)
    } else {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: meters.to_string(),
            reason: String::from("must be a finite, non-negative distance"),
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.clone(),
            reason: e.to_string(),
        })
}
