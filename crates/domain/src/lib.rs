// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Eligibility and sync-readiness rules for field catch reporting.
//!
//! Every rule is a synchronous, pure function of its inputs: snapshots
//! fetched from remote services, the local report queue, and a caller
//! supplied `now`. Nothing here reads the clock, performs I/O, or mutates
//! its arguments, so rules may be evaluated concurrently without locking.

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

mod calendar;
mod config;
mod district;
mod eligibility;
mod error;
mod geometry;
mod injured_correction;
mod permit_validity;
mod retention;
mod season_card;
mod types;

#[cfg(test)]
mod tests;

pub use calendar::{calendar_day_difference, is_within_window};
pub use config::{
    ENV_CONNECTIVITY_DEBOUNCE_MS, ENV_INJURED_CORRECTION_DAYS, ENV_POSITION_BUFFER_METERS,
    ENV_REPORT_RETENTION_DAYS, RulesConfig,
};
pub use district::is_position_in_district;
pub use eligibility::PermitEligibility;
pub use error::ConfigError;
pub use geometry::BufferedBoundary;
pub use injured_correction::{correctable_permits, is_injured_correction_window_open};
pub use permit_validity::{PermitRejection, is_permit_usable, permit_rejection, usable_permits};
pub use retention::{ReportPartition, partition_reports};
pub use season_card::is_season_card_valid;

// Re-export public types
pub use types::{
    District, DistrictId, HuntedType, Member, MemberId, Permit, PermitId, Position, Report,
    ReportStatus, SeasonCard, StrapStatus,
};
