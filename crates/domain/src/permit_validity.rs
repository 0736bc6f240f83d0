// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Whether an unused permit may be used to file a catch report.
//!
//! ## Invariants
//!
//! - Only `Unused` straps with report editing enabled are usable
//! - `validFrom` and `validTo` are inclusive; absent bounds are unbounded
//! - The district must be one of the permit's hunting districts
//!
//! Timestamps are assumed well-formed. `now` is always supplied by the
//! caller so the decision is deterministic.

use crate::calendar::is_within_window;
use crate::types::{DistrictId, Permit, StrapStatus};
use std::fmt;
use time::OffsetDateTime;

/// The first reason a permit cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermitRejection {
    /// The strap is not `Unused`.
    StrapNotUnused(StrapStatus),
    /// Report editing is disabled for the permit.
    EditingDisabled,
    /// `validFrom` is after `now`.
    NotYetValid,
    /// `validTo` is before `now`.
    Expired,
    /// The district is not one of the permit's hunting districts.
    DistrictNotCovered(DistrictId),
}

impl fmt::Display for PermitRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StrapNotUnused(status) => write!(f, "Permit strap is {status}"),
            Self::EditingDisabled => write!(f, "Report editing is disabled for this permit"),
            Self::NotYetValid => write!(f, "Permit is not valid yet"),
            Self::Expired => write!(f, "Permit has expired"),
            Self::DistrictNotCovered(district_id) => {
                write!(f, "Permit does not cover district {district_id}")
            }
        }
    }
}

/// Returns the first reason `permit` cannot be used in `district_id` at
/// `now`, or `None` if it is usable.
///
/// Conditions are checked in this order: strap status, editing flag,
/// start of validity, end of validity, district.
#[must_use]
pub fn permit_rejection(
    permit: &Permit,
    district_id: DistrictId,
    now: OffsetDateTime,
) -> Option<PermitRejection> {
    if permit.strap_status_id != StrapStatus::Unused {
        return Some(PermitRejection::StrapNotUnused(permit.strap_status_id));
    }
    if !permit.is_report_editing_enabled {
        return Some(PermitRejection::EditingDisabled);
    }
    if !is_within_window(now, permit.valid_from, None) {
        return Some(PermitRejection::NotYetValid);
    }
    if !is_within_window(now, None, permit.valid_to) {
        return Some(PermitRejection::Expired);
    }
    if !permit.covers_district(district_id) {
        return Some(PermitRejection::DistrictNotCovered(district_id));
    }
    None
}

/// Returns true if `permit` may be used to file a report in `district_id`
/// at `now`.
#[must_use]
pub fn is_permit_usable(permit: &Permit, district_id: DistrictId, now: OffsetDateTime) -> bool {
    permit_rejection(permit, district_id, now).is_none()
}

/// Returns the permits that may be used in `district_id` at `now`,
/// preserving input order.
#[must_use]
pub fn usable_permits(
    permits: &[Permit],
    district_id: DistrictId,
    now: OffsetDateTime,
) -> Vec<&Permit> {
    permits
        .iter()
        .filter(|permit| is_permit_usable(permit, district_id, now))
        .collect()
}
