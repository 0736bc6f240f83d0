// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Correction window for permits reported as injured.
//!
//! A used permit whose animal was reported injured may have its report
//! amended while the calendar-day distance between the injury date and
//! `now` is at most the window. The distance is absolute, so an injury
//! date up to the window in the future (device clock skew) is accepted too.
//! Calendar days are read in `now`'s offset, whatever offset the injury
//! date was written in.

use crate::calendar::calendar_day_difference;
use crate::types::{DistrictId, HuntedType, Permit, StrapStatus};
use time::OffsetDateTime;

/// Returns true if the injured report on `permit` may still be amended in
/// `district_id` at `now`.
///
/// Requires a `Used` strap with editing enabled, an `Injured` hunted type,
/// an injury date, and district coverage.
#[must_use]
pub fn is_injured_correction_window_open(
    permit: &Permit,
    district_id: DistrictId,
    now: OffsetDateTime,
    window_days: u32,
) -> bool {
    if permit.strap_status_id != StrapStatus::Used
        || !permit.is_report_editing_enabled
        || permit.hunted_type_id != Some(HuntedType::Injured)
        || !permit.covers_district(district_id)
    {
        return false;
    }

    let Some(injured_date) = permit.injured_date else {
        return false;
    };

    calendar_day_difference(now, injured_date).unsigned_abs() <= u64::from(window_days)
}

/// Returns the permits whose injured report may be amended in
/// `district_id` at `now`, preserving input order.
#[must_use]
pub fn correctable_permits(
    permits: &[Permit],
    district_id: DistrictId,
    now: OffsetDateTime,
    window_days: u32,
) -> Vec<&Permit> {
    permits
        .iter()
        .filter(|permit| is_injured_correction_window_open(permit, district_id, now, window_days))
        .collect()
}
