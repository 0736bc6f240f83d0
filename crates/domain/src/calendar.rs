// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar and interval primitives shared by the time-window rules.
//!
//! ## Invariants
//!
//! - Instants are assumed well-formed; parsing happens at the snapshot
//!   boundary, not here.
//! - Window bounds are inclusive on both sides.
//! - An absent bound imposes no restriction on that side.

use time::OffsetDateTime;

/// Returns the signed number of calendar days from `earlier` to `later`.
///
/// Both instants are compared as calendar dates in `later`'s UTC offset, so
/// 23:59 and 00:01 the following day are one day apart while 00:01 and
/// 23:59 of the same day are zero days apart. The result is negative when
/// `earlier` falls on a later date.
#[must_use]
pub fn calendar_day_difference(later: OffsetDateTime, earlier: OffsetDateTime) -> i64 {
    let earlier_date = earlier.to_offset(later.offset()).date();
    (later.date() - earlier_date).whole_days()
}

/// Returns true if `instant` lies within `[from, to]`.
///
/// Either bound may be absent, in which case that side is unbounded.
#[must_use]
pub fn is_within_window(
    instant: OffsetDateTime,
    from: Option<OffsetDateTime>,
    to: Option<OffsetDateTime>,
) -> bool {
    if from.is_some_and(|start| start > instant) {
        return false;
    }
    if to.is_some_and(|end| end < instant) {
        return false;
    }
    true
}
