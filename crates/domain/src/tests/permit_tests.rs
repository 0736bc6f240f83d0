// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{NOW, create_injured_permit, create_unused_permit};
use crate::{
    DistrictId, HuntedType, PermitEligibility, PermitRejection, RulesConfig, StrapStatus,
    correctable_permits, is_injured_correction_window_open, is_permit_usable, permit_rejection,
    usable_permits,
};
use time::Duration;
use time::macros::datetime;

const WINDOW_DAYS: u32 = 14;

#[test]
fn test_permit_usable_in_covered_district() {
    let permit = create_unused_permit(&[5]);
    assert!(is_permit_usable(&permit, DistrictId(5), NOW));
}

#[test]
fn test_permit_not_usable_in_other_district() {
    let permit = create_unused_permit(&[5]);
    assert!(!is_permit_usable(&permit, DistrictId(6), NOW));
    assert_eq!(
        permit_rejection(&permit, DistrictId(6), NOW),
        Some(PermitRejection::DistrictNotCovered(DistrictId(6)))
    );
}

#[test]
fn test_permit_not_usable_unless_unused() {
    for status in [StrapStatus::Used, StrapStatus::Cancelled] {
        let mut permit = create_unused_permit(&[5]);
        permit.strap_status_id = status;
        permit.valid_from = None;
        permit.valid_to = None;
        assert!(!is_permit_usable(&permit, DistrictId(5), NOW));
        assert_eq!(
            permit_rejection(&permit, DistrictId(5), NOW),
            Some(PermitRejection::StrapNotUnused(status))
        );
    }
}

#[test]
fn test_permit_not_usable_when_editing_disabled() {
    let mut permit = create_unused_permit(&[5]);
    permit.is_report_editing_enabled = false;
    assert_eq!(
        permit_rejection(&permit, DistrictId(5), NOW),
        Some(PermitRejection::EditingDisabled)
    );
}

#[test]
fn test_permit_usable_at_window_bounds() {
    let mut permit = create_unused_permit(&[5]);
    permit.valid_from = Some(NOW);
    permit.valid_to = Some(NOW + Duration::DAY);
    assert!(is_permit_usable(&permit, DistrictId(5), NOW));

    permit.valid_from = Some(NOW - Duration::DAY);
    permit.valid_to = Some(NOW);
    assert!(is_permit_usable(&permit, DistrictId(5), NOW));
}

#[test]
fn test_permit_not_usable_just_outside_window() {
    let mut permit = create_unused_permit(&[5]);
    permit.valid_from = Some(NOW + Duration::SECOND);
    assert_eq!(
        permit_rejection(&permit, DistrictId(5), NOW),
        Some(PermitRejection::NotYetValid)
    );

    let mut permit = create_unused_permit(&[5]);
    permit.valid_to = Some(NOW - Duration::SECOND);
    assert_eq!(
        permit_rejection(&permit, DistrictId(5), NOW),
        Some(PermitRejection::Expired)
    );
}

#[test]
fn test_permit_without_bounds_is_unrestricted() {
    let mut permit = create_unused_permit(&[5]);
    permit.valid_from = None;
    permit.valid_to = None;
    assert!(is_permit_usable(&permit, DistrictId(5), NOW + Duration::days(3650)));
    assert!(is_permit_usable(&permit, DistrictId(5), NOW - Duration::days(3650)));
}

#[test]
fn test_rejection_reports_strap_before_dates() {
    let mut permit = create_unused_permit(&[5]);
    permit.strap_status_id = StrapStatus::Cancelled;
    permit.valid_to = Some(NOW - Duration::DAY);
    assert_eq!(
        permit_rejection(&permit, DistrictId(6), NOW),
        Some(PermitRejection::StrapNotUnused(StrapStatus::Cancelled))
    );
}

#[test]
fn test_rejection_display() {
    assert_eq!(
        PermitRejection::StrapNotUnused(StrapStatus::Used).to_string(),
        "Permit strap is used"
    );
    assert_eq!(
        PermitRejection::DistrictNotCovered(DistrictId(6)).to_string(),
        "Permit does not cover district 6"
    );
}

#[test]
fn test_usable_permits_filters_and_preserves_order() {
    let mut expired = create_unused_permit(&[5]);
    expired.valid_to = Some(NOW - Duration::DAY);
    let mut second = create_unused_permit(&[5, 7]);
    second.id = crate::PermitId(2);
    let permits = vec![create_unused_permit(&[5]), expired, second];

    let usable = usable_permits(&permits, DistrictId(5), NOW);
    assert_eq!(usable.len(), 2);
    assert_eq!(usable[0].id, crate::PermitId(1));
    assert_eq!(usable[1].id, crate::PermitId(2));
    assert!(usable_permits(&permits, DistrictId(9), NOW).is_empty());
}

#[test]
fn test_injured_window_open_at_fourteen_days() {
    let past = create_injured_permit(&[5], NOW - Duration::days(14));
    let future = create_injured_permit(&[5], NOW + Duration::days(14));
    assert!(is_injured_correction_window_open(&past, DistrictId(5), NOW, WINDOW_DAYS));
    assert!(is_injured_correction_window_open(&future, DistrictId(5), NOW, WINDOW_DAYS));
}

#[test]
fn test_injured_window_closed_at_fifteen_days() {
    let past = create_injured_permit(&[5], NOW - Duration::days(15));
    let future = create_injured_permit(&[5], NOW + Duration::days(15));
    assert!(!is_injured_correction_window_open(&past, DistrictId(5), NOW, WINDOW_DAYS));
    assert!(!is_injured_correction_window_open(&future, DistrictId(5), NOW, WINDOW_DAYS));
}

#[test]
fn test_injured_window_counts_calendar_days() {
    // 14 days and 11 hours earlier is still 14 calendar days back.
    let injured = NOW - Duration::days(14) - Duration::hours(11);
    let permit = create_injured_permit(&[5], injured);
    assert!(is_injured_correction_window_open(&permit, DistrictId(5), NOW, WINDOW_DAYS));
}

#[test]
fn test_injured_window_uses_local_calendar_of_now() {
    let now = datetime!(2026-10-16 01:00 +3);
    // The same instant, written in UTC and in local time. Locally it is
    // 2026-10-01, fifteen calendar days before `now`.
    let in_utc = create_injured_permit(&[5], datetime!(2026-10-01 20:00 UTC));
    let in_local = create_injured_permit(&[5], datetime!(2026-10-01 23:00 +3));

    assert!(!is_injured_correction_window_open(&in_utc, DistrictId(5), now, WINDOW_DAYS));
    assert!(!is_injured_correction_window_open(&in_local, DistrictId(5), now, WINDOW_DAYS));
    assert!(is_injured_correction_window_open(&in_utc, DistrictId(5), now, 15));
}

#[test]
fn test_injured_window_is_configurable() {
    let permit = create_injured_permit(&[5], NOW - Duration::days(20));
    assert!(!is_injured_correction_window_open(&permit, DistrictId(5), NOW, WINDOW_DAYS));
    assert!(is_injured_correction_window_open(&permit, DistrictId(5), NOW, 21));
}

#[test]
fn test_injured_window_requires_all_conditions() {
    let base = create_injured_permit(&[5], NOW - Duration::days(1));
    assert!(is_injured_correction_window_open(&base, DistrictId(5), NOW, WINDOW_DAYS));

    let mut unused = base.clone();
    unused.strap_status_id = StrapStatus::Unused;
    assert!(!is_injured_correction_window_open(&unused, DistrictId(5), NOW, WINDOW_DAYS));

    let mut locked = base.clone();
    locked.is_report_editing_enabled = false;
    assert!(!is_injured_correction_window_open(&locked, DistrictId(5), NOW, WINDOW_DAYS));

    let mut hunted = base.clone();
    hunted.hunted_type_id = Some(HuntedType::Hunted);
    assert!(!is_injured_correction_window_open(&hunted, DistrictId(5), NOW, WINDOW_DAYS));

    let mut undated = base.clone();
    undated.injured_date = None;
    assert!(!is_injured_correction_window_open(&undated, DistrictId(5), NOW, WINDOW_DAYS));

    assert!(!is_injured_correction_window_open(&base, DistrictId(6), NOW, WINDOW_DAYS));
}

#[test]
fn test_correctable_permits() {
    let permits = vec![
        create_injured_permit(&[5], NOW - Duration::days(3)),
        create_injured_permit(&[5], NOW - Duration::days(30)),
        create_unused_permit(&[5]),
    ];
    let correctable = correctable_permits(&permits, DistrictId(5), NOW, WINDOW_DAYS);
    assert_eq!(correctable.len(), 1);
    assert_eq!(correctable[0].injured_date, Some(NOW - Duration::days(3)));
}

#[test]
fn test_eligibility_is_exclusive() {
    let config = RulesConfig::default();
    let usable = create_unused_permit(&[5]);
    let injured = create_injured_permit(&[5], NOW - Duration::days(2));
    let stale = create_injured_permit(&[5], NOW - Duration::days(40));

    assert_eq!(
        PermitEligibility::evaluate(&usable, DistrictId(5), NOW, &config),
        PermitEligibility::Usable
    );
    assert_eq!(
        PermitEligibility::evaluate(&injured, DistrictId(5), NOW, &config),
        PermitEligibility::CorrectionWindowOpen
    );
    assert_eq!(
        PermitEligibility::evaluate(&stale, DistrictId(5), NOW, &config),
        PermitEligibility::Unavailable
    );
    assert!(!is_permit_usable(&injured, DistrictId(5), NOW));
}
