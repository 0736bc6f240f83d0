// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    District, DistrictId, HuntedType, Permit, PermitId, Report, ReportStatus, StrapStatus,
};
use geo::{MultiPolygon, polygon};
use std::collections::HashSet;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

/// The reference instant used across rule tests.
pub const NOW: OffsetDateTime = datetime!(2026-10-15 12:00 UTC);

pub fn create_unused_permit(district_ids: &[i64]) -> Permit {
    Permit {
        id: PermitId(1),
        strap_status_id: StrapStatus::Unused,
        is_report_editing_enabled: true,
        valid_from: Some(NOW - Duration::DAY),
        valid_to: Some(NOW + Duration::DAY),
        hunting_district_ids: district_ids.iter().copied().map(DistrictId).collect::<HashSet<_>>(),
        permit_type_id: 3,
        hunted_type_id: None,
        injured_date: None,
    }
}

pub fn create_injured_permit(district_ids: &[i64], injured_date: OffsetDateTime) -> Permit {
    Permit {
        strap_status_id: StrapStatus::Used,
        hunted_type_id: Some(HuntedType::Injured),
        injured_date: Some(injured_date),
        ..create_unused_permit(district_ids)
    }
}

/// A district of roughly 1.1 km by 1.1 km near 60N, 24E.
pub fn create_test_district(id: i64) -> District {
    District {
        id: DistrictId(id),
        name: format!("District {id}"),
        boundary: MultiPolygon::new(vec![polygon![
            (x: 24.00, y: 60.00),
            (x: 24.02, y: 60.00),
            (x: 24.02, y: 60.01),
            (x: 24.00, y: 60.01),
            (x: 24.00, y: 60.00),
        ]]),
    }
}

pub fn create_report(created_at: OffsetDateTime, status: ReportStatus) -> Report {
    Report {
        created_at,
        status,
        payload: serde_json::json!({ "permitId": 1, "species": "moose" }),
    }
}
