// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! District containment with a fixed tolerance for GPS drift.
//!
//! The position's own `accuracy` is not consulted. The only tolerance is
//! the configured buffer, applied uniformly around every district.

use crate::geometry::BufferedBoundary;
use crate::types::{District, DistrictId, Position};
use tracing::debug;

/// Returns true if `position` lies inside the district `district_id`
/// expanded outward by `buffer_meters`.
///
/// An unknown district id yields `false`: without reference data
/// containment cannot be proven.
#[must_use]
pub fn is_position_in_district(
    position: &Position,
    district_id: DistrictId,
    districts: &[District],
    buffer_meters: f64,
) -> bool {
    let Some(district) = districts.iter().find(|d| d.id == district_id) else {
        debug!(%district_id, "District not found, containment cannot be proven");
        return false;
    };

    let boundary = BufferedBoundary::new(&district.boundary, buffer_meters);
    let inside = boundary.contains(&position.point());

    debug!(
        %district_id,
        latitude = position.latitude,
        longitude = position.longitude,
        buffer_meters = boundary.meters(),
        inside,
        "Evaluated district containment"
    );

    inside
}
