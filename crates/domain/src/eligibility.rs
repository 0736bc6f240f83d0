// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Combined classification of a permit for a district and instant.

use crate::config::RulesConfig;
use crate::injured_correction::is_injured_correction_window_open;
use crate::permit_validity::is_permit_usable;
use crate::types::{DistrictId, Permit};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Which write path, if any, a permit currently opens.
///
/// Usability requires an `Unused` strap and correction requires a `Used`
/// one, so the two are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermitEligibility {
    /// A new catch report may be filed.
    Usable,
    /// The existing injured report may be amended.
    CorrectionWindowOpen,
    /// Neither.
    Unavailable,
}

impl PermitEligibility {
    /// Classifies `permit` for `district_id` at `now`.
    #[must_use]
    pub fn evaluate(
        permit: &Permit,
        district_id: DistrictId,
        now: OffsetDateTime,
        config: &RulesConfig,
    ) -> Self {
        if is_permit_usable(permit, district_id, now) {
            Self::Usable
        } else if is_injured_correction_window_open(
            permit,
            district_id,
            now,
            config.injured_correction_days,
        ) {
            Self::CorrectionWindowOpen
        } else {
            Self::Unavailable
        }
    }
}
