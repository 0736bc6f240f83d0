// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only snapshots consumed by the rules.
//!
//! Every type here is produced by a remote service or the local report
//! queue. The rules never mutate them; where a rule needs to change a
//! value (the report status rewrite) it returns a new object.

use geo::{MultiPolygon, Point};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use time::OffsetDateTime;

/// Identifier of a permit issued by the permit service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermitId(pub i64);

/// Identifier of a managed hunting district.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistrictId(pub i64);

impl fmt::Display for DistrictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a member of the hunting organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub i64);

/// Lifecycle tag of a permit strap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrapStatus {
    /// The strap is available for a catch report.
    Unused,
    /// The strap has been consumed by a report.
    Used,
    /// The strap was withdrawn by the issuer.
    Cancelled,
}

impl StrapStatus {
    /// Returns the string representation used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unused => "unused",
            Self::Used => "used",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for StrapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the animal covered by a used permit was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HuntedType {
    /// The animal was taken.
    Hunted,
    /// The animal was wounded and not recovered.
    Injured,
}

/// A permit snapshot as fetched from the permit service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permit {
    /// The permit identifier.
    pub id: PermitId,
    /// Strap lifecycle status.
    pub strap_status_id: StrapStatus,
    /// Whether reports against this permit may still be created or amended.
    pub is_report_editing_enabled: bool,
    /// Start of validity. Absent means unbounded.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub valid_from: Option<OffsetDateTime>,
    /// End of validity. Absent means unbounded.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub valid_to: Option<OffsetDateTime>,
    /// Districts in which the permit may be used.
    pub hunting_district_ids: HashSet<DistrictId>,
    /// Permit type as assigned by the issuer.
    pub permit_type_id: i64,
    /// How the catch was reported, once the permit is used.
    #[serde(default)]
    pub hunted_type_id: Option<HuntedType>,
    /// When the animal was reported injured.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub injured_date: Option<OffsetDateTime>,
}

impl Permit {
    /// Returns true if the permit may be used in the given district.
    #[must_use]
    pub fn covers_district(&self, district_id: DistrictId) -> bool {
        self.hunting_district_ids.contains(&district_id)
    }
}

/// A managed hunting district with its boundary in (longitude, latitude).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    /// The district identifier.
    pub id: DistrictId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Boundary geometry.
    pub boundary: MultiPolygon<f64>,
}

/// A recorded device position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Self-reported accuracy radius in meters.
    #[serde(default)]
    pub accuracy: Option<f64>,
}

impl Position {
    /// Creates a position without an accuracy estimate.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: None,
        }
    }

    /// The position as a geographic point (x = longitude, y = latitude).
    #[must_use]
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

/// Sync status of a locally queued report.
///
/// Statuses this crate does not act on are carried verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportStatus {
    /// Waiting for the next sync attempt.
    Pending,
    /// A submission was in flight.
    Loading,
    /// The last submission attempt failed.
    Failed,
    /// Accepted by the server.
    Sent,
    /// Any other status string.
    Other(String),
}

impl ReportStatus {
    /// Returns the string representation used by the local queue.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Loading => "loading",
            Self::Failed => "failed",
            Self::Sent => "sent",
            Self::Other(status) => status,
        }
    }
}

impl From<String> for ReportStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => Self::Pending,
            "loading" => Self::Loading,
            "failed" => Self::Failed,
            "sent" => Self::Sent,
            _ => Self::Other(value),
        }
    }
}

impl From<ReportStatus> for String {
    fn from(value: ReportStatus) -> Self {
        match value {
            ReportStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A locally queued, not yet submitted report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// When the report was created on the device.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Current sync status.
    pub status: ReportStatus,
    /// Report body, opaque to the rules.
    #[serde(default)]
    pub payload: serde_json::Value,
}

/// A membership season card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonCard {
    /// First instant the card is active.
    #[serde(with = "time::serde::rfc3339")]
    pub valid_from: OffsetDateTime,
    /// Last instant the card is active.
    #[serde(with = "time::serde::rfc3339")]
    pub valid_to: OffsetDateTime,
}

/// A member snapshot from the membership service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// The member identifier.
    pub id: MemberId,
    /// The currently issued season card, if any.
    #[serde(default)]
    pub valid_season_card: Option<SeasonCard>,
}
