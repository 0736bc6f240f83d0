// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Retention of locally queued reports.
//!
//! Partitioning is pure: the input is never mutated and nothing is
//! deleted. Callers delete the expired set from storage and persist the
//! status rewrites of the valid set.

use crate::calendar::calendar_day_difference;
use crate::types::{Report, ReportStatus};
use time::OffsetDateTime;
use tracing::debug;

/// Queued reports split by retention.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportPartition {
    /// Reports still inside the retention window, ready for retry.
    pub valid_reports: Vec<Report>,
    /// Reports outside the retention window.
    pub expired_reports: Vec<Report>,
    /// Indices into `valid_reports` whose status was rewritten.
    rewritten: Vec<usize>,
}

impl ReportPartition {
    /// Returns true if no reports were partitioned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valid_reports.is_empty() && self.expired_reports.is_empty()
    }

    /// Valid reports whose status was rewritten and must be stored again.
    pub fn reports_to_persist(&self) -> impl Iterator<Item = &Report> {
        self.rewritten
            .iter()
            .filter_map(|&index| self.valid_reports.get(index))
    }
}

/// Splits `reports` into those created within `retention_days` calendar
/// days of `now` and those older.
///
/// A valid report left in `Loading` by an interrupted submission comes
/// back as `Pending` so the next retry sweep picks it up. Other statuses
/// are unchanged.
#[must_use]
pub fn partition_reports(
    reports: &[Report],
    now: OffsetDateTime,
    retention_days: u32,
) -> ReportPartition {
    let mut partition = ReportPartition::default();

    for report in reports {
        let age_days = calendar_day_difference(now, report.created_at).unsigned_abs();
        if age_days > u64::from(retention_days) {
            partition.expired_reports.push(report.clone());
            continue;
        }

        let mut retained = report.clone();
        if retained.status == ReportStatus::Loading {
            retained.status = ReportStatus::Pending;
            partition.rewritten.push(partition.valid_reports.len());
        }
        partition.valid_reports.push(retained);
    }

    debug!(
        valid = partition.valid_reports.len(),
        expired = partition.expired_reports.len(),
        rewritten = partition.rewritten.len(),
        retention_days,
        "Partitioned queued reports"
    );

    partition
}
