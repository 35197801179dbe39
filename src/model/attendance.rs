use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::ids::{AttendanceId, EmployeeId, ProjectId};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AttendanceStatus {
    #[default]
    Present,
    HalfDay,
    Absent,
    Leave,
}

/// A day's work log. Immutable once created; delete-and-recreate is the only
/// edit path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub id: AttendanceId,
    pub employee_id: EmployeeId,
    pub project_id: ProjectId,
    /// Day granularity; at most one entry per (employee, date) system-wide.
    pub date: NaiveDate,
    #[serde(default)]
    pub status: AttendanceStatus,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub created_at: DateTime<Utc>,
    /// Identity of the session that logged the entry, used for scoping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}
