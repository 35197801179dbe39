use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{AdvanceId, EmployeeId};

/// A cash advance drawn against a month's salary. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvanceEntry {
    pub id: AdvanceId,
    pub employee_id: EmployeeId,
    pub amount: f64,
    pub date: NaiveDate,
    pub reason: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}
