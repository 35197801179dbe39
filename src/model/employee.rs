use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::ids::EmployeeId;

/// Access tier stored on an employee record.
///
/// Replaces a pair of independent boolean flags; both-set is not
/// representable here. The global administrator is a sentinel credential,
/// not an employee, so it has no variant.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AccessLevel {
    #[default]
    Staff,
    Supervisor,
    Manager,
}

impl AccessLevel {
    /// Whether this tier may hold login credentials.
    pub fn can_login(&self) -> bool {
        matches!(self, AccessLevel::Supervisor | AccessLevel::Manager)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    /// Job title, free text.
    pub role: String,
    /// Current value only; rate math divides this by 30 for the daily rate.
    pub monthly_salary: f64,
    pub join_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default)]
    pub access: AccessLevel,
    /// Login credentials for supervisor/manager accounts. Stored and matched
    /// as plain text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
