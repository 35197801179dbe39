use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::ids::{EmployeeId, PayoutId};
use super::month::Month;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaymentMode {
    Cash,
    #[default]
    Bank,
    Cheque,
}

/// A reconciling payment against a month's net payable. Multiple payouts per
/// employee per month accumulate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutEntry {
    pub id: PayoutId,
    pub employee_id: EmployeeId,
    pub amount: f64,
    /// Disbursement date.
    pub date: NaiveDate,
    /// The payroll month being settled, not necessarily the month of `date`.
    pub month: Month,
    pub mode: PaymentMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub created_at: DateTime<Utc>,
}
