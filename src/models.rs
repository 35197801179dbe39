//! Request payloads accepted by the operations layer.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::{
    AccessLevel, AttendanceStatus, EmployeeId, Month, PaymentMode, ProjectId,
};

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub user_id: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub role: String,
    pub monthly_salary: f64,
    pub join_date: NaiveDate,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub access: AccessLevel,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    /// One-time onboarding advance, recorded against the join date.
    #[serde(default)]
    pub initial_advance: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEmployee {
    pub name: Option<String>,
    pub role: Option<String>,
    pub monthly_salary: Option<f64>,
    pub join_date: Option<NaiveDate>,
    pub photo: Option<String>,
    pub access: Option<AccessLevel>,
    pub user_id: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAttendance {
    pub employee_id: EmployeeId,
    pub project_id: ProjectId,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: AttendanceStatus,
    pub regular_hours: f64,
    pub overtime_hours: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAdvance {
    pub employee_id: EmployeeId,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPayout {
    pub employee_id: EmployeeId,
    pub amount: f64,
    pub date: NaiveDate,
    pub month: Month,
    #[serde(default)]
    pub mode: PaymentMode,
    #[serde(default)]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChangePassword {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}
