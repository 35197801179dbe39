//! Payroll engine: pure projections from raw attendance, advance, and payout
//! records.
//!
//! Nothing here mutates state and nothing is cached; every query recomputes
//! from the records it is given so results always reflect the latest
//! mutation.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{
    AdvanceEntry, AttendanceEntry, Employee, EmployeeId, Month, PayoutEntry, Project, ProjectId,
};

pub const DAYS_PER_MONTH: f64 = 30.0;
pub const HOURS_PER_DAY: f64 = 8.0;

/// Scope for aggregation queries: a specific calendar month or the full
/// history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportingWindow {
    AllTime,
    Month(Month),
}

impl ReportingWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            ReportingWindow::AllTime => true,
            ReportingWindow::Month(month) => month.contains(date),
        }
    }
}

pub fn daily_rate(employee: &Employee) -> f64 {
    employee.monthly_salary / DAYS_PER_MONTH
}

pub fn hourly_rate(employee: &Employee) -> f64 {
    daily_rate(employee) / HOURS_PER_DAY
}

/// Pay for a single attendance entry.
///
/// Regular hours prorate the daily rate (4 regular hours earn half a day's
/// pay whatever the declared status). Overtime is paid at the plain hourly
/// rate, with no premium multiplier.
pub fn earned(employee: &Employee, entry: &AttendanceEntry) -> f64 {
    let base = (entry.regular_hours / HOURS_PER_DAY) * daily_rate(employee);
    let ot = entry.overtime_hours * hourly_rate(employee);
    base + ot
}

/// Net payable rounds to the nearest whole amount and floors at zero:
/// liabilities cannot go negative, there is no carry-forward debt.
pub fn net_payable(earned: f64, advances: f64, already_paid: f64) -> i64 {
    ((earned - advances - already_paid).round() as i64).max(0)
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeSummary {
    pub employee_id: EmployeeId,
    pub name: String,
    pub role: String,
    pub monthly_salary: f64,
    /// Count of distinct dates with at least one attendance entry.
    pub total_days: usize,
    pub total_overtime_hours: f64,
    pub total_advance: f64,
    pub total_earned: f64,
    /// Payouts recorded against the window's month. Zero for all-time
    /// windows; payout reconciliation is month-scoped only.
    pub already_paid: f64,
    pub net_payable: i64,
}

impl EmployeeSummary {
    /// A month's liability is settled once nothing remains payable.
    pub fn is_settled(&self) -> bool {
        self.net_payable == 0
    }
}

pub fn employee_summary(
    employee: &Employee,
    attendance: &[AttendanceEntry],
    advances: &[AdvanceEntry],
    payouts: &[PayoutEntry],
    window: ReportingWindow,
) -> EmployeeSummary {
    let entries: Vec<&AttendanceEntry> = attendance
        .iter()
        .filter(|a| a.employee_id == employee.id && window.contains(a.date))
        .collect();

    let distinct_dates: HashSet<NaiveDate> = entries.iter().map(|a| a.date).collect();
    let total_overtime_hours: f64 = entries.iter().map(|a| a.overtime_hours).sum();
    let total_earned: f64 = entries.iter().map(|a| earned(employee, a)).sum();

    let total_advance: f64 = advances
        .iter()
        .filter(|a| a.employee_id == employee.id && window.contains(a.date))
        .map(|a| a.amount)
        .sum();

    let already_paid: f64 = match window {
        ReportingWindow::Month(month) => payouts
            .iter()
            .filter(|p| p.employee_id == employee.id && p.month == month)
            .map(|p| p.amount)
            .sum(),
        ReportingWindow::AllTime => 0.0,
    };

    EmployeeSummary {
        employee_id: employee.id.clone(),
        name: employee.name.clone(),
        role: employee.role.clone(),
        monthly_salary: employee.monthly_salary,
        total_days: distinct_dates.len(),
        total_overtime_hours,
        total_advance,
        total_earned,
        already_paid,
        net_payable: net_payable(total_earned, total_advance, already_paid),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectSummary {
    pub project_id: ProjectId,
    pub name: String,
    /// Regular plus overtime hours across the window.
    pub total_hours: f64,
    /// Labor cost via the same earned() formula. Entries whose employee has
    /// been deleted still count their hours but contribute no cost.
    pub labor_cost: f64,
}

pub fn project_summary(
    project: &Project,
    employees: &[Employee],
    attendance: &[AttendanceEntry],
    window: ReportingWindow,
) -> ProjectSummary {
    let mut total_hours = 0.0;
    let mut labor_cost = 0.0;

    for entry in attendance
        .iter()
        .filter(|a| a.project_id == project.id && window.contains(a.date))
    {
        total_hours += entry.regular_hours + entry.overtime_hours;
        if let Some(employee) = employees.iter().find(|e| e.id == entry.employee_id) {
            labor_cost += earned(employee, entry);
        }
    }

    ProjectSummary {
        project_id: project.id.clone(),
        name: project.name.clone(),
        total_hours,
        labor_cost,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanySummary {
    pub total_regular_hours: f64,
    pub total_overtime_hours: f64,
    /// Sum over all advance entries in the window, including orphaned ones.
    pub total_advances: f64,
    /// Sum of per-employee earned wages.
    pub total_earned: f64,
    pub already_paid: f64,
    pub net_payable: i64,
}

/// Company-wide rollup. The hour and advance totals come straight off the
/// raw entries; the net figure aggregates the per-employee sums so both
/// views of the books agree.
pub fn company_summary(
    employees: &[Employee],
    attendance: &[AttendanceEntry],
    advances: &[AdvanceEntry],
    payouts: &[PayoutEntry],
    window: ReportingWindow,
) -> CompanySummary {
    let mut total_regular_hours = 0.0;
    let mut total_overtime_hours = 0.0;
    for entry in attendance.iter().filter(|a| window.contains(a.date)) {
        total_regular_hours += entry.regular_hours;
        total_overtime_hours += entry.overtime_hours;
    }

    let total_advances: f64 = advances
        .iter()
        .filter(|a| window.contains(a.date))
        .map(|a| a.amount)
        .sum();

    let mut total_earned = 0.0;
    let mut employee_advances = 0.0;
    let mut already_paid = 0.0;
    for employee in employees {
        let summary = employee_summary(employee, attendance, advances, payouts, window);
        total_earned += summary.total_earned;
        employee_advances += summary.total_advance;
        already_paid += summary.already_paid;
    }

    CompanySummary {
        total_regular_hours,
        total_overtime_hours,
        total_advances,
        total_earned,
        already_paid,
        net_payable: net_payable(total_earned, employee_advances, already_paid),
    }
}
