//! Pre-mutation rule checks.
//!
//! Both checks run at the moment of record creation and never retroactively;
//! they are pure, have no side effects on failure, and are re-evaluated on
//! every attempt since the entry set may have changed in between.

use chrono::NaiveDate;

use crate::error::{Result, WfmError};
use crate::model::{AdvanceEntry, AttendanceEntry, Employee, EmployeeId, Month, UNKNOWN_LABEL};

/// Fraction of monthly salary available as advances within one calendar
/// month.
pub const ADVANCE_CAP_RATIO: f64 = 0.5;

/// At most one attendance entry per (employee, date) pair.
///
/// Scans every existing entry regardless of creator or window: two
/// supervisors cannot both log the same employee on the same day.
pub fn check_duplicate_attendance(
    entries: &[AttendanceEntry],
    employees: &[Employee],
    employee_id: &EmployeeId,
    date: NaiveDate,
) -> Result<()> {
    let duplicate = entries
        .iter()
        .any(|e| e.employee_id == *employee_id && e.date == date);
    if duplicate {
        let name = employees
            .iter()
            .find(|e| e.id == *employee_id)
            .map_or(UNKNOWN_LABEL, |e| e.name.as_str());
        return Err(WfmError::Validation(format!(
            "Attendance already marked for {name} on {date}."
        )));
    }
    Ok(())
}

/// Cumulative advances within the calendar month of the requested date must
/// stay within half the employee's current monthly salary.
pub fn check_advance_cap(
    advances: &[AdvanceEntry],
    employee: &Employee,
    date: NaiveDate,
    amount: f64,
) -> Result<()> {
    let month = Month::of(date);
    let used: f64 = advances
        .iter()
        .filter(|a| a.employee_id == employee.id && month.contains(a.date))
        .map(|a| a.amount)
        .sum();
    let cap = employee.monthly_salary * ADVANCE_CAP_RATIO;

    if used + amount > cap {
        return Err(WfmError::Validation(format!(
            "Monthly advance cap of {cap:.0} exceeded for {}: {used:.0} already drawn this month.",
            employee.name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccessLevel, AdvanceId, AttendanceId, ProjectId};
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn employee(id: &str, monthly_salary: f64) -> Employee {
        Employee {
            id: EmployeeId::from(id.to_string()),
            name: "Alice Smith".to_string(),
            role: "Installer".to_string(),
            monthly_salary,
            join_date: date(2023, 1, 1),
            photo: None,
            access: AccessLevel::Staff,
            user_id: None,
            password: None,
        }
    }

    fn attendance(employee: &str, on: NaiveDate) -> AttendanceEntry {
        AttendanceEntry {
            id: AttendanceId::generate(),
            employee_id: EmployeeId::from(employee.to_string()),
            project_id: ProjectId::from("proj1".to_string()),
            date: on,
            status: Default::default(),
            regular_hours: 8.0,
            overtime_hours: 0.0,
            created_at: Utc::now(),
            created_by: Some("sup-1".to_string()),
        }
    }

    fn advance(employee: &str, on: NaiveDate, amount: f64) -> AdvanceEntry {
        AdvanceEntry {
            id: AdvanceId::generate(),
            employee_id: EmployeeId::from(employee.to_string()),
            amount,
            date: on,
            reason: String::new(),
            created_at: Utc::now(),
            created_by: None,
        }
    }

    #[test]
    fn test_duplicate_attendance_rejected_across_creators() {
        let emp = employee("emp1", 30000.0);
        let existing = vec![attendance("emp1", date(2026, 5, 4))];

        // The existing entry was created by sup-1; the check does not care
        // who asks now.
        let err = check_duplicate_attendance(
            &existing,
            &[emp.clone()],
            &EmployeeId::from("emp1".to_string()),
            date(2026, 5, 4),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Alice Smith"));
        assert!(err.to_string().contains("2026-05-04"));
    }

    #[test]
    fn test_same_day_other_employee_allowed() {
        let emp = employee("emp1", 30000.0);
        let existing = vec![attendance("emp1", date(2026, 5, 4))];

        check_duplicate_attendance(
            &existing,
            &[emp],
            &EmployeeId::from("emp2".to_string()),
            date(2026, 5, 4),
        )
        .unwrap();
    }

    #[test]
    fn test_duplicate_error_degrades_for_deleted_employee() {
        let existing = vec![attendance("emp-gone", date(2026, 5, 4))];
        let err = check_duplicate_attendance(
            &existing,
            &[],
            &EmployeeId::from("emp-gone".to_string()),
            date(2026, 5, 4),
        )
        .unwrap_err();
        assert!(err.to_string().contains(UNKNOWN_LABEL));
    }

    #[test]
    fn test_advance_cap_allows_up_to_half_salary() {
        let emp = employee("emp1", 30000.0);
        // cap = 15000; 14000 with nothing drawn is fine.
        check_advance_cap(&[], &emp, date(2026, 5, 3), 14000.0).unwrap();
        // Exactly at the cap is fine too.
        check_advance_cap(&[], &emp, date(2026, 5, 3), 15000.0).unwrap();
    }

    #[test]
    fn test_advance_cap_counts_existing_month_utilization() {
        let emp = employee("emp1", 30000.0);
        let existing = vec![advance("emp1", date(2026, 5, 3), 14000.0)];

        // 14000 + 2000 = 16000 > 15000.
        let err =
            check_advance_cap(&existing, &emp, date(2026, 5, 20), 2000.0).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("15000"));
        assert!(message.contains("14000"));
        assert!(message.contains("Alice Smith"));
    }

    #[test]
    fn test_advance_cap_resets_each_calendar_month() {
        let emp = employee("emp1", 30000.0);
        let existing = vec![advance("emp1", date(2026, 5, 3), 14000.0)];

        check_advance_cap(&existing, &emp, date(2026, 6, 1), 2000.0).unwrap();
    }

    #[test]
    fn test_advance_cap_ignores_other_employees() {
        let emp = employee("emp1", 30000.0);
        let existing = vec![advance("emp2", date(2026, 5, 3), 14000.0)];

        check_advance_cap(&existing, &emp, date(2026, 5, 20), 2000.0).unwrap();
    }
}
