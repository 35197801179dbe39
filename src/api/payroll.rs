use crate::auth::Session;
use crate::error::{Result, WfmError};
use crate::payroll::{self, CompanySummary, EmployeeSummary, ProjectSummary, ReportingWindow};
use crate::storage::StorageBackend;
use crate::store::Store;

/// Per-employee payroll ledger for the window, one summary per employee.
/// Financial data: admin and manager only.
pub fn payroll_report<B: StorageBackend>(
    session: &Session,
    store: &Store<B>,
    window: ReportingWindow,
) -> Result<Vec<EmployeeSummary>> {
    session.require_manager_or_admin()?;
    Ok(store
        .employees()
        .iter()
        .map(|employee| {
            payroll::employee_summary(
                employee,
                store.attendance(),
                store.advances(),
                store.payouts(),
                window,
            )
        })
        .collect())
}

pub fn company_report<B: StorageBackend>(
    session: &Session,
    store: &Store<B>,
    window: ReportingWindow,
) -> Result<CompanySummary> {
    session.require_manager_or_admin()?;
    Ok(payroll::company_summary(
        store.employees(),
        store.attendance(),
        store.advances(),
        store.payouts(),
        window,
    ))
}

/// Hours and labor cost per project. Available to every role; the dashboard
/// charts are not scoped.
pub fn project_report<B: StorageBackend>(
    store: &Store<B>,
    window: ReportingWindow,
) -> Vec<ProjectSummary> {
    store
        .projects()
        .iter()
        .map(|project| {
            payroll::project_summary(project, store.employees(), store.attendance(), window)
        })
        .collect()
}

/// CSV export of the window's payroll, one row per employee, values exactly
/// as the engine produced them.
pub fn export_csv<B: StorageBackend>(
    session: &Session,
    store: &Store<B>,
    window: ReportingWindow,
) -> Result<String> {
    let rows = payroll_report(session, store, window)?;

    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "Employee",
        "Role",
        "Days Worked",
        "OT Hours",
        "Advances",
        "Net Payable",
    ])?;
    for row in &rows {
        writer.write_record([
            row.name.clone(),
            row.role.clone(),
            row.total_days.to_string(),
            row.total_overtime_hours.to_string(),
            row.total_advance.to_string(),
            row.net_payable.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| WfmError::Csv(e.into_error().into()))?;
    String::from_utf8(bytes).map_err(|e| WfmError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{ADMIN_USER_ID, Role};
    use crate::model::{
        AccessLevel, AttendanceEntry, AttendanceId, Employee, EmployeeId, Month, ProjectId,
    };
    use crate::storage::MemoryBackend;
    use chrono::{NaiveDate, Utc};

    fn admin() -> Session {
        Session {
            role: Role::Admin,
            user_id: ADMIN_USER_ID.to_string(),
            user_name: "Administrator".to_string(),
        }
    }

    fn seeded_store() -> Store<MemoryBackend> {
        let mut store = Store::open(MemoryBackend::default()).unwrap();
        store
            .add_employee(Employee {
                id: EmployeeId::from("emp1".to_string()),
                name: "Alice Smith".to_string(),
                role: "Installer".to_string(),
                monthly_salary: 24000.0,
                join_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                photo: None,
                access: AccessLevel::Staff,
                user_id: None,
                password: None,
            })
            .unwrap();
        store
            .add_attendance(AttendanceEntry {
                id: AttendanceId::generate(),
                employee_id: EmployeeId::from("emp1".to_string()),
                project_id: ProjectId::from("proj1".to_string()),
                date: NaiveDate::from_ymd_opt(2026, 5, 4).unwrap(),
                status: Default::default(),
                regular_hours: 8.0,
                overtime_hours: 2.0,
                created_at: Utc::now(),
                created_by: None,
            })
            .unwrap();
        store
    }

    #[test]
    fn test_report_is_gated_to_financial_roles() {
        let store = seeded_store();
        let supervisor = Session {
            role: Role::Supervisor,
            user_id: "sup-a".to_string(),
            user_name: "Supervisor".to_string(),
        };
        assert!(payroll_report(&supervisor, &store, ReportingWindow::AllTime).is_err());
        assert!(company_report(&supervisor, &store, ReportingWindow::AllTime).is_err());
        assert!(export_csv(&supervisor, &store, ReportingWindow::AllTime).is_err());
    }

    #[test]
    fn test_report_reflects_engine_figures() {
        let store = seeded_store();
        let window = ReportingWindow::Month(Month::new(2026, 5).unwrap());
        let rows = payroll_report(&admin(), &store, window).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total_earned, 1000.0);
        assert_eq!(rows[0].net_payable, 1000);
    }

    #[test]
    fn test_csv_layout_and_values() {
        let store = seeded_store();
        let csv = export_csv(&admin(), &store, ReportingWindow::AllTime).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Employee,Role,Days Worked,OT Hours,Advances,Net Payable"
        );
        assert_eq!(lines.next().unwrap(), "Alice Smith,Installer,1,2,0,1000");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_project_report_is_unscoped() {
        let mut store = seeded_store();
        store
            .add_project(crate::model::Project {
                id: ProjectId::from("proj1".to_string()),
                name: "Skyline Tower".to_string(),
                location: "Downtown".to_string(),
            })
            .unwrap();

        let summaries = project_report(&store, ReportingWindow::AllTime);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].total_hours, 10.0);
        assert_eq!(summaries[0].labor_cost, 1000.0);
    }
}
