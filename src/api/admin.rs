//! Administrative operations: password rotation, integrity scans, and the
//! AI audit trigger.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::info;

use crate::audit::{AuditReport, GeminiAuditor};
use crate::auth::Session;
use crate::error::{Result, WfmError};
use crate::model::{AttendanceId, EmployeeId, ProjectId};
use crate::models::ChangePassword;
use crate::storage::StorageBackend;
use crate::store::Store;

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn change_admin_password<B: StorageBackend>(
    session: &Session,
    store: &mut Store<B>,
    req: &ChangePassword,
) -> Result<()> {
    session.require_admin()?;

    if req.current_password != store.admin_password()? {
        return Err(WfmError::Validation(
            "Current password is incorrect.".to_string(),
        ));
    }
    if req.new_password != req.confirm_password {
        return Err(WfmError::Validation(
            "New passwords do not match.".to_string(),
        ));
    }
    if req.new_password.len() < MIN_PASSWORD_LEN {
        return Err(WfmError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long."
        )));
    }

    store.set_admin_password(&req.new_password)?;
    info!("Admin password updated");
    Ok(())
}

/// Attendance entries sharing (employee, date, project), surfaced for manual
/// cleanup. Such groups predate the duplicate validator or were edited
/// around it; the validator itself never lets new ones in.
#[derive(Debug, Clone)]
pub struct RepeatedEntries {
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub project_id: ProjectId,
    pub entry_ids: Vec<AttendanceId>,
}

pub fn repeated_entries<B: StorageBackend>(
    session: &Session,
    store: &Store<B>,
) -> Result<Vec<RepeatedEntries>> {
    session.require_admin()?;

    let mut groups: HashMap<(EmployeeId, NaiveDate, ProjectId), Vec<AttendanceId>> =
        HashMap::new();
    for entry in store.attendance() {
        groups
            .entry((
                entry.employee_id.clone(),
                entry.date,
                entry.project_id.clone(),
            ))
            .or_default()
            .push(entry.id.clone());
    }

    Ok(groups
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|((employee_id, date, project_id), entry_ids)| RepeatedEntries {
            employee_id,
            date,
            project_id,
            entry_ids,
        })
        .collect())
}

/// Ships the full collections to the audit service and waits for its
/// verdict. Admin only; managers have no audit panel.
///
/// The call has no timeout and is never retried; a failure is reported
/// as-is and the user re-triggers manually.
pub async fn run_audit<B: StorageBackend>(
    session: &Session,
    store: &Store<B>,
    auditor: &GeminiAuditor,
) -> Result<AuditReport> {
    session.require_admin()?;
    info!("AI audit started");
    let report = auditor
        .audit(
            store.employees(),
            store.projects(),
            store.attendance(),
            store.advances(),
        )
        .await?;
    info!(findings = report.findings.len(), "AI audit finished");
    Ok(report)
}
