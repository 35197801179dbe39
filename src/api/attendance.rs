use chrono::{Local, NaiveDate, Utc};
use tracing::info;

use crate::auth::{Role, Session};
use crate::error::{Result, WfmError};
use crate::model::{AttendanceEntry, AttendanceId};
use crate::models::NewAttendance;
use crate::policy;
use crate::storage::StorageBackend;
use crate::store::Store;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Log a day's attendance.
///
/// The duplicate check runs against every existing entry, across creators,
/// before the store is touched. Supervisors may only log for the current
/// date.
pub fn create_attendance<B: StorageBackend>(
    session: &Session,
    store: &mut Store<B>,
    req: NewAttendance,
) -> Result<AttendanceEntry> {
    if req.regular_hours < 0.0 || req.overtime_hours < 0.0 {
        return Err(WfmError::Validation(
            "Hours must not be negative".to_string(),
        ));
    }

    if session.role == Role::Supervisor && req.date != today() {
        return Err(WfmError::Validation(
            "Attendance can only be logged for the current date".to_string(),
        ));
    }

    policy::check_duplicate_attendance(
        store.attendance(),
        store.employees(),
        &req.employee_id,
        req.date,
    )?;

    let entry = AttendanceEntry {
        id: AttendanceId::generate(),
        employee_id: req.employee_id,
        project_id: req.project_id,
        date: req.date,
        status: req.status,
        regular_hours: req.regular_hours,
        overtime_hours: req.overtime_hours,
        created_at: Utc::now(),
        created_by: Some(session.user_id.clone()),
    };
    store.add_attendance(entry.clone())?;
    info!(
        employee_id = %entry.employee_id,
        date = %entry.date,
        regular_hours = entry.regular_hours,
        overtime_hours = entry.overtime_hours,
        "Attendance logged"
    );
    Ok(entry)
}

pub fn delete_attendance<B: StorageBackend>(
    session: &Session,
    store: &mut Store<B>,
    id: &AttendanceId,
) -> Result<()> {
    session.require_admin()?;
    if !store.delete_attendance(id)? {
        return Err(WfmError::NotFound {
            entity: "Attendance entry",
        });
    }
    info!(entry_id = %id, "Attendance entry deleted");
    Ok(())
}

/// Entries visible to the caller, newest first.
pub fn list_attendance<'a, B: StorageBackend>(
    session: &Session,
    store: &'a Store<B>,
) -> Vec<&'a AttendanceEntry> {
    let mut entries: Vec<&AttendanceEntry> = store
        .attendance()
        .iter()
        .filter(|e| session.can_view(e.created_by.as_deref()))
        .collect();
    entries.reverse();
    entries
}
