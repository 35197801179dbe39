use chrono::Utc;
use tracing::info;

use crate::auth::Session;
use crate::error::{Result, WfmError};
use crate::model::{AdvanceEntry, AdvanceId};
use crate::models::NewAdvance;
use crate::policy;
use crate::storage::StorageBackend;
use crate::store::Store;

/// Record a cash advance.
///
/// The monthly cap is computed against the employee's current salary, so the
/// employee record must still exist. The check runs before the store is
/// touched.
pub fn create_advance<B: StorageBackend>(
    session: &Session,
    store: &mut Store<B>,
    req: NewAdvance,
) -> Result<AdvanceEntry> {
    if req.amount <= 0.0 {
        return Err(WfmError::Validation(
            "Advance amount must be positive".to_string(),
        ));
    }

    let employee = store
        .employee(&req.employee_id)
        .ok_or(WfmError::NotFound { entity: "Employee" })?
        .clone();
    policy::check_advance_cap(store.advances(), &employee, req.date, req.amount)?;

    let entry = AdvanceEntry {
        id: AdvanceId::generate(),
        employee_id: req.employee_id,
        amount: req.amount,
        date: req.date,
        reason: req.reason,
        created_at: Utc::now(),
        created_by: Some(session.user_id.clone()),
    };
    store.add_advance(entry.clone())?;
    info!(
        employee_id = %entry.employee_id,
        amount = entry.amount,
        date = %entry.date,
        "Advance recorded"
    );
    Ok(entry)
}

pub fn delete_advance<B: StorageBackend>(
    session: &Session,
    store: &mut Store<B>,
    id: &AdvanceId,
) -> Result<()> {
    session.require_admin()?;
    if !store.delete_advance(id)? {
        return Err(WfmError::NotFound {
            entity: "Advance entry",
        });
    }
    info!(entry_id = %id, "Advance entry deleted");
    Ok(())
}

/// Entries visible to the caller, newest first.
pub fn list_advances<'a, B: StorageBackend>(
    session: &Session,
    store: &'a Store<B>,
) -> Vec<&'a AdvanceEntry> {
    let mut entries: Vec<&AdvanceEntry> = store
        .advances()
        .iter()
        .filter(|e| session.can_view(e.created_by.as_deref()))
        .collect();
    entries.reverse();
    entries
}
