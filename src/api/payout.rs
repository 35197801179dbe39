use chrono::Utc;
use tracing::info;

use crate::auth::Session;
use crate::error::{Result, WfmError};
use crate::model::{PayoutEntry, PayoutId};
use crate::models::NewPayout;
use crate::storage::StorageBackend;
use crate::store::Store;

/// Disburse a payment against a payroll month. Admin only.
///
/// Several payouts may target the same employee and month; they accumulate
/// into the month's `already_paid` figure.
pub fn create_payout<B: StorageBackend>(
    session: &Session,
    store: &mut Store<B>,
    req: NewPayout,
) -> Result<PayoutEntry> {
    session.require_admin()?;

    if req.amount <= 0.0 {
        return Err(WfmError::Validation(
            "Payout amount must be positive".to_string(),
        ));
    }

    let entry = PayoutEntry {
        id: PayoutId::generate(),
        employee_id: req.employee_id,
        amount: req.amount,
        date: req.date,
        month: req.month,
        mode: req.mode,
        reference: req.reference,
        created_at: Utc::now(),
    };
    store.add_payout(entry.clone())?;
    info!(
        employee_id = %entry.employee_id,
        amount = entry.amount,
        month = %entry.month,
        mode = %entry.mode,
        "Salary disbursed"
    );
    Ok(entry)
}

pub fn delete_payout<B: StorageBackend>(
    session: &Session,
    store: &mut Store<B>,
    id: &PayoutId,
) -> Result<()> {
    session.require_admin()?;
    if !store.delete_payout(id)? {
        return Err(WfmError::NotFound {
            entity: "Payout entry",
        });
    }
    info!(entry_id = %id, "Payout entry deleted");
    Ok(())
}

/// Payout history, newest first. Financial data: admin and manager only.
pub fn list_payouts<'a, B: StorageBackend>(
    session: &Session,
    store: &'a Store<B>,
) -> Result<Vec<&'a PayoutEntry>> {
    session.require_manager_or_admin()?;
    let mut entries: Vec<&PayoutEntry> = store.payouts().iter().collect();
    entries.reverse();
    Ok(entries)
}
