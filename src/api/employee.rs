use chrono::Utc;
use tracing::info;

use crate::auth::Session;
use crate::error::{Result, WfmError};
use crate::model::{AdvanceEntry, AdvanceId, Employee, EmployeeId};
use crate::models::{NewEmployee, UpdateEmployee};
use crate::policy;
use crate::storage::StorageBackend;
use crate::store::Store;

/// Create an employee. A positive initial advance is recorded against the
/// join date, subject to the monthly cap from day one.
pub fn create_employee<B: StorageBackend>(
    session: &Session,
    store: &mut Store<B>,
    req: NewEmployee,
) -> Result<Employee> {
    session.require_admin()?;

    if req.name.trim().is_empty() {
        return Err(WfmError::Validation(
            "Employee name must not be empty".to_string(),
        ));
    }

    let employee = Employee {
        id: EmployeeId::generate(),
        name: req.name,
        role: req.role,
        monthly_salary: req.monthly_salary,
        join_date: req.join_date,
        photo: req.photo,
        access: req.access,
        user_id: req.user_id,
        password: req.password,
    };

    let initial_advance = req.initial_advance.filter(|amount| *amount > 0.0);
    if let Some(amount) = initial_advance {
        // Checked before any record is written; a rejection must leave the
        // store untouched.
        policy::check_advance_cap(store.advances(), &employee, employee.join_date, amount)?;
    }

    store.add_employee(employee.clone())?;
    info!(employee_id = %employee.id, name = %employee.name, "Employee created");

    if let Some(amount) = initial_advance {
        let entry = AdvanceEntry {
            id: AdvanceId::generate(),
            employee_id: employee.id.clone(),
            amount,
            date: employee.join_date,
            reason: "Initial onboarding advance".to_string(),
            created_at: Utc::now(),
            created_by: Some(session.user_id.clone()),
        };
        store.add_advance(entry)?;
        info!(employee_id = %employee.id, amount, "Initial onboarding advance recorded");
    }

    Ok(employee)
}

pub fn update_employee<B: StorageBackend>(
    session: &Session,
    store: &mut Store<B>,
    id: &EmployeeId,
    req: UpdateEmployee,
) -> Result<()> {
    session.require_admin()?;

    let updated = store.update_employee(id, |employee| {
        if let Some(name) = req.name {
            employee.name = name;
        }
        if let Some(role) = req.role {
            employee.role = role;
        }
        if let Some(monthly_salary) = req.monthly_salary {
            employee.monthly_salary = monthly_salary;
        }
        if let Some(join_date) = req.join_date {
            employee.join_date = join_date;
        }
        if let Some(photo) = req.photo {
            employee.photo = Some(photo);
        }
        if let Some(access) = req.access {
            employee.access = access;
        }
        if let Some(user_id) = req.user_id {
            employee.user_id = Some(user_id);
        }
        if let Some(password) = req.password {
            employee.password = Some(password);
        }
    })?;

    if !updated {
        return Err(WfmError::NotFound { entity: "Employee" });
    }
    info!(employee_id = %id, "Employee updated");
    Ok(())
}

/// Existing attendance/advance entries keep referencing the deleted id and
/// degrade to "Unknown" at read time.
pub fn delete_employee<B: StorageBackend>(
    session: &Session,
    store: &mut Store<B>,
    id: &EmployeeId,
) -> Result<()> {
    session.require_admin()?;
    if !store.delete_employee(id)? {
        return Err(WfmError::NotFound { entity: "Employee" });
    }
    info!(employee_id = %id, "Employee deleted");
    Ok(())
}

pub fn list_employees<B: StorageBackend>(store: &Store<B>) -> &[Employee] {
    store.employees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{ADMIN_USER_ID, Role};
    use crate::model::AccessLevel;
    use crate::storage::MemoryBackend;
    use chrono::NaiveDate;

    fn admin() -> Session {
        Session {
            role: Role::Admin,
            user_id: ADMIN_USER_ID.to_string(),
            user_name: "Administrator".to_string(),
        }
    }

    fn supervisor() -> Session {
        Session {
            role: Role::Supervisor,
            user_id: "emp-s".to_string(),
            user_name: "John Doe".to_string(),
        }
    }

    fn new_employee(initial_advance: Option<f64>) -> NewEmployee {
        NewEmployee {
            name: "Alice Smith".to_string(),
            role: "Installer".to_string(),
            monthly_salary: 30000.0,
            join_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            photo: None,
            access: AccessLevel::Staff,
            user_id: None,
            password: None,
            initial_advance,
        }
    }

    fn empty_store() -> Store<MemoryBackend> {
        Store::open(MemoryBackend::default()).unwrap()
    }

    #[test]
    fn test_create_requires_admin() {
        let mut store = empty_store();
        let err = create_employee(&supervisor(), &mut store, new_employee(None)).unwrap_err();
        assert!(matches!(err, WfmError::Forbidden(_)));
        assert!(store.employees().is_empty());
    }

    #[test]
    fn test_create_records_initial_advance() {
        let mut store = empty_store();
        let employee = create_employee(&admin(), &mut store, new_employee(Some(5000.0))).unwrap();

        assert_eq!(store.employees().len(), 1);
        assert_eq!(store.advances().len(), 1);
        let advance = &store.advances()[0];
        assert_eq!(advance.employee_id, employee.id);
        assert_eq!(advance.amount, 5000.0);
        assert_eq!(advance.date, employee.join_date);
        assert_eq!(advance.reason, "Initial onboarding advance");
    }

    #[test]
    fn test_initial_advance_over_cap_rejects_whole_creation() {
        let mut store = empty_store();
        // cap = 15000 for a 30000 salary
        let err =
            create_employee(&admin(), &mut store, new_employee(Some(16000.0))).unwrap_err();
        assert!(matches!(err, WfmError::Validation(_)));
        assert!(store.employees().is_empty());
        assert!(store.advances().is_empty());
    }

    #[test]
    fn test_zero_initial_advance_records_nothing() {
        let mut store = empty_store();
        create_employee(&admin(), &mut store, new_employee(Some(0.0))).unwrap();
        assert!(store.advances().is_empty());
    }

    #[test]
    fn test_update_patches_selected_fields() {
        let mut store = empty_store();
        let employee = create_employee(&admin(), &mut store, new_employee(None)).unwrap();

        update_employee(
            &admin(),
            &mut store,
            &employee.id,
            UpdateEmployee {
                monthly_salary: Some(32000.0),
                access: Some(AccessLevel::Supervisor),
                ..Default::default()
            },
        )
        .unwrap();

        let updated = store.employee(&employee.id).unwrap();
        assert_eq!(updated.monthly_salary, 32000.0);
        assert_eq!(updated.access, AccessLevel::Supervisor);
        assert_eq!(updated.name, "Alice Smith");
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut store = empty_store();
        let err = update_employee(
            &admin(),
            &mut store,
            &EmployeeId::from("emp-missing".to_string()),
            UpdateEmployee::default(),
        )
        .unwrap_err();
        assert!(matches!(err, WfmError::NotFound { .. }));
    }

    #[test]
    fn test_delete_requires_admin() {
        let mut store = empty_store();
        let employee = create_employee(&admin(), &mut store, new_employee(None)).unwrap();

        assert!(delete_employee(&supervisor(), &mut store, &employee.id).is_err());
        delete_employee(&admin(), &mut store, &employee.id).unwrap();
        assert!(store.employees().is_empty());
    }
}
