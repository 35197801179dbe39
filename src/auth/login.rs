use tracing::{info, instrument};

use crate::auth::session::{ADMIN_USER_ID, Role, Session};
use crate::error::{Result, WfmError};
use crate::model::AccessLevel;
use crate::models::LoginRequest;
use crate::storage::StorageBackend;
use crate::store::Store;

/// Resolves a credential pair to a session.
///
/// The admin sentinel is checked against the stored admin password first;
/// otherwise the pair must match a supervisor or manager employee record
/// exactly (plain equality). Unknown user and wrong password both produce
/// the same generic error so accounts cannot be enumerated.
#[instrument(name = "auth_login", skip(store, req), fields(user_id = %req.user_id))]
pub fn login<B: StorageBackend>(store: &Store<B>, req: &LoginRequest) -> Result<Session> {
    info!("Login request received");

    if req.user_id.trim().is_empty() || req.password.is_empty() {
        return Err(WfmError::Validation(
            "User id and password must not be empty".to_string(),
        ));
    }

    if req.user_id == ADMIN_USER_ID && req.password == store.admin_password()? {
        info!("Admin login succeeded");
        return Ok(Session {
            role: Role::Admin,
            user_id: ADMIN_USER_ID.to_string(),
            user_name: "Administrator".to_string(),
        });
    }

    let staff = store.employees().iter().find(|e| {
        e.access.can_login()
            && e.user_id.as_deref() == Some(req.user_id.as_str())
            && e.password.as_deref() == Some(req.password.as_str())
    });

    match staff {
        Some(employee) => {
            let role = if employee.access == AccessLevel::Manager {
                Role::Manager
            } else {
                Role::Supervisor
            };
            info!(role = %role, "Staff login succeeded");
            Ok(Session {
                role,
                user_id: employee.id.to_string(),
                user_name: employee.name.clone(),
            })
        }
        None => Err(WfmError::InvalidCredentials),
    }
}
