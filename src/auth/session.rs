use strum::Display;

use crate::error::{Result, WfmError};

/// Sentinel user id for the global administrator credential. The admin is
/// not an employee record.
pub const ADMIN_USER_ID: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Supervisor,
}

/// An authenticated session, passed into every operation for scoping.
#[derive(Debug, Clone)]
pub struct Session {
    pub role: Role,
    /// The admin sentinel id, or the employee id for staff logins. Entry
    /// `created_by` fields hold this value.
    pub user_id: String,
    pub user_name: String,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn require_admin(&self) -> Result<()> {
        if self.role == Role::Admin {
            Ok(())
        } else {
            Err(WfmError::Forbidden("admin only"))
        }
    }

    pub fn require_manager_or_admin(&self) -> Result<()> {
        if matches!(self.role, Role::Admin | Role::Manager) {
            Ok(())
        } else {
            Err(WfmError::Forbidden("manager/admin only"))
        }
    }

    /// The uniform visibility rule: admins and managers see every entry,
    /// supervisors only those they created themselves.
    pub fn can_view(&self, created_by: Option<&str>) -> bool {
        match self.role {
            Role::Admin | Role::Manager => true,
            Role::Supervisor => created_by == Some(self.user_id.as_str()),
        }
    }
}
