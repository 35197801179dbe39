//! The record store: five collections held in memory and mirrored wholesale
//! to a storage backend on every mutation.
//!
//! Single writer, last-writer-wins. No locking, no transactions; concurrent
//! sessions against the same backend are unsupported and may lose writes.

use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::Result;
use crate::model::{
    AccessLevel, AdvanceEntry, AdvanceId, AttendanceEntry, AttendanceId, Employee, EmployeeId,
    PayoutEntry, PayoutId, Project, ProjectId, UNKNOWN_LABEL,
};
use crate::storage::{FileBackend, StorageBackend, keys};

pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

pub struct Store<B: StorageBackend> {
    backend: B,
    employees: Vec<Employee>,
    projects: Vec<Project>,
    attendance: Vec<AttendanceEntry>,
    advances: Vec<AdvanceEntry>,
    payouts: Vec<PayoutEntry>,
}

fn load<B: StorageBackend, T: DeserializeOwned>(backend: &B, key: &str) -> Result<Vec<T>> {
    match backend.read(key)? {
        Some(data) => Ok(serde_json::from_str(&data)?),
        None => Ok(Vec::new()),
    }
}

fn save<B: StorageBackend, T: Serialize>(backend: &mut B, key: &str, items: &[T]) -> Result<()> {
    backend.write(key, &serde_json::to_string(items)?)
}

impl Store<FileBackend> {
    /// Opens the store over the configured data directory.
    pub fn open_dir(config: &Config) -> Result<Self> {
        Store::open(FileBackend::new(config.data_dir.as_str())?)
    }
}

impl<B: StorageBackend> Store<B> {
    /// Reads every collection out of the backend. Missing keys load as empty
    /// collections.
    pub fn open(backend: B) -> Result<Self> {
        let employees = load(&backend, keys::EMPLOYEES)?;
        let projects = load(&backend, keys::PROJECTS)?;
        let attendance = load(&backend, keys::ATTENDANCE)?;
        let advances = load(&backend, keys::ADVANCES)?;
        let payouts = load(&backend, keys::PAYOUTS)?;

        Ok(Self {
            backend,
            employees,
            projects,
            attendance,
            advances,
            payouts,
        })
    }

    /// Installs the default roster and project list on a blank backend, as
    /// the first session does. Returns whether anything was seeded.
    pub fn bootstrap_defaults(&mut self) -> Result<bool> {
        if !self.employees.is_empty() || !self.projects.is_empty() {
            return Ok(false);
        }
        self.employees = default_employees();
        self.projects = default_projects();
        save(&mut self.backend, keys::EMPLOYEES, &self.employees)?;
        save(&mut self.backend, keys::PROJECTS, &self.projects)?;
        Ok(true)
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn attendance(&self) -> &[AttendanceEntry] {
        &self.attendance
    }

    pub fn advances(&self) -> &[AdvanceEntry] {
        &self.advances
    }

    pub fn payouts(&self) -> &[PayoutEntry] {
        &self.payouts
    }

    pub fn employee(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == *id)
    }

    pub fn project(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == *id)
    }

    /// Resolve-or-default: deleted employees render as "Unknown".
    pub fn employee_name(&self, id: &EmployeeId) -> &str {
        self.employee(id).map_or(UNKNOWN_LABEL, |e| e.name.as_str())
    }

    /// Resolve-or-default: deleted projects render as "Unknown".
    pub fn project_name(&self, id: &ProjectId) -> &str {
        self.project(id).map_or(UNKNOWN_LABEL, |p| p.name.as_str())
    }

    pub fn add_employee(&mut self, employee: Employee) -> Result<()> {
        self.employees.push(employee);
        save(&mut self.backend, keys::EMPLOYEES, &self.employees)
    }

    /// Applies `patch` to the matching employee. Returns false when no record
    /// matches.
    pub fn update_employee(
        &mut self,
        id: &EmployeeId,
        patch: impl FnOnce(&mut Employee),
    ) -> Result<bool> {
        match self.employees.iter_mut().find(|e| e.id == *id) {
            Some(employee) => {
                patch(employee);
                save(&mut self.backend, keys::EMPLOYEES, &self.employees)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Entries referencing the employee are kept and degrade to "Unknown" at
    /// read time.
    pub fn delete_employee(&mut self, id: &EmployeeId) -> Result<bool> {
        let before = self.employees.len();
        self.employees.retain(|e| e.id != *id);
        if self.employees.len() == before {
            return Ok(false);
        }
        save(&mut self.backend, keys::EMPLOYEES, &self.employees)?;
        Ok(true)
    }

    pub fn add_project(&mut self, project: Project) -> Result<()> {
        self.projects.push(project);
        save(&mut self.backend, keys::PROJECTS, &self.projects)
    }

    pub fn delete_project(&mut self, id: &ProjectId) -> Result<bool> {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != *id);
        if self.projects.len() == before {
            return Ok(false);
        }
        save(&mut self.backend, keys::PROJECTS, &self.projects)?;
        Ok(true)
    }

    pub fn add_attendance(&mut self, entry: AttendanceEntry) -> Result<()> {
        self.attendance.push(entry);
        save(&mut self.backend, keys::ATTENDANCE, &self.attendance)
    }

    pub fn delete_attendance(&mut self, id: &AttendanceId) -> Result<bool> {
        let before = self.attendance.len();
        self.attendance.retain(|a| a.id != *id);
        if self.attendance.len() == before {
            return Ok(false);
        }
        save(&mut self.backend, keys::ATTENDANCE, &self.attendance)?;
        Ok(true)
    }

    pub fn add_advance(&mut self, entry: AdvanceEntry) -> Result<()> {
        self.advances.push(entry);
        save(&mut self.backend, keys::ADVANCES, &self.advances)
    }

    pub fn delete_advance(&mut self, id: &AdvanceId) -> Result<bool> {
        let before = self.advances.len();
        self.advances.retain(|a| a.id != *id);
        if self.advances.len() == before {
            return Ok(false);
        }
        save(&mut self.backend, keys::ADVANCES, &self.advances)?;
        Ok(true)
    }

    pub fn add_payout(&mut self, entry: PayoutEntry) -> Result<()> {
        self.payouts.push(entry);
        save(&mut self.backend, keys::PAYOUTS, &self.payouts)
    }

    pub fn delete_payout(&mut self, id: &PayoutId) -> Result<bool> {
        let before = self.payouts.len();
        self.payouts.retain(|p| p.id != *id);
        if self.payouts.len() == before {
            return Ok(false);
        }
        save(&mut self.backend, keys::PAYOUTS, &self.payouts)?;
        Ok(true)
    }

    /// The stored admin password, falling back to the factory default.
    pub fn admin_password(&self) -> Result<String> {
        match self.backend.read(keys::ADMIN_PASSWORD)? {
            Some(data) => Ok(serde_json::from_str(&data)?),
            None => Ok(DEFAULT_ADMIN_PASSWORD.to_string()),
        }
    }

    pub fn set_admin_password(&mut self, password: &str) -> Result<()> {
        self.backend
            .write(keys::ADMIN_PASSWORD, &serde_json::to_string(password)?)
    }
}

fn seed_employee(
    id: &str,
    name: &str,
    role: &str,
    monthly_salary: f64,
    join_date: NaiveDate,
    access: AccessLevel,
) -> Employee {
    Employee {
        id: EmployeeId::from(id.to_string()),
        name: name.to_string(),
        role: role.to_string(),
        monthly_salary,
        join_date,
        photo: None,
        access,
        user_id: None,
        password: None,
    }
}

fn default_employees() -> Vec<Employee> {
    let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
    vec![
        seed_employee("emp1", "John Doe", "Foreman", 45000.0, d(2023, 1, 1), AccessLevel::Supervisor),
        seed_employee("emp2", "Alice Smith", "Installer", 30000.0, d(2023, 3, 15), AccessLevel::Staff),
        seed_employee("emp3", "Bob Johnson", "Glass Cutter", 35000.0, d(2023, 5, 20), AccessLevel::Staff),
        seed_employee("emp4", "Sarah Wilson", "Technician", 28000.0, d(2023, 6, 10), AccessLevel::Staff),
    ]
}

fn default_projects() -> Vec<Project> {
    let seed = |id: &str, name: &str, location: &str| Project {
        id: ProjectId::from(id.to_string()),
        name: name.to_string(),
        location: location.to_string(),
    };
    vec![
        seed("proj1", "Skyline Tower", "Downtown"),
        seed("proj2", "Marina Bay Hotel", "Coastal Area"),
        seed("proj3", "Tech Park Plaza", "Suburb"),
    ]
}
