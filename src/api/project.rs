use tracing::info;

use crate::auth::Session;
use crate::error::{Result, WfmError};
use crate::model::{Project, ProjectId};
use crate::models::NewProject;
use crate::storage::StorageBackend;
use crate::store::Store;

pub fn create_project<B: StorageBackend>(
    session: &Session,
    store: &mut Store<B>,
    req: NewProject,
) -> Result<Project> {
    session.require_admin()?;

    if req.name.trim().is_empty() {
        return Err(WfmError::Validation(
            "Project name must not be empty".to_string(),
        ));
    }

    let project = Project {
        id: ProjectId::generate(),
        name: req.name,
        location: req.location,
    };
    store.add_project(project.clone())?;
    info!(project_id = %project.id, name = %project.name, "Project created");
    Ok(project)
}

/// Attendance logged against the project keeps its reference and degrades to
/// "Unknown" at read time.
pub fn delete_project<B: StorageBackend>(
    session: &Session,
    store: &mut Store<B>,
    id: &ProjectId,
) -> Result<()> {
    session.require_admin()?;
    if !store.delete_project(id)? {
        return Err(WfmError::NotFound { entity: "Project" });
    }
    info!(project_id = %id, "Project deleted");
    Ok(())
}

pub fn list_projects<B: StorageBackend>(store: &Store<B>) -> &[Project] {
    store.projects()
}
