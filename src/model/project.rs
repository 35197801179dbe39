use serde::{Deserialize, Serialize};

use super::ids::ProjectId;

/// A work site. Purely a tagging dimension for attendance; no state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub location: String,
}
