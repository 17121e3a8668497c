use crate::domain::ids::ProjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Root of a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(id: ProjectId, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            description: None,
            created_at,
        }
    }
}
