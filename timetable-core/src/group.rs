//! Study groups.

use serde::{Deserialize, Serialize};

/// Opaque identifier of a study group (e.g. "ИВТ-21").
pub type GroupId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl Group {
    /// Match by id, or by display name ignoring case.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.id == query || self.name.to_lowercase() == query.to_lowercase()
    }
}
