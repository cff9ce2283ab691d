use serde::{Deserialize, Serialize};

/// Structured metadata for a stored project.
///
/// Any member may be absent; when present it is authoritative over the
/// labeled lines in the text body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// The unit of storage: structured fields plus a free-form text body.
///
/// The body duplicates the fields in human-readable labeled-line form
/// and is the only home of the append-only activity log. Records are
/// never edited in place and never deleted; the sole mutation is
/// appending an activity block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub fields: ProjectFields,
    pub body: String,
}

impl ProjectRecord {
    #[must_use]
    pub const fn new(fields: ProjectFields, body: String) -> Self {
        Self { fields, body }
    }
}

/// A single timestamped note recovered from a record body.
///
/// Entries are ordered by append position, which is implicitly
/// chronological.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    /// Minute-precision stamp as written in the marker line.
    pub timestamp: String,
    /// Trimmed note text between this marker and the next.
    pub text: String,
}
