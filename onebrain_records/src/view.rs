//! Merged display view over a stored record.
//!
//! Structured fields win; body extraction fills the gaps; the
//! workspace's placeholder defaults cover whatever is left.

use onebrain_core::{ActivityEntry, ProjectRecord};

use crate::extract::FieldPatterns;

/// Display-ready values for one record.
#[derive(Debug, Clone)]
pub struct RecordView {
    pub project_id: String,
    pub project_name: String,
    pub client_name: String,
    pub developer_name: String,
    pub developer_id: String,
    pub customer_id: String,
    pub health: String,
    pub priority: String,
    pub due_date: String,
    pub details: String,
    pub activities: Vec<ActivityEntry>,
}

impl RecordView {
    #[must_use]
    pub fn from_record(record: &ProjectRecord, patterns: &FieldPatterns) -> Self {
        let fields = &record.fields;
        let body = &record.body;
        Self {
            project_id: resolved_id(record, patterns),
            project_name: fields
                .project_name
                .clone()
                .or_else(|| patterns.project_name(body))
                .unwrap_or_else(placeholder),
            client_name: fields
                .client_name
                .clone()
                .or_else(|| patterns.client(body))
                .unwrap_or_else(placeholder),
            developer_name: fields
                .developer_name
                .clone()
                .or_else(|| patterns.developer_name(body))
                .unwrap_or_else(|| "Unassigned".to_string()),
            developer_id: fields
                .developer_id
                .clone()
                .or_else(|| patterns.developer_id(body))
                .unwrap_or_else(placeholder),
            customer_id: fields
                .customer_id
                .clone()
                .or_else(|| patterns.customer_id(body))
                .unwrap_or_else(placeholder),
            health: fields
                .health
                .clone()
                .or_else(|| patterns.health(body))
                .unwrap_or_else(|| "Unknown".to_string()),
            priority: fields
                .priority
                .clone()
                .or_else(|| patterns.priority(body))
                .unwrap_or_else(placeholder),
            due_date: fields
                .due_date
                .clone()
                .or_else(|| patterns.due_date(body))
                .unwrap_or_else(|| "Not set".to_string()),
            details: patterns
                .details(body)
                .unwrap_or_else(|| "No details available".to_string()),
            activities: patterns.activities(body),
        }
    }
}

/// The identity a record resolves to: the structured project id, else
/// the id mined from the body, else a placeholder. Also the dedup key
/// for multi-result presentation.
#[must_use]
pub fn resolved_id(record: &ProjectRecord, patterns: &FieldPatterns) -> String {
    record
        .fields
        .project_id
        .clone()
        .or_else(|| patterns.project_id(&record.body))
        .unwrap_or_else(placeholder)
}

fn placeholder() -> String {
    "—".to_string()
}
