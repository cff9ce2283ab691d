//! Building records from the external JSON ingestion source.
//!
//! The body text mirrors the structured fields in labeled-line form so
//! the fallback extractor can recover every value from the body alone.

use chrono::{DateTime, Utc};
use onebrain_core::{ProjectFields, ProjectRecord};
use serde::Deserialize;

/// One entry of the ingestion JSON file.
///
/// Everything is optional; entries without a non-empty project id are
/// skipped and reported by name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IngestEntry {
    pub project_id: Option<String>,
    pub customer_id: Option<String>,
    pub client_name: Option<String>,
    pub project_name: Option<String>,
    pub project_details: Option<String>,
    pub health: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<String>,
    pub developer_id: Option<String>,
    pub developer_name: Option<String>,
    pub last_interaction: Option<String>,
    pub last_updated: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Outcome of turning an ingestion batch into records.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub records: Vec<ProjectRecord>,
    /// Display names of entries skipped for lacking a project id.
    pub skipped: Vec<String>,
}

/// Build records for a whole batch, collecting skips.
#[must_use]
pub fn build_records(entries: Vec<IngestEntry>, now: DateTime<Utc>) -> IngestReport {
    let mut report = IngestReport::default();
    for entry in entries {
        let name = entry
            .project_name
            .clone()
            .unwrap_or_else(|| "unnamed".to_string());
        match build_record(entry, now) {
            Some(record) => report.records.push(record),
            None => report.skipped.push(name),
        }
    }
    report
}

/// Build one record from an entry.
///
/// `None` when the project id is missing or empty. `now` supplies the
/// default last-updated stamp (ISO-8601, UTC).
#[must_use]
pub fn build_record(entry: IngestEntry, now: DateTime<Utc>) -> Option<ProjectRecord> {
    let project_id = entry
        .project_id
        .as_deref()
        .filter(|id| !id.is_empty())?
        .to_string();
    let body = body_text(&project_id, &entry, now);
    let fields = ProjectFields {
        project_id: Some(project_id),
        customer_id: entry.customer_id,
        project_name: Some(entry.project_name.unwrap_or_else(|| "Unnamed".to_string())),
        client_name: Some(entry.client_name.unwrap_or_else(|| "Unknown".to_string())),
        developer_id: entry.developer_id,
        developer_name: Some(
            entry
                .developer_name
                .unwrap_or_else(|| "Unassigned".to_string()),
        ),
        health: Some(entry.health.unwrap_or_else(|| "Unknown".to_string())),
        priority: Some(entry.priority.unwrap_or_else(|| "Medium".to_string())),
        due_date: entry.due_date,
        last_updated: Some(entry.last_updated.unwrap_or_else(|| now.to_rfc3339())),
        tags: entry.tags,
    };
    Some(ProjectRecord { fields, body })
}

fn body_text(project_id: &str, entry: &IngestEntry, now: DateTime<Utc>) -> String {
    let mut lines = vec![
        format!("Project ID: {project_id}"),
        format!("Customer ID: {}", entry.customer_id.as_deref().unwrap_or("—")),
        format!("Client: {}", entry.client_name.as_deref().unwrap_or("Unknown")),
        format!(
            "Project Name: {}",
            entry.project_name.as_deref().unwrap_or("Unnamed")
        ),
        format!(
            "Details: {}",
            entry
                .project_details
                .as_deref()
                .unwrap_or("No details provided")
        ),
        format!(
            "Status & Health: {}",
            entry.health.as_deref().unwrap_or("Unknown")
        ),
        format!("Priority: {}", entry.priority.as_deref().unwrap_or("Medium")),
        format!(
            "Due Date: {}",
            entry.due_date.as_deref().unwrap_or("Not set")
        ),
        format!(
            "Assigned Developer: {} ({})",
            entry.developer_name.as_deref().unwrap_or("Unassigned"),
            entry.developer_id.as_deref().unwrap_or("—")
        ),
        format!(
            "Last Interaction: {}",
            entry
                .last_interaction
                .as_deref()
                .unwrap_or("No recent activity")
        ),
        format!(
            "Last Updated: {}",
            entry
                .last_updated
                .clone()
                .unwrap_or_else(|| now.to_rfc3339())
        ),
    ];
    if !entry.tags.is_empty() {
        lines.push(format!("Tags: {}", entry.tags.join(", ")));
    }
    lines.join("\n")
}
