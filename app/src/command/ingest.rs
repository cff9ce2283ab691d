//! One-shot ingestion of a JSON file into the index.

use std::path::PathBuf;

use chrono::Utc;
use onebrain_core::VectorIndex;
use onebrain_records::{IngestEntry, build_records};
use tracing::{info, warn};

use super::init_components;

/// Input parameters for the Ingest command strategy.
#[derive(Debug, Clone)]
pub struct IngestInput {
    /// Path to the JSON file
    pub file: PathBuf,
}

/// Strategy for executing the Ingest command.
///
/// Entries without a project id are skipped and reported; everything
/// else is upserted under its project id, so re-running refreshes the
/// stored records in place.
#[derive(Debug, Clone, Copy)]
pub struct IngestStrategy;

impl super::CommandStrategy for IngestStrategy {
    type Input = IngestInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let content = std::fs::read_to_string(&input.file)?;
        let entries: Vec<IngestEntry> = serde_json::from_str(&content)?;

        let report = build_records(entries, Utc::now());
        for name in &report.skipped {
            warn!("Skipping entry without project_id: {name}");
        }
        if report.records.is_empty() {
            println!("No valid projects to ingest.");
            return Ok(());
        }

        let common = init_components()?;
        info!("Adding/Upserting {} project vectors...", report.records.len());

        let mut stored = 0_usize;
        for record in &report.records {
            let id = record.fields.project_id.as_deref().unwrap_or("—");
            let name = record.fields.project_name.as_deref().unwrap_or("Unnamed");
            info!("→ {id} | {name}");
            match common.resolver.index().upsert(record).await {
                Ok(()) => stored += 1,
                Err(e) => warn!("Failed to store {id}: {e}"),
            }
        }

        println!("Successfully added/updated {stored} projects.");
        println!("Ingestion complete.");
        Ok(())
    }
}
