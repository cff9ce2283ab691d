//! Inbox view: append a note, email, or chat snippet to a project's
//! activity log.

use chrono::Local;
use onebrain_core::{Error, VectorIndex};
use onebrain_records::append_activity;
use tracing::info;

use super::init_components;

/// Input parameters for the Inbox command strategy.
#[derive(Debug, Clone)]
pub struct InboxInput {
    /// Project ID the note belongs to
    pub project_id: String,
    /// Content to append
    pub note: String,
}

/// Strategy for executing the Inbox command.
///
/// Resolves the project by exact lookup across every id variant, then
/// appends a timestamped activity block and upserts the record under
/// the same id.
#[derive(Debug, Clone, Copy)]
pub struct InboxStrategy;

impl super::CommandStrategy for InboxStrategy {
    type Input = InboxInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        if input.project_id.trim().is_empty() || input.note.trim().is_empty() {
            println!("Project ID and content are required.");
            return Ok(());
        }

        let common = init_components()?;
        let resolver = &common.resolver;

        let current = match resolver.find_exact(&input.project_id).await {
            Ok(current) => current,
            Err(Error::NotFound { tried }) => {
                println!("Project not found");
                println!("Tried IDs: {}", tried.join(", "));
                println!("Copy the exact 'Project ID:' value from the query output");
                return Ok(());
            }
            Err(Error::Unavailable(e)) => {
                info!("Search backend unavailable: {e}");
                println!("No data available");
                return Ok(());
            }
            Err(e @ Error::EmptyInput(_)) => {
                println!("{e}");
                return Ok(());
            }
        };

        let now = Local::now().naive_local();
        let updated = append_activity(&current, &input.note, now)?;

        if let Err(e) = resolver.index().upsert(&updated).await {
            info!("Upsert failed: {e}");
            println!("No data available; the update was not stored.");
            return Ok(());
        }

        let id = updated.fields.project_id.as_deref().unwrap_or("—");
        println!("Added to {id}");
        println!("Just added:\n{}", input.note.trim());
        info!("New length: {} chars", updated.body.len());
        Ok(())
    }
}
