//! Lookup view: find a project, customer, or developer by id or
//! keyword and render the matching records.

use onebrain_core::Error;
use onebrain_records::RecordView;
use tracing::{debug, info};

use super::init_components;

/// Input parameters for the Query command strategy.
#[derive(Debug, Clone)]
pub struct QueryInput {
    /// ID or keyword to search for
    pub term: String,
}

/// Strategy for executing the Query command.
///
/// Resolves the term through the layered fallback (exact id, then
/// filtered semantic search) and prints one card per matching record.
#[derive(Debug, Clone, Copy)]
pub struct QueryStrategy;

impl super::CommandStrategy for QueryStrategy {
    type Input = QueryInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let common = init_components()?;
        let resolver = &common.resolver;

        // sidebar conveniences; absence is fine, failure is not hidden
        match resolver.recent_activity().await {
            Ok(recent) if !recent.is_empty() => {
                println!("Recent Activity");
                for record in &recent {
                    let name = record.fields.project_name.as_deref().unwrap_or("—");
                    let updated = record.fields.last_updated.as_deref().unwrap_or("—");
                    let day: String = updated.chars().take(10).collect();
                    println!("  {name} • {day}");
                }
                println!();
            }
            Ok(_) => {}
            Err(e) => debug!("No recent data available: {e}"),
        }

        match resolver.known_ids().await {
            Ok(ids) if !ids.is_empty() => {
                println!("Known project IDs in store: {}", ids.join(", "));
                println!();
            }
            Ok(_) => {}
            Err(e) => debug!("Could not list known ids: {e}"),
        }

        let records = match resolver.resolve_query(&input.term).await {
            Ok(records) => records,
            Err(Error::NotFound { tried }) => {
                println!(
                    "No matches for '{}' (tried: {})",
                    input.term,
                    tried.join(", ")
                );
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

        for record in &records {
            print_card(&RecordView::from_record(record, resolver.patterns()));
        }
        Ok(())
    }
}

fn print_card(view: &RecordView) {
    println!("{}  ({})", view.project_name, view.project_id);
    println!(
        "  {} • {} • {} ({})",
        view.client_name, view.customer_id, view.developer_name, view.developer_id
    );
    println!(
        "  Health: {}  Priority: {}  Due: {}",
        view.health, view.priority, view.due_date
    );
    println!("  Details: {}", view.details);
    if view.activities.is_empty() {
        println!("  No inbox activities added yet.");
    } else {
        println!("  Activity History:");
        for entry in &view.activities {
            println!("    [{}] {}", entry.timestamp, entry.text);
        }
    }
    println!();
}
