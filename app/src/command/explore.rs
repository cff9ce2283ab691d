//! Explore view: list projects grouped by customer or developer id.

use clap::ValueEnum;
use onebrain_core::{Error, IndexField};
use onebrain_records::RecordView;
use tracing::info;

use super::init_components;

/// Field the explore listing groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupBy {
    Customer,
    Developer,
}

impl GroupBy {
    const fn field(self) -> IndexField {
        match self {
            Self::Customer => IndexField::CustomerId,
            Self::Developer => IndexField::DeveloperId,
        }
    }
}

// clap needs Display for default_value_t; keep it in sync with the
// ValueEnum variant names
impl std::fmt::Display for GroupBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Developer => write!(f, "developer"),
        }
    }
}

/// Input parameters for the Explore command strategy.
#[derive(Debug, Clone)]
pub struct ExploreInput {
    /// Field to group by
    pub by: GroupBy,
    /// ID or name fragment
    pub term: String,
}

/// Strategy for executing the Explore command.
///
/// Tries an exact field filter first, then falls back to an
/// unconstrained semantic search.
#[derive(Debug, Clone, Copy)]
pub struct ExploreStrategy;

impl super::CommandStrategy for ExploreStrategy {
    type Input = ExploreInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let common = init_components()?;
        let resolver = &common.resolver;

        let records = match resolver
            .resolve_by_field(input.by.field(), &input.term)
            .await
        {
            Ok(records) => records,
            Err(Error::EmptyInput(what)) => {
                println!("{what} is required");
                return Ok(());
            }
            Err(Error::Unavailable(e)) => {
                info!("Search backend unavailable: {e}");
                println!("No data available");
                return Ok(());
            }
            Err(e @ Error::NotFound { .. }) => return Err(e.into()),
        };

        if records.is_empty() {
            println!("No projects found for '{}'", input.term);
            return Ok(());
        }

        for record in &records {
            let view = RecordView::from_record(record, resolver.patterns());
            println!("{} ({})", view.project_name, view.project_id);
            println!(
                "  Health: {} • Priority: {} • Due: {}",
                view.health, view.priority, view.due_date
            );
            println!("  Developer: {}", view.developer_name);
            println!();
        }
        Ok(())
    }
}
