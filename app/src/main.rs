#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    CommandStrategy, ExploreInput, ExploreStrategy, GroupBy, InboxInput, InboxStrategy,
    IngestInput, IngestStrategy, InitStrategy, IntentInput, IntentStrategy, QueryInput,
    QueryStrategy, VersionStrategy,
};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "onebrain")]
#[command(about = "one-brain project workspace", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a project, customer, or developer
    Query {
        /// ID or keyword, e.g. PRJ-001, CI001, DEV-003, or free text
        term: String,
    },
    /// Append an activity note to a project
    Inbox {
        /// Project ID, e.g. PRJ-003
        project_id: String,
        /// Note, email, or chat content to append
        note: String,
    },
    /// Generate a plan for a stated goal
    Intent {
        /// What you want to achieve
        goal: String,
    },
    /// List projects by customer or developer
    Explore {
        /// Field to group by
        #[arg(short, long, value_enum, default_value_t = GroupBy::Customer)]
        by: GroupBy,
        /// ID or name fragment
        term: String,
    },
    /// Load a JSON file into the index
    Ingest {
        /// Path to the JSON file
        file: PathBuf,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Query { term } => QueryStrategy.execute(QueryInput { term }).await,
        Commands::Inbox { project_id, note } => {
            InboxStrategy.execute(InboxInput { project_id, note }).await
        }
        Commands::Intent { goal } => IntentStrategy.execute(IntentInput { goal }).await,
        Commands::Explore { by, term } => {
            ExploreStrategy.execute(ExploreInput { by, term }).await
        }
        Commands::Ingest { file } => IngestStrategy.execute(IngestInput { file }).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
