//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own type, enabling
//! compile-time dispatch: no boxed trait objects, no runtime overhead.
//! Shared components are built once per invocation from the loaded
//! configuration and passed by reference into whatever needs them.

use onebrain_config::Config;
use onebrain_providers::{OpenAiProvider, PineconeIndex};
use onebrain_records::{FieldPatterns, RecordResolver};
use tracing::info;

mod explore;
mod inbox;
mod ingest;
mod init;
mod intent;
mod query;
mod version;

pub use explore::{ExploreInput, ExploreStrategy, GroupBy};
pub use inbox::{InboxInput, InboxStrategy};
pub use ingest::{IngestInput, IngestStrategy};
pub use init::InitStrategy;
pub use intent::{IntentInput, IntentStrategy};
pub use query::{QueryInput, QueryStrategy};
pub use version::VersionStrategy;

/// Components shared by every index-touching command.
pub struct CommonComponents {
    pub provider: OpenAiProvider,
    pub resolver: RecordResolver<PineconeIndex<OpenAiProvider>>,
}

/// Load the config and wire provider, index, and resolver together.
pub fn init_components() -> anyhow::Result<CommonComponents> {
    let config = Config::load()?;
    info!("Loaded config from ~/onebrain/config.json");

    let provider = OpenAiProvider::new(config.providers.openai.api_key)
        .with_models(config.models.chat_model, config.models.embed_model);
    let index = PineconeIndex::new(config.index.api_key, config.index.host, provider.clone())
        .with_namespace(config.index.namespace);
    let patterns = FieldPatterns::new()?;

    Ok(CommonComponents {
        provider,
        resolver: RecordResolver::new(index, patterns),
    })
}

/// Core trait defining the contract for all command strategies.
///
/// # Design Principles
/// - **Static dispatch**: All calls are monomorphized at compile time
/// - **Type safety**: Each strategy defines its own input type via associated type
/// - **Extensibility**: Adding new commands requires only implementing this trait
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
