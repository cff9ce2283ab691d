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

use async_trait::async_trait;

pub mod error;
pub mod index;
pub mod record;

pub use error::{Error, Result};
pub use index::{IndexField, MetadataFilter, VectorIndex};
pub use record::{ActivityEntry, ProjectFields, ProjectRecord};

/// Hosted language model behind the planning surface.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> anyhow::Result<String>;
}

/// Text embedding provider.
///
/// Invoked by the vector index on every lookup and upsert; the resolver
/// core never calls this directly.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>>;
}
