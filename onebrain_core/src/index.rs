use async_trait::async_trait;

use crate::record::ProjectRecord;

/// Structured metadata fields the index can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexField {
    ProjectId,
    CustomerId,
    DeveloperId,
}

impl IndexField {
    /// The metadata key this field is stored under.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProjectId => "project_id",
            Self::CustomerId => "customer_id",
            Self::DeveloperId => "developer_id",
        }
    }
}

/// Equality constraint applied to a semantic lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataFilter {
    /// Field equals the value exactly.
    Eq(IndexField, String),
    /// Field equals any of the values.
    In(IndexField, Vec<String>),
}

/// The hosted vector store, reduced to the three operations the
/// resolver core needs. Embedding happens behind this boundary.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Equality-filtered retrieval by a structured field (k = 1).
    async fn exact_lookup(
        &self,
        field: IndexField,
        value: &str,
    ) -> anyhow::Result<Option<ProjectRecord>>;

    /// Similarity-ranked retrieval over embedded text, optionally
    /// constrained by a metadata filter.
    async fn semantic_lookup(
        &self,
        text: &str,
        filter: Option<&MetadataFilter>,
        k: usize,
    ) -> anyhow::Result<Vec<ProjectRecord>>;

    /// Insert or replace the record stored under its project id.
    /// Last write wins; the body already carries the full history.
    async fn upsert(&self, record: &ProjectRecord) -> anyhow::Result<()>;
}
