//! Layered record resolution over the vector index.
//!
//! Lookup falls back in order: exact project-id match, then semantic
//! search constrained to the classified id family, then (explore path
//! only) an unconstrained semantic search. Each stage stops the chain
//! at its first non-empty result.

use std::collections::HashSet;

use onebrain_core::{Error, IndexField, MetadataFilter, ProjectRecord, Result, VectorIndex};

use crate::extract::FieldPatterns;
use crate::normalize::{self, id_variants};
use crate::view;

/// Result bound for keyword queries.
const QUERY_LIMIT: usize = 5;
/// Result bound for explore-by-field listings.
const EXPLORE_LIMIT: usize = 10;
/// Result bound for the known-id census.
const KNOWN_IDS_LIMIT: usize = 30;
/// How many records the recent-activity probe fetches.
const RECENT_PROBE_LIMIT: usize = 5;
/// How many recent records survive the sort.
const RECENT_KEPT: usize = 3;

/// Decides which stored records a query or update refers to.
///
/// Holds the index handle and the compiled pattern table; constructed
/// once per process and passed by reference into the commands.
pub struct RecordResolver<I> {
    index: I,
    patterns: FieldPatterns,
}

impl<I: VectorIndex> RecordResolver<I> {
    pub const fn new(index: I, patterns: FieldPatterns) -> Self {
        Self { index, patterns }
    }

    #[must_use]
    pub const fn patterns(&self) -> &FieldPatterns {
        &self.patterns
    }

    #[must_use]
    pub const fn index(&self) -> &I {
        &self.index
    }

    /// Resolve a free-form query: an id in any format, or a keyword.
    ///
    /// The query path never issues an unconstrained search; when the
    /// filtered stage comes back empty the caller gets `NotFound` with
    /// every attempted variant.
    pub async fn resolve_query(&self, query: &str) -> Result<Vec<ProjectRecord>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyInput("query"));
        }
        let variants = id_variants(trimmed);

        for candidate in variants
            .iter()
            .filter(|v| v.starts_with(normalize::PROJECT_PREFIX))
        {
            if let Some(hit) = self
                .index
                .exact_lookup(IndexField::ProjectId, candidate)
                .await
                .map_err(Error::Unavailable)?
            {
                return Ok(vec![hit]);
            }
        }

        let filter = classify(&variants);
        // the raw query text is the similarity probe, not a variant
        let results = self
            .index
            .semantic_lookup(query, filter.as_ref(), QUERY_LIMIT)
            .await
            .map_err(Error::Unavailable)?;
        if results.is_empty() {
            return Err(Error::NotFound { tried: variants });
        }
        Ok(self.dedup(results))
    }

    /// Explore listing: records whose customer or developer id equals
    /// the term, with an unconstrained semantic fallback when the
    /// filtered pass finds nothing. An empty final result is not an
    /// error here.
    pub async fn resolve_by_field(
        &self,
        field: IndexField,
        term: &str,
    ) -> Result<Vec<ProjectRecord>> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyInput("term"));
        }
        let filter = MetadataFilter::Eq(field, trimmed.to_uppercase());
        let mut results = self
            .index
            .semantic_lookup("", Some(&filter), EXPLORE_LIMIT)
            .await
            .map_err(Error::Unavailable)?;
        if results.is_empty() {
            results = self
                .index
                .semantic_lookup(term, None, EXPLORE_LIMIT)
                .await
                .map_err(Error::Unavailable)?;
        }
        Ok(self.dedup(results))
    }

    /// Exact-field existence lookup for the append path.
    ///
    /// Unlike the query path this tries every variant, not only the
    /// project-prefixed ones; the record is found if any variant yields
    /// an exact hit.
    pub async fn find_exact(&self, project_id: &str) -> Result<ProjectRecord> {
        let trimmed = project_id.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyInput("project id"));
        }
        let variants = id_variants(trimmed);
        for candidate in &variants {
            if let Some(hit) = self
                .index
                .exact_lookup(IndexField::ProjectId, candidate)
                .await
                .map_err(Error::Unavailable)?
            {
                return Ok(hit);
            }
        }
        Err(Error::NotFound { tried: variants })
    }

    /// The most recently updated records, newest first.
    ///
    /// Failure propagates so the caller can degrade visibly instead of
    /// swallowing it.
    pub async fn recent_activity(&self) -> Result<Vec<ProjectRecord>> {
        let mut records = self
            .index
            .semantic_lookup("last_updated", None, RECENT_PROBE_LIMIT)
            .await
            .map_err(Error::Unavailable)?;
        records.sort_by(|a, b| b.fields.last_updated.cmp(&a.fields.last_updated));
        records.truncate(RECENT_KEPT);
        Ok(records)
    }

    /// Every project id currently visible in the index, sorted.
    pub async fn known_ids(&self) -> Result<Vec<String>> {
        let records = self
            .index
            .semantic_lookup("", None, KNOWN_IDS_LIMIT)
            .await
            .map_err(Error::Unavailable)?;
        let mut ids: Vec<String> = records
            .iter()
            .map(|r| view::resolved_id(r, &self.patterns))
            .collect();
        ids.sort();
        ids.dedup();
        Ok(ids)
    }

    /// Drop records whose resolved id was already seen, keeping the
    /// first occurrence.
    fn dedup(&self, records: Vec<ProjectRecord>) -> Vec<ProjectRecord> {
        let mut seen = HashSet::new();
        records
            .into_iter()
            .filter(|r| seen.insert(view::resolved_id(r, &self.patterns)))
            .collect()
    }
}

/// Classify a variant set into the id family it should search under:
/// project, then customer, then developer, else unfiltered.
fn classify(variants: &[String]) -> Option<MetadataFilter> {
    if variants
        .iter()
        .any(|v| v.starts_with(normalize::PROJECT_PREFIX))
    {
        Some(MetadataFilter::In(IndexField::ProjectId, variants.to_vec()))
    } else if variants
        .iter()
        .any(|v| v.starts_with(normalize::CUSTOMER_PREFIX))
    {
        Some(MetadataFilter::In(IndexField::CustomerId, variants.to_vec()))
    } else if variants
        .iter()
        .any(|v| v.starts_with(normalize::DEVELOPER_PREFIX))
    {
        Some(MetadataFilter::In(
            IndexField::DeveloperId,
            variants.to_vec(),
        ))
    } else {
        None
    }
}
