//! Integration tests for the layered resolution fallback.
//!
//! These drive the resolver against an in-memory stand-in for the
//! hosted index that counts each lookup path, so fallback ordering is
//! observable.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use onebrain_core::{
    Error, IndexField, MetadataFilter, ProjectFields, ProjectRecord, VectorIndex,
};
use onebrain_records::{
    FieldPatterns, IngestEntry, RecordResolver, append_activity, build_record,
};

/// In-memory index stub. Semantic ranking is simulated by insertion
/// order; what matters here is which path gets called, and how often.
#[derive(Default)]
struct StubIndex {
    records: Mutex<Vec<ProjectRecord>>,
    exact_calls: AtomicUsize,
    filtered_calls: AtomicUsize,
    unfiltered_calls: AtomicUsize,
}

impl StubIndex {
    fn with_records(records: Vec<ProjectRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }
}

fn field_value(record: &ProjectRecord, field: IndexField) -> Option<String> {
    match field {
        IndexField::ProjectId => record.fields.project_id.clone(),
        IndexField::CustomerId => record.fields.customer_id.clone(),
        IndexField::DeveloperId => record.fields.developer_id.clone(),
    }
}

fn matches_filter(record: &ProjectRecord, filter: &MetadataFilter) -> bool {
    match filter {
        MetadataFilter::Eq(field, value) => {
            field_value(record, *field).as_deref() == Some(value.as_str())
        }
        MetadataFilter::In(field, values) => {
            field_value(record, *field).is_some_and(|v| values.contains(&v))
        }
    }
}

#[async_trait]
impl VectorIndex for StubIndex {
    async fn exact_lookup(
        &self,
        field: IndexField,
        value: &str,
    ) -> anyhow::Result<Option<ProjectRecord>> {
        self.exact_calls.fetch_add(1, Ordering::SeqCst);
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .find(|r| field_value(r, field).as_deref() == Some(value))
            .cloned())
    }

    async fn semantic_lookup(
        &self,
        _text: &str,
        filter: Option<&MetadataFilter>,
        k: usize,
    ) -> anyhow::Result<Vec<ProjectRecord>> {
        let records = self.records.lock().unwrap();
        match filter {
            Some(filter) => {
                self.filtered_calls.fetch_add(1, Ordering::SeqCst);
                Ok(records
                    .iter()
                    .filter(|r| matches_filter(r, filter))
                    .take(k)
                    .cloned()
                    .collect())
            }
            None => {
                self.unfiltered_calls.fetch_add(1, Ordering::SeqCst);
                Ok(records.iter().take(k).cloned().collect())
            }
        }
    }

    async fn upsert(&self, record: &ProjectRecord) -> anyhow::Result<()> {
        let mut records = self.records.lock().unwrap();
        let id = record.fields.project_id.clone();
        if let Some(existing) = records
            .iter_mut()
            .find(|r| r.fields.project_id == id)
        {
            *existing = record.clone();
        } else {
            records.push(record.clone());
        }
        Ok(())
    }
}

fn patterns() -> FieldPatterns {
    FieldPatterns::new().unwrap()
}

fn entry(project_id: &str, customer_id: &str, developer_id: &str) -> IngestEntry {
    IngestEntry {
        project_id: Some(project_id.to_string()),
        customer_id: Some(customer_id.to_string()),
        developer_id: Some(developer_id.to_string()),
        project_name: Some(format!("Project {project_id}")),
        developer_name: Some("A B".to_string()),
        ..IngestEntry::default()
    }
}

fn stored(project_id: &str, customer_id: &str, developer_id: &str) -> ProjectRecord {
    build_record(entry(project_id, customer_id, developer_id), Utc::now()).unwrap()
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

#[tokio::test]
async fn exact_match_short_circuits_semantic_search() {
    let index = StubIndex::with_records(vec![
        stored("PRJ-007", "CI001", "DEV-001"),
        stored("PRJ-008", "CI001", "DEV-002"),
    ]);
    let resolver = RecordResolver::new(index, patterns());

    let results = resolver.resolve_query("prj007").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].fields.project_id.as_deref(), Some("PRJ-007"));
    assert_eq!(resolver.index().filtered_calls.load(Ordering::SeqCst), 0);
    assert_eq!(resolver.index().unfiltered_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn filtered_hit_never_reaches_the_unfiltered_search() {
    let index = StubIndex::with_records(vec![stored("PRJ-001", "CI001", "DEV-001")]);
    let resolver = RecordResolver::new(index, patterns());

    let results = resolver.resolve_query("ci001").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(resolver.index().filtered_calls.load(Ordering::SeqCst), 1);
    assert_eq!(resolver.index().unfiltered_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn query_miss_reports_every_attempted_variant() {
    let index = StubIndex::with_records(vec![stored("PRJ-001", "CI001", "DEV-001")]);
    let resolver = RecordResolver::new(index, patterns());

    let err = resolver.resolve_query("prj-404").await.unwrap_err();
    match err {
        Error::NotFound { tried } => {
            assert_eq!(tried[0], "PRJ-404");
            assert!(tried.contains(&"PRJ404".to_string()));
        }
        other => panic!("expected NotFound, got {other}"),
    }
    // the query path must not have fallen through to an unfiltered search
    assert_eq!(resolver.index().unfiltered_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn duplicate_resolved_ids_keep_first_occurrence() {
    // same project twice: once with structured id, once recoverable
    // only from the body
    let with_fields = stored("PRJ-010", "CI005", "DEV-004");
    let body_only = ProjectRecord::new(
        ProjectFields {
            customer_id: Some("CI005".to_string()),
            ..ProjectFields::default()
        },
        "Project ID: PRJ-010\nProject Name: Shadow Copy".to_string(),
    );
    let index = StubIndex::with_records(vec![with_fields, body_only]);
    let resolver = RecordResolver::new(index, patterns());

    let results = resolver.resolve_query("ci005").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].fields.project_name.as_deref(),
        Some("Project PRJ-010")
    );
}

#[tokio::test]
async fn explore_falls_back_to_unfiltered_search() {
    let index = StubIndex::with_records(vec![stored("PRJ-001", "CI001", "DEV-001")]);
    let resolver = RecordResolver::new(index, patterns());

    let results = resolver
        .resolve_by_field(IndexField::CustomerId, "ci999")
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(resolver.index().filtered_calls.load(Ordering::SeqCst), 1);
    assert_eq!(resolver.index().unfiltered_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn explore_filtered_hit_skips_the_fallback() {
    let index = StubIndex::with_records(vec![
        stored("PRJ-001", "CI001", "DEV-001"),
        stored("PRJ-002", "CI002", "DEV-002"),
    ]);
    let resolver = RecordResolver::new(index, patterns());

    let results = resolver
        .resolve_by_field(IndexField::DeveloperId, "dev-002")
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].fields.project_id.as_deref(), Some("PRJ-002"));
    assert_eq!(resolver.index().unfiltered_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn find_exact_tries_every_variant_before_giving_up() {
    let index = StubIndex::default();
    let resolver = RecordResolver::new(index, patterns());

    let err = resolver.find_exact("prj-404").await.unwrap_err();
    let Error::NotFound { tried } = err else {
        panic!("expected NotFound");
    };
    // PRJ-404, PRJ404, PRJ--404 — one exact probe each
    assert_eq!(tried.len(), 3);
    assert_eq!(resolver.index().exact_calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn ingest_resolve_append_round_trip() {
    let entry = IngestEntry {
        project_id: Some("PRJ-007".to_string()),
        project_name: Some("X".to_string()),
        developer_id: Some("DEV-009".to_string()),
        developer_name: Some("A B".to_string()),
        ..IngestEntry::default()
    };
    let record = build_record(entry, Utc::now()).unwrap();
    let index = StubIndex::with_records(vec![record]);
    let resolver = RecordResolver::new(index, patterns());

    let results = resolver.resolve_query("prj007").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].fields.project_id.as_deref(), Some("PRJ-007"));

    let current = resolver.find_exact("prj007").await.unwrap();
    let updated = append_activity(&current, "hello", at(2026, 1, 1, 10, 0)).unwrap();
    assert!(
        updated
            .body
            .ends_with("───── Activity 2026-01-01 10:00 ─────\nhello")
    );
    resolver.index().upsert(&updated).await.unwrap();

    // the stored record now carries the entry, and only one copy exists
    let stored_again = resolver.find_exact("PRJ-007").await.unwrap();
    let entries = resolver.patterns().activities(&stored_again.body);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].timestamp, "2026-01-01 10:00");
    assert_eq!(entries[0].text, "hello");
    assert!(stored_again.body.starts_with("Project ID: PRJ-007"));
}
