//! Serverless vector index client.
//!
//! Records live as one vector per project id; the structured fields are
//! flattened into vector metadata and the body is stored under the
//! `text` key, so a query match reconstructs the full record.

use async_trait::async_trait;
use onebrain_core::{
    Embedder, IndexField, MetadataFilter, ProjectFields, ProjectRecord, VectorIndex,
};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

/// Metadata key the record body is stored under.
const TEXT_KEY: &str = "text";

/// HTTP client for a Pinecone-style serverless index.
///
/// Embedding happens here, on every lookup and upsert; the resolver
/// core never sees a vector.
pub struct PineconeIndex<E> {
    client: Client,
    api_key: String,
    host: String,
    namespace: String,
    embedder: E,
}

impl<E> PineconeIndex<E> {
    pub fn new(api_key: String, host: String, embedder: E) -> Self {
        Self {
            client: Client::new(),
            api_key,
            host,
            namespace: String::new(),
            embedder,
        }
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: String) -> Self {
        self.namespace = namespace;
        self
    }
}

impl<E: Embedder> PineconeIndex<E> {
    async fn query(
        &self,
        vector: &[f32],
        filter: Option<&MetadataFilter>,
        k: usize,
    ) -> anyhow::Result<Vec<ProjectRecord>> {
        let mut request = json!({
            "vector": vector,
            "topK": k,
            "includeMetadata": true,
        });
        if !self.namespace.is_empty() {
            request["namespace"] = json!(self.namespace);
        }
        if let Some(filter) = filter {
            request["filter"] = filter_to_json(filter);
        }

        let response = self
            .client
            .post(format!("{}/query", self.host))
            .header("Api-Key", &self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        let matches = response["matches"].as_array().cloned().unwrap_or_default();
        Ok(matches
            .iter()
            .filter_map(|m| m.get("metadata").map(metadata_to_record))
            .collect())
    }
}

#[async_trait]
impl<E: Embedder> VectorIndex for PineconeIndex<E> {
    async fn exact_lookup(
        &self,
        field: IndexField,
        value: &str,
    ) -> anyhow::Result<Option<ProjectRecord>> {
        // equality-filtered similarity search with an empty probe, k=1
        let filter = MetadataFilter::Eq(field, value.to_string());
        let vector = self.embedder.embed("").await?;
        let hits = self.query(&vector, Some(&filter), 1).await?;
        Ok(hits.into_iter().next())
    }

    async fn semantic_lookup(
        &self,
        text: &str,
        filter: Option<&MetadataFilter>,
        k: usize,
    ) -> anyhow::Result<Vec<ProjectRecord>> {
        let vector = self.embedder.embed(text).await?;
        self.query(&vector, filter, k).await
    }

    async fn upsert(&self, record: &ProjectRecord) -> anyhow::Result<()> {
        let id = record
            .fields
            .project_id
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("record has no project id to store under"))?;
        let vector = self.embedder.embed(&record.body).await?;

        let mut request = json!({
            "vectors": [{
                "id": id,
                "values": vector,
                "metadata": record_to_metadata(record),
            }],
        });
        if !self.namespace.is_empty() {
            request["namespace"] = json!(self.namespace);
        }

        self.client
            .post(format!("{}/vectors/upsert", self.host))
            .header("Api-Key", &self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        info!("Upserted record {id}");
        Ok(())
    }
}

/// Render a lookup filter in the index's JSON filter syntax.
fn filter_to_json(filter: &MetadataFilter) -> Value {
    match filter {
        MetadataFilter::Eq(field, value) => json!({ field.as_str(): { "$eq": value } }),
        MetadataFilter::In(field, values) => json!({ field.as_str(): { "$in": values } }),
    }
}

/// Rebuild a record from stored vector metadata.
fn metadata_to_record(meta: &Value) -> ProjectRecord {
    let text = |key: &str| meta.get(key).and_then(Value::as_str).map(str::to_string);
    let tags = meta
        .get("tags")
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    ProjectRecord {
        body: text(TEXT_KEY).unwrap_or_default(),
        fields: ProjectFields {
            project_id: text("project_id"),
            customer_id: text("customer_id"),
            project_name: text("project_name"),
            client_name: text("client_name"),
            developer_id: text("developer_id"),
            developer_name: text("developer_name"),
            health: text("health"),
            priority: text("priority"),
            due_date: text("due_date"),
            last_updated: text("last_updated"),
            tags,
        },
    }
}

/// Flatten a record into upsert metadata.
fn record_to_metadata(record: &ProjectRecord) -> Value {
    let mut meta = serde_json::Map::new();
    meta.insert(TEXT_KEY.to_string(), json!(record.body));
    let fields = &record.fields;
    let mut put = |key: &str, value: &Option<String>| {
        if let Some(value) = value {
            meta.insert(key.to_string(), json!(value));
        }
    };
    put("project_id", &fields.project_id);
    put("customer_id", &fields.customer_id);
    put("project_name", &fields.project_name);
    put("client_name", &fields.client_name);
    put("developer_id", &fields.developer_id);
    put("developer_name", &fields.developer_name);
    put("health", &fields.health);
    put("priority", &fields.priority);
    put("due_date", &fields.due_date);
    put("last_updated", &fields.last_updated);
    if !fields.tags.is_empty() {
        meta.insert("tags".to_string(), json!(fields.tags));
    }
    Value::Object(meta)
}
