use async_trait::async_trait;
use onebrain_core::{Embedder, LlmProvider};
use reqwest::Client;
use serde_json::json;
use tracing::info;

/// Chat and embedding client for an OpenAI-compatible API.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    chat_model: String,
    embed_model: String,
    temperature: f64,
}

impl OpenAiProvider {
    /// Convert f64 to f32 for embedding values.
    /// Precision loss is acceptable for ML embeddings
    #[expect(clippy::cast_possible_truncation, reason = "ML embeddings use f32")]
    const fn f64_to_f32(x: f64) -> f32 {
        x as f32
    }

    pub fn new(api_key: String) -> Self {
        info!("Creating OpenAiProvider");
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
            chat_model: "gpt-4o-mini".to_string(),
            embed_model: "text-embedding-3-small".to_string(),
            temperature: 0.3,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    #[must_use]
    pub fn with_models(mut self, chat_model: String, embed_model: String) -> Self {
        self.chat_model = chat_model;
        self.embed_model = embed_model;
        self
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        let request = json!({
            "model": self.chat_model,
            "temperature": self.temperature,
            "messages": [{"role": "user", "content": prompt}],
        });

        info!("Sending completion request: model={}", self.chat_model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        let content = response["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid response format: missing content"))?
            .to_string();

        Ok(content)
    }
}

#[async_trait]
impl Embedder for OpenAiProvider {
    async fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>> {
        let response = self
            .client
            .post(format!("{}/embeddings", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.embed_model,
                "input": text,
            }))
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        let embedding = response["data"][0]["embedding"]
            .as_array()
            .ok_or_else(|| anyhow::anyhow!("Invalid response format: missing embedding"))?
            .iter()
            .map(|v| {
                v.as_f64()
                    .map(Self::f64_to_f32)
                    .ok_or_else(|| anyhow::anyhow!("Invalid embedding value"))
            })
            .collect::<Result<Vec<f32>, _>>()?;

        Ok(embedding)
    }
}
