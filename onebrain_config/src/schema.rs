use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub providers: ProvidersConfig,
    pub index: IndexConfig,
    #[serde(default)]
    pub models: ModelsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub openai: ProviderConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IndexConfig {
    pub api_key: String,
    /// Index endpoint, e.g. `https://workspace-v1-xxxx.svc.pinecone.io`
    pub host: String,
    #[serde(default)]
    pub namespace: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ModelsConfig {
    #[serde(default = "ModelsConfig::default_chat_model")]
    pub chat_model: String,
    #[serde(default = "ModelsConfig::default_embed_model")]
    pub embed_model: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            chat_model: Self::default_chat_model(),
            embed_model: Self::default_embed_model(),
        }
    }
}

impl ModelsConfig {
    fn default_chat_model() -> String {
        "gpt-4o-mini".to_string()
    }

    fn default_embed_model() -> String {
        "text-embedding-3-small".to_string()
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("onebrain");

        let config_path = config_dir.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'onebrain init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("onebrain");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "providers": {
    "openai": {
      "api_key": "your-openai-api-key-here"
    }
  },
  "index": {
    "api_key": "your-index-api-key-here",
    "host": "https://your-index-host.svc.pinecone.io",
    "namespace": ""
  },
  "models": {
    "chat_model": "gpt-4o-mini",
    "embed_model": "text-embedding-3-small"
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit the config file and add your API keys and index host");
        println!("   2. Run 'onebrain ingest data.json' to load project records");
        println!("   3. Run 'onebrain query PRJ-001' to look one up");
        println!();
        Ok(())
    }
}
