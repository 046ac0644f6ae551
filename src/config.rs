use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// Allowed CORS origins; a single "*" entry allows any origin
    pub cors_origins: Vec<String>,
    /// LLM provider configuration
    pub llm: LlmConfig,
    /// Vector search provider configuration
    pub vector: VectorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// "openai" or "mistral"
    pub provider: String,
    /// Base URL for the LLM API
    pub base_url: String,
    /// Model name for chat completions
    pub chat_model: String,
    /// Model name for embeddings
    pub embedding_model: String,
    /// API key; the provider is unavailable without one
    pub api_key: Option<String>,
    /// Embedding vector dimension
    pub embedding_dim: usize,
    /// Sampling temperature for chat completions
    pub temperature: f32,
    /// Request timeout in seconds (capped at 120)
    pub timeout_secs: u64,
}

/// Configuration for the managed vector index (Pinecone-style REST API).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorConfig {
    /// API key; the provider is unavailable without one
    pub api_key: Option<String>,
    /// Index host URL (e.g. "https://tech-stack-knowledge-abc123.svc.us-east-1.pinecone.io")
    pub index_host: Option<String>,
    /// Logical index name, reported in logs only
    pub index_name: String,
    /// Default namespace for upserts and queries
    pub namespace: Option<String>,
    /// Request timeout in seconds (capped at 60)
    pub timeout_secs: u64,
    /// Maximum characters per text chunk
    pub chunk_size: usize,
    /// Characters carried over between consecutive chunks
    pub chunk_overlap: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".to_string(),
            cors_origins: vec!["*".to_string()],
            llm: LlmConfig::default(),
            vector: VectorConfig::default(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            base_url: default_base_url("openai").to_string(),
            chat_model: default_chat_model("openai").to_string(),
            embedding_model: default_embedding_model("openai").to_string(),
            api_key: None,
            embedding_dim: 1536,
            temperature: 0.3,
            timeout_secs: 30,
        }
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            index_host: None,
            index_name: "tech-stack-knowledge".to_string(),
            namespace: None,
            timeout_secs: 10,
            chunk_size: 1000,
            chunk_overlap: 200,
        }
    }
}

fn default_base_url(provider: &str) -> &'static str {
    match provider {
        "mistral" => "https://api.mistral.ai",
        _ => "https://api.openai.com",
    }
}

fn default_chat_model(provider: &str) -> &'static str {
    match provider {
        "mistral" => "mistral-large-latest",
        _ => "gpt-4",
    }
}

fn default_embedding_model(provider: &str) -> &'static str {
    match provider {
        "mistral" => "mistral-embed",
        _ => "text-embedding-3-small",
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("STACK_ADVISOR_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(origins) = std::env::var("STACK_ADVISOR_CORS_ORIGINS") {
            let parsed: Vec<String> = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !parsed.is_empty() {
                config.cors_origins = parsed;
            }
        }

        // LLM config. Provider is read first so the per-provider defaults for
        // base URL and model names apply before any explicit override.
        if let Ok(provider) = std::env::var("LLM_PROVIDER") {
            config.llm.provider = provider;
            config.llm.base_url = default_base_url(&config.llm.provider).to_string();
            config.llm.chat_model = default_chat_model(&config.llm.provider).to_string();
            config.llm.embedding_model = default_embedding_model(&config.llm.provider).to_string();
        }
        if let Ok(url) = std::env::var("LLM_BASE_URL") {
            config.llm.base_url = url;
        }
        if let Ok(model) = std::env::var("LLM_CHAT_MODEL") {
            config.llm.chat_model = model;
        }
        if let Ok(model) = std::env::var("LLM_EMBEDDING_MODEL") {
            config.llm.embedding_model = model;
        }
        if let Ok(key) = std::env::var("LLM_API_KEY") {
            if !key.is_empty() {
                config.llm.api_key = Some(key);
            }
        }
        if let Ok(dim) = std::env::var("LLM_EMBEDDING_DIM") {
            if let Ok(d) = dim.parse() {
                config.llm.embedding_dim = d;
            }
        }
        if let Ok(val) = std::env::var("LLM_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.llm.timeout_secs = v.min(120);
            }
        }

        // Vector provider config
        if let Ok(key) = std::env::var("VECTOR_API_KEY") {
            if !key.is_empty() {
                config.vector.api_key = Some(key);
            }
        }
        if let Ok(host) = std::env::var("VECTOR_INDEX_HOST") {
            config.vector.index_host = Some(host);
        }
        if let Ok(name) = std::env::var("VECTOR_INDEX_NAME") {
            config.vector.index_name = name;
        }
        if let Ok(ns) = std::env::var("VECTOR_NAMESPACE") {
            config.vector.namespace = Some(ns);
        }
        if let Ok(val) = std::env::var("VECTOR_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.vector.timeout_secs = v.min(60);
            }
        }
        if let Ok(val) = std::env::var("VECTOR_CHUNK_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                if v > 0 {
                    config.vector.chunk_size = v;
                }
            }
        }
        if let Ok(val) = std::env::var("VECTOR_CHUNK_OVERLAP") {
            if let Ok(v) = val.parse() {
                config.vector.chunk_overlap = v;
            }
        }

        config
    }
}

impl LlmConfig {
    /// The LLM provider is usable only with an API key configured.
    pub fn is_available(&self) -> bool {
        self.api_key.is_some()
    }
}

impl VectorConfig {
    /// The vector index is usable only with both a key and an index host.
    pub fn is_available(&self) -> bool {
        self.api_key.is_some() && self.index_host.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_have_no_providers() {
        let config = Config::default();
        assert!(!config.llm.is_available());
        assert!(!config.vector.is_available());
    }

    #[test]
    fn test_vector_needs_both_key_and_host() {
        let mut vector = VectorConfig::default();
        vector.api_key = Some("k".to_string());
        assert!(!vector.is_available());
        vector.index_host = Some("https://idx.example.com".to_string());
        assert!(vector.is_available());
    }

    #[test]
    fn test_per_provider_defaults() {
        assert_eq!(default_chat_model("mistral"), "mistral-large-latest");
        assert_eq!(default_base_url("openai"), "https://api.openai.com");
        assert_eq!(default_embedding_model("mistral"), "mistral-embed");
    }
}
