use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::VectorConfig;

/// A vector ready for upsert.
#[derive(Debug, Clone, Serialize)]
pub struct VectorRecord {
    pub id: String,
    pub values: Vec<f32>,
    pub metadata: serde_json::Value,
}

/// A scored match returned by a query.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoredVector {
    pub id: String,
    pub score: f64,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// Vectors per upsert request.
const UPSERT_BATCH: usize = 100;

fn index_host(config: &VectorConfig) -> Result<&str> {
    config
        .api_key
        .as_deref()
        .context("Vector provider API key not configured")?;
    config
        .index_host
        .as_deref()
        .map(|h| h.trim_end_matches('/'))
        .context("Vector index host not configured")
}

// ─── Upsert ──────────────────────────────────────────────

#[derive(Serialize)]
struct UpsertRequest<'a> {
    vectors: &'a [VectorRecord],
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<&'a str>,
}

#[derive(Deserialize)]
struct UpsertResponse {
    #[serde(rename = "upsertedCount", default)]
    upserted_count: usize,
}

/// Upsert vectors into the index, batched. Returns the total count the
/// provider acknowledged.
pub async fn upsert_vectors(
    client: &reqwest::Client,
    config: &VectorConfig,
    vectors: &[VectorRecord],
    namespace: Option<&str>,
) -> Result<usize> {
    if vectors.is_empty() {
        return Ok(0);
    }

    let host = index_host(config)?;
    let api_key = config.api_key.as_deref().unwrap_or_default();
    let url = format!("{host}/vectors/upsert");
    let namespace = namespace.or(config.namespace.as_deref());

    let mut total = 0usize;
    for batch in vectors.chunks(UPSERT_BATCH) {
        let req = UpsertRequest {
            vectors: batch,
            namespace,
        };

        let resp = client
            .post(&url)
            .timeout(Duration::from_secs(config.timeout_secs))
            .header("Api-Key", api_key)
            .json(&req)
            .send()
            .await
            .context("Failed to call vector upsert API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Vector upsert API returned {status}: {body}");
        }

        let body: UpsertResponse = resp
            .json()
            .await
            .context("Failed to parse vector upsert response")?;
        total += body.upserted_count;
    }

    Ok(total)
}

// ─── Query ───────────────────────────────────────────────

#[derive(Serialize)]
struct QueryRequest<'a> {
    vector: &'a [f32],
    #[serde(rename = "topK")]
    top_k: usize,
    #[serde(rename = "includeMetadata")]
    include_metadata: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<&'a str>,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<ScoredVector>,
}

/// Query the index for the nearest vectors to `embedding`.
pub async fn query_vectors(
    client: &reqwest::Client,
    config: &VectorConfig,
    embedding: &[f32],
    top_k: usize,
    namespace: Option<&str>,
) -> Result<Vec<ScoredVector>> {
    let host = index_host(config)?;
    let api_key = config.api_key.as_deref().unwrap_or_default();
    let url = format!("{host}/query");

    let req = QueryRequest {
        vector: embedding,
        top_k,
        include_metadata: true,
        namespace: namespace.or(config.namespace.as_deref()),
    };

    let resp = client
        .post(&url)
        .timeout(Duration::from_secs(config.timeout_secs))
        .header("Api-Key", api_key)
        .json(&req)
        .send()
        .await
        .context("Failed to call vector query API")?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("Vector query API returned {status}: {body}");
    }

    let body: QueryResponse = resp
        .json()
        .await
        .context("Failed to parse vector query response")?;

    Ok(body.matches)
}
