use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;

/// Maximum characters to send per text to the embedding API. Keeps dense
/// inputs safely under the embedding models' context windows.
const MAX_EMBED_CHARS: usize = 6_000;

/// Truncate `text` to at most `MAX_EMBED_CHARS`, splitting on a UTF-8 char boundary.
fn truncate_for_embedding(text: &str) -> &str {
    if text.len() <= MAX_EMBED_CHARS {
        return text;
    }
    let mut end = MAX_EMBED_CHARS;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Generate embeddings for a batch of texts using the configured provider.
pub async fn embed_batch(
    client: &reqwest::Client,
    config: &LlmConfig,
    texts: &[String],
) -> Result<Vec<Vec<f32>>> {
    if texts.is_empty() {
        return Ok(Vec::new());
    }

    let truncated: Vec<String> = texts
        .iter()
        .map(|t| truncate_for_embedding(t).to_string())
        .collect();

    match config.provider.as_str() {
        "openai" => embed_openai(client, config, &truncated).await,
        "mistral" => embed_mistral(client, config, &truncated).await,
        other => anyhow::bail!("Unknown LLM provider: {other}"),
    }
}

/// Generate the embedding for a single text.
pub async fn embed_single(
    client: &reqwest::Client,
    config: &LlmConfig,
    text: &str,
) -> Result<Vec<f32>> {
    let results = embed_batch(client, config, &[text.to_string()]).await?;
    results.into_iter().next().context("No embedding returned")
}

// ─── OpenAI ──────────────────────────────────────────────

#[derive(Serialize)]
struct OpenAiEmbedRequest {
    model: String,
    input: Vec<String>,
}

#[derive(Deserialize)]
struct OpenAiEmbedResponse {
    data: Vec<OpenAiEmbedData>,
}

#[derive(Deserialize)]
struct OpenAiEmbedData {
    embedding: Vec<f32>,
}

async fn embed_openai(
    client: &reqwest::Client,
    config: &LlmConfig,
    texts: &[String],
) -> Result<Vec<Vec<f32>>> {
    let url = format!("{}/v1/embeddings", config.base_url);
    let api_key = config.api_key.as_deref().unwrap_or_default();

    let batch_size = 64;
    let mut all_embeddings = Vec::new();

    for chunk in texts.chunks(batch_size) {
        let req = OpenAiEmbedRequest {
            model: config.embedding_model.clone(),
            input: chunk.to_vec(),
        };

        let resp = client
            .post(&url)
            .timeout(Duration::from_secs(config.timeout_secs))
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&req)
            .send()
            .await
            .context("Failed to call OpenAI embeddings API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("OpenAI embeddings API returned {status}: {body}");
        }

        let body: OpenAiEmbedResponse = resp
            .json()
            .await
            .context("Failed to parse OpenAI embeddings response")?;

        all_embeddings.extend(body.data.into_iter().map(|d| d.embedding));
    }

    Ok(all_embeddings)
}

// ─── Mistral ─────────────────────────────────────────────

#[derive(Serialize)]
struct MistralEmbedRequest {
    model: String,
    input: Vec<String>,
    encoding_format: &'static str,
}

#[derive(Deserialize)]
struct MistralEmbedResponse {
    data: Vec<MistralEmbedData>,
}

#[derive(Deserialize)]
struct MistralEmbedData {
    embedding: Vec<f32>,
}

async fn embed_mistral(
    client: &reqwest::Client,
    config: &LlmConfig,
    texts: &[String],
) -> Result<Vec<Vec<f32>>> {
    let url = format!("{}/v1/embeddings", config.base_url);
    let api_key = config.api_key.as_deref().unwrap_or_default();

    let batch_size = 32;
    let mut all_embeddings = Vec::new();

    for chunk in texts.chunks(batch_size) {
        let req = MistralEmbedRequest {
            model: config.embedding_model.clone(),
            input: chunk.to_vec(),
            encoding_format: "float",
        };

        let resp = client
            .post(&url)
            .timeout(Duration::from_secs(config.timeout_secs))
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&req)
            .send()
            .await
            .context("Failed to call Mistral embeddings API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Mistral embeddings API returned {status}: {body}");
        }

        let body: MistralEmbedResponse = resp
            .json()
            .await
            .context("Failed to parse Mistral embeddings response")?;

        all_embeddings.extend(body.data.into_iter().map(|d| d.embedding));
    }

    Ok(all_embeddings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_for_embedding("hello"), "hello");
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        // Fill past the limit with multi-byte chars; the cut must not split one.
        let text = "é".repeat(MAX_EMBED_CHARS);
        let out = truncate_for_embedding(&text);
        assert!(out.len() <= MAX_EMBED_CHARS);
        assert!(out.chars().all(|c| c == 'é'));
    }
}
