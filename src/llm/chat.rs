use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;

/// Send a single-turn chat completion to the configured LLM provider and
/// return the assistant text. One attempt, bounded by the configured
/// timeout; callers decide what a failure falls back to.
pub async fn chat_completion(
    client: &reqwest::Client,
    config: &LlmConfig,
    prompt: &str,
) -> Result<String> {
    match config.provider.as_str() {
        "openai" => chat_openai(client, config, prompt).await,
        "mistral" => chat_mistral(client, config, prompt).await,
        other => anyhow::bail!("Unknown LLM provider: {other}"),
    }
}

// ─── OpenAI ──────────────────────────────────────────────

#[derive(Serialize)]
struct OpenAiChatRequest {
    model: String,
    messages: Vec<ChatTurn>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatTurn {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct OpenAiChatResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

#[derive(Deserialize)]
struct OpenAiMessage {
    content: String,
}

async fn chat_openai(client: &reqwest::Client, config: &LlmConfig, prompt: &str) -> Result<String> {
    let url = format!("{}/v1/chat/completions", config.base_url);
    let api_key = config.api_key.as_deref().unwrap_or_default();

    let req = OpenAiChatRequest {
        model: config.chat_model.clone(),
        messages: vec![ChatTurn {
            role: "user",
            content: prompt.to_string(),
        }],
        temperature: config.temperature,
    };

    let resp = client
        .post(&url)
        .timeout(Duration::from_secs(config.timeout_secs))
        .header("Authorization", format!("Bearer {api_key}"))
        .json(&req)
        .send()
        .await
        .context("Failed to call OpenAI chat API")?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("OpenAI chat API returned {status}: {body}");
    }

    let body: OpenAiChatResponse = resp
        .json()
        .await
        .context("Failed to parse OpenAI chat response")?;

    Ok(body
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .unwrap_or_default())
}

// ─── Mistral ─────────────────────────────────────────────

#[derive(Serialize)]
struct MistralChatRequest {
    model: String,
    messages: Vec<ChatTurn>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct MistralChatResponse {
    choices: Vec<MistralChoice>,
}

#[derive(Deserialize)]
struct MistralChoice {
    message: MistralMessage,
}

#[derive(Deserialize)]
struct MistralMessage {
    content: String,
}

async fn chat_mistral(
    client: &reqwest::Client,
    config: &LlmConfig,
    prompt: &str,
) -> Result<String> {
    let url = format!("{}/v1/chat/completions", config.base_url);
    let api_key = config.api_key.as_deref().unwrap_or_default();

    let req = MistralChatRequest {
        model: config.chat_model.clone(),
        messages: vec![ChatTurn {
            role: "user",
            content: prompt.to_string(),
        }],
        temperature: config.temperature,
        max_tokens: 1000,
    };

    let resp = client
        .post(&url)
        .timeout(Duration::from_secs(config.timeout_secs))
        .header("Authorization", format!("Bearer {api_key}"))
        .json(&req)
        .send()
        .await
        .context("Failed to call Mistral chat API")?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("Mistral chat API returned {status}: {body}");
    }

    let body: MistralChatResponse = resp
        .json()
        .await
        .context("Failed to parse Mistral chat response")?;

    Ok(body
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .unwrap_or_default())
}
