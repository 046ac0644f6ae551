//! Document indexing and semantic search over the managed vector index.

use anyhow::{Context, Result};

use crate::chunking::split_text;
use crate::config::{LlmConfig, VectorConfig};
use crate::llm::embeddings::{embed_batch, embed_single};
use crate::models::{DocumentInput, SearchResult};
use crate::vector::client::{query_vectors, upsert_vectors, VectorRecord};

/// Chunk, embed, and upsert a batch of documents.
///
/// Each chunk becomes one vector with id `"{doc_id}_chunk_{i}"` and metadata
/// carrying the chunk text, its index, and the parent document id merged
/// with any caller-supplied metadata. Returns the number of vectors written.
pub async fn index_documents(
    client: &reqwest::Client,
    llm: &LlmConfig,
    vector: &VectorConfig,
    documents: &[DocumentInput],
    namespace: Option<&str>,
) -> Result<usize> {
    let mut records = Vec::new();

    for (doc_index, doc) in documents.iter().enumerate() {
        let doc_id = doc
            .id
            .clone()
            .unwrap_or_else(|| format!("doc_{doc_index}"));

        let chunks = split_text(&doc.content, vector.chunk_size, vector.chunk_overlap);
        if chunks.is_empty() {
            continue;
        }

        let embeddings = embed_batch(client, llm, &chunks)
            .await
            .with_context(|| format!("Failed to embed chunks of document {doc_id}"))?;

        for (i, (chunk, embedding)) in chunks.iter().zip(embeddings).enumerate() {
            let mut metadata = doc.metadata.clone().unwrap_or_default();
            metadata.insert("content".to_string(), chunk.clone().into());
            metadata.insert("chunk_index".to_string(), i.into());
            metadata.insert("parent_doc_id".to_string(), doc_id.clone().into());

            records.push(VectorRecord {
                id: format!("{doc_id}_chunk_{i}"),
                values: embedding,
                metadata: serde_json::Value::Object(metadata),
            });
        }
    }

    if records.is_empty() {
        return Ok(0);
    }

    let written = upsert_vectors(client, vector, &records, namespace).await?;
    tracing::info!(
        "Indexed {} vectors from {} documents",
        records.len(),
        documents.len()
    );

    // Some provider responses omit the acknowledged count; fall back to ours.
    Ok(if written > 0 { written } else { records.len() })
}

/// Embed the query and return the nearest indexed chunks.
pub async fn semantic_search(
    client: &reqwest::Client,
    llm: &LlmConfig,
    vector: &VectorConfig,
    query: &str,
    limit: usize,
    namespace: Option<&str>,
) -> Result<Vec<SearchResult>> {
    let embedding = embed_single(client, llm, query)
        .await
        .context("Failed to embed search query")?;

    let matches = query_vectors(client, vector, &embedding, limit, namespace).await?;

    Ok(matches
        .into_iter()
        .map(|m| {
            let content = m
                .metadata
                .get("content")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            SearchResult {
                id: m.id,
                content,
                metadata: m.metadata,
                score: m.score,
            }
        })
        .collect())
}
