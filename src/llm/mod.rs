//! Clients for the optional LLM provider (chat completions + embeddings)
//! and the best-effort recommendation enrichment built on them.

pub mod chat;
pub mod embeddings;
pub mod enrich;
