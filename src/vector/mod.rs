//! Managed vector index integration: a thin REST client plus the
//! chunk → embed → upsert indexing pipeline and semantic search.

pub mod client;
pub mod indexer;
