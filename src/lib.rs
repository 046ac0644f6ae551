//! # stack-advisor
//!
//! A Rust web service that recommends a technology stack (frontend, backend,
//! database) for a software project, with optional enrichment from an LLM
//! provider and a managed vector-search index.
//!
//! ## Architecture
//!
//! The recommendation path is deterministic and provider-independent:
//!
//! ```text
//!   ┌──────────────────────────────┐
//!   │  POST /api/ai/recommend-stack │
//!   └────────────┬─────────────────┘
//!            ▼
//!   ┌──────────────────┐     ┌──────────────────────┐
//!   │  Rule chains      │────▶│  LLM overrides        │  (optional,
//!   │  over requirements│     │  best-effort, 1 call  │   best-effort)
//!   └────────┬─────────┘     └──────────┬───────────┘
//!            │    validated against the knowledge base
//!            ▼
//!   ┌──────────────────┐
//!   │  Assembly:        │
//!   │  score, reasoning,│
//!   │  time estimates   │
//!   └──────────────────┘
//! ```
//!
//! Provider failures never propagate to the caller: the rule-based result is
//! always available, and the semantic-search surface degrades to empty
//! results when no vector index is configured.
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for server, LLM, and vector providers
//! - [`knowledge`] - The static technology table: categories, entries, lookups
//! - [`models`] - Request/response JSON types
//! - [`recommend`] - Selection rule chains, scoring, and time estimates
//! - [`chunking`] - Character-budget text splitter for document indexing
//! - [`llm`] - Chat-completion and embedding clients (OpenAI or Mistral) plus enrichment
//! - [`vector`] - Managed vector index client and the chunk/embed/upsert pipeline
//! - [`api`] - Axum HTTP handlers
//! - [`state`] - Shared application state

pub mod api;
pub mod chunking;
pub mod config;
pub mod knowledge;
pub mod llm;
pub mod models;
pub mod recommend;
pub mod state;
pub mod vector;
