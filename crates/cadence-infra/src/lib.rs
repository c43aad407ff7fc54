//! # Cadence Infra
//!
//! Infrastructure adapters behind the core ports: the OpenAI-compatible
//! generation gateway and the snapshot stores.

pub mod llm;
pub mod snapshot;
