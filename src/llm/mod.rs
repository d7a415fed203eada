// src/llm/mod.rs
// Model-backed classification: prompt construction and the provider client

pub mod client;
pub mod prompt;

pub use client::{ModelClient, ModelError};
