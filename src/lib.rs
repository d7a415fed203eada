// src/lib.rs

pub mod api;
pub mod classifier;
pub mod config;
pub mod extract;
pub mod llm;
pub mod state;
