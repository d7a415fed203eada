// src/api/types.rs
use serde::{Deserialize, Serialize};

/// Body of POST /analyze-text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}
