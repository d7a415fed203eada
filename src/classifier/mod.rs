// src/classifier/mod.rs
// Classification engine: normalization, security detection, rule cascade,
// and the arbitration between the model path and the deterministic fallback.

pub mod normalize;
pub mod result;
pub mod rules;
pub mod security;

pub use result::{Category, ClassificationResult, SubCategory};

use tracing::{debug, warn};

use crate::llm::ModelClient;

/// Substring scan over a phrase table. Matching is substring-based, not
/// tokenized, which is what the keyword tables are tuned for.
pub(crate) fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| text.contains(phrase))
}

/// The single entry point callers use. Holds an optional model client; the
/// absent state is the supported "no credential" mode, not an error.
pub struct EmailClassifier {
    model: Option<ModelClient>,
}

impl EmailClassifier {
    pub fn new(model: Option<ModelClient>) -> Self {
        Self { model }
    }

    /// An engine that never touches the network.
    pub fn rule_only() -> Self {
        Self { model: None }
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Classify an email and build a suggested reply. Never fails: security
    /// cases short-circuit, the model path is attempted when configured, and
    /// every model failure falls back to the rule cascade (which re-applies
    /// the security check itself, so the fallback is safe standalone).
    pub async fn classify(&self, raw: &str) -> ClassificationResult {
        let text = normalize::normalize(raw);

        if let Some(security_case) = security::detect(&text) {
            return security_case;
        }

        let Some(client) = &self.model else {
            debug!("no model credential configured, using rule-based classification");
            return rules::classify(&text);
        };

        match client.classify_email(&text).await {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    "model classification failed ({}): {}, using rule-based fallback",
                    e.kind(),
                    e
                );
                rules::classify(&text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rule_only_engine_classifies_fraud() {
        let engine = EmailClassifier::rule_only();
        let result = engine.classify("Meu cartão foi clonado").await;
        assert_eq!(result.category, Category::Productive);
        assert_eq!(result.sub_category, "Fraude / cartão clonado");
    }

    #[tokio::test]
    async fn test_rule_only_engine_is_deterministic() {
        let engine = EmailClassifier::rule_only();
        let input = "Quero solicitar aumento do limite do meu cartão de crédito";
        let first = engine.classify(input).await;
        let second = engine.classify(input).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_normalization_applies_before_matching() {
        let engine = EmailClassifier::rule_only();
        let result = engine.classify("  meu\n\ncartão   foi\tclonado  ").await;
        assert_eq!(result.sub_category, "Fraude / cartão clonado");
    }

    #[test]
    fn test_has_model_reflects_configuration() {
        assert!(!EmailClassifier::rule_only().has_model());
    }
}
