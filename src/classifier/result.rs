// src/classifier/result.rs
// Category / subcategory vocabulary and the classification payload

use serde::{Deserialize, Serialize};

/// Top-level classification. Exactly two values; the wire names are the
/// Portuguese labels the rest of the pipeline (and the model contract) use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Produtivo")]
    Productive,
    #[serde(rename = "Improdutivo")]
    NonProductive,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Productive => "Produtivo",
            Category::NonProductive => "Improdutivo",
        }
    }
}

/// The known support subcategories. Rule branches pick from this set and the
/// model prompt enumerates it; model responses may still carry labels outside
/// the set, which is why `ClassificationResult.sub_category` stays a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubCategory {
    RequestStatus,
    CardLimit,
    Fraud,
    Billing,
    Payment,
    AccountAccess,
    Documents,
    Courtesy,
    GenericRequest,
    SecurityGuidance,
    OutOfScope,
}

impl SubCategory {
    pub const ALL: [SubCategory; 11] = [
        SubCategory::RequestStatus,
        SubCategory::CardLimit,
        SubCategory::Fraud,
        SubCategory::Billing,
        SubCategory::Payment,
        SubCategory::AccountAccess,
        SubCategory::Documents,
        SubCategory::Courtesy,
        SubCategory::GenericRequest,
        SubCategory::SecurityGuidance,
        SubCategory::OutOfScope,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubCategory::RequestStatus => "Status de solicitação em andamento",
            SubCategory::CardLimit => "Gestão de limite do cartão",
            SubCategory::Fraud => "Fraude / cartão clonado",
            SubCategory::Billing => "Fatura / cobrança / lançamentos",
            SubCategory::Payment => "Pagamento de fatura / boleto",
            SubCategory::AccountAccess => "Acesso à conta / aplicativo",
            SubCategory::Documents => "Envio de documentos / comprovantes",
            SubCategory::Courtesy => "Mensagem de cortesia / felicitação",
            SubCategory::GenericRequest => "Solicitação genérica de atendimento",
            SubCategory::SecurityGuidance => "Orientação de segurança / possível golpe",
            SubCategory::OutOfScope => "Mensagem informativa / fora de escopo",
        }
    }
}

/// The single serialized shape the service produces.
///
/// `category` and `auto_reply` are required on deserialization; a model
/// payload missing either is rejected by the adapter and routed to the
/// rule-based fallback. `sub_category` and `reason` are backfilled with
/// generic defaults when a model omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    #[serde(default = "default_sub_category")]
    pub sub_category: String,
    #[serde(default = "default_reason")]
    pub reason: String,
    pub auto_reply: String,
}

impl ClassificationResult {
    pub fn new(
        category: Category,
        sub_category: SubCategory,
        reason: &str,
        auto_reply: &str,
    ) -> Self {
        Self {
            category,
            sub_category: sub_category.as_str().to_string(),
            reason: reason.to_string(),
            auto_reply: auto_reply.to_string(),
        }
    }
}

fn default_sub_category() -> String {
    SubCategory::GenericRequest.as_str().to_string()
}

fn default_reason() -> String {
    "Classificação gerada automaticamente.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_to_portuguese_labels() {
        assert_eq!(
            serde_json::to_string(&Category::Productive).unwrap(),
            "\"Produtivo\""
        );
        assert_eq!(
            serde_json::to_string(&Category::NonProductive).unwrap(),
            "\"Improdutivo\""
        );
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let raw = r#"{"category": "Talvez", "auto_reply": "Olá!"}"#;
        assert!(serde_json::from_str::<ClassificationResult>(raw).is_err());
    }

    #[test]
    fn test_missing_optional_fields_are_backfilled() {
        let raw = r#"{"category": "Produtivo", "auto_reply": "Olá!"}"#;
        let result: ClassificationResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.sub_category, "Solicitação genérica de atendimento");
        assert_eq!(result.reason, "Classificação gerada automaticamente.");
        assert_eq!(result.auto_reply, "Olá!");
    }

    #[test]
    fn test_missing_auto_reply_is_rejected() {
        let raw = r#"{"category": "Produtivo", "sub_category": "x", "reason": "y"}"#;
        assert!(serde_json::from_str::<ClassificationResult>(raw).is_err());
    }

    #[test]
    fn test_unknown_sub_category_string_is_accepted() {
        let raw = r#"{"category": "Produtivo", "sub_category": "Cancelamento de cartão", "reason": "r", "auto_reply": "a"}"#;
        let result: ClassificationResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.sub_category, "Cancelamento de cartão");
    }

    #[test]
    fn test_sub_category_labels_are_unique() {
        let mut labels: Vec<&str> = SubCategory::ALL.iter().map(|s| s.as_str()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), SubCategory::ALL.len());
    }
}
