// src/llm/prompt.rs
// Fixed instruction text for the classification completion call

use crate::classifier::SubCategory;

pub const SYSTEM_PROMPT: &str = "Você é um assistente de atendimento ao cliente de uma grande empresa \
    do setor financeiro. Sua função é analisar e-mails e classificá-los \
    como Produtivo ou Improdutivo, além de definir uma subcategoria de demanda \
    e sugerir uma resposta automática profissional e cordial em português.\n\n\
    IMPORTANTE: casos de possível golpe, fraude ou pedido de dados sensíveis \
    do cartão (como CVV, senha, dados completos do cartão) devem sempre ser tratados \
    como de segurança, com orientação clara para NÃO compartilhar essas informações.\n\n\
    Se o conteúdo estiver claramente fora do contexto de atendimento financeiro \
    (por exemplo, perguntas genéricas como 'que horas são?'), classifique como \
    Improdutivo em uma subcategoria de mensagem fora de escopo.";

/// Build the user prompt around the normalized email text. The allowed
/// subcategory list is generated from [`SubCategory::ALL`] so the prompt and
/// the rule branches never drift apart.
pub fn build_user_prompt(email_text: &str) -> String {
    let subcategories = SubCategory::ALL
        .iter()
        .map(|s| format!("   - \"{}\"", s.as_str()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Você receberá o texto de um e-mail enviado por um cliente.

Sua tarefa é:
1. Classificar o email em uma das categorias principais: "Produtivo" ou "Improdutivo".
2. Definir uma subcategoria de atendimento, por exemplo:
{subcategories}
3. Explicar resumidamente o motivo da classificação.
4. Sugerir uma resposta automática adequada, em português, com tom profissional e cordial.

Regras:
- "Produtivo": o email pede ajuda, traz dúvida, reclamação, solicitação, acompanhamento de caso
  ou qualquer coisa que possa exigir ação da equipe, relacionada aos serviços financeiros.
- "Improdutivo": o email é apenas uma saudação, agradecimento, felicitação, mensagem genérica
  ou algo que não exige ação, ou ainda está claramente fora do contexto dos serviços da empresa.
- Se o e-mail mencionar pedido de CVV, senha, dados completos do cartão ou sinais de golpe,
  priorize subcategorias de segurança como "Fraude / cartão clonado" ou
  "Orientação de segurança / possível golpe" e oriente o cliente a NÃO compartilhar dados sensíveis.

Responda APENAS com um JSON válido, sem comentários, no formato:

{{
  "category": "Produtivo ou Improdutivo",
  "sub_category": "nome da subcategoria",
  "reason": "explicação curta da classificação",
  "auto_reply": "texto da resposta automática sugerida"
}}

Email recebido:
"""{email_text}""""#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_lists_every_subcategory() {
        let prompt = build_user_prompt("qualquer texto");
        for sub in SubCategory::ALL {
            assert!(
                prompt.contains(sub.as_str()),
                "prompt is missing subcategory: {}",
                sub.as_str()
            );
        }
    }

    #[test]
    fn test_user_prompt_embeds_email_text() {
        let prompt = build_user_prompt("Meu boleto venceu ontem");
        assert!(prompt.contains("\"\"\"Meu boleto venceu ontem\"\"\""));
    }

    #[test]
    fn test_user_prompt_shows_expected_json_shape() {
        let prompt = build_user_prompt("oi");
        assert!(prompt.contains("\"category\""));
        assert!(prompt.contains("\"sub_category\""));
        assert!(prompt.contains("\"reason\""));
        assert!(prompt.contains("\"auto_reply\""));
    }

    #[test]
    fn test_system_prompt_states_both_categories() {
        assert!(SYSTEM_PROMPT.contains("Produtivo"));
        assert!(SYSTEM_PROMPT.contains("Improdutivo"));
    }
}
