// src/classifier/rules.rs
// Deterministic fallback classifier: an ordered, first-match-wins cascade

use super::contains_any;
use super::result::{Category, ClassificationResult, SubCategory};
use super::security;

const CARD_LIMIT_PHRASES: &[&str] = &[
    "aumento de limite",
    "aumentar o limite",
    "limite do cartão",
    "limite do cartao",
    "redução de limite",
    "reducao de limite",
    "diminuíram meu limite",
    "diminuiram meu limite",
    "aumento de crédito",
    "aumento de credito",
    "aumentar o crédito",
    "aumentar o credito",
    "limite de crédito",
    "limite de credito",
    "credito do cartão",
    "credito do cartao",
    "quero aumento de limite",
    "queria aumento de limite",
    "quero aumento de credito",
    "queria aumento de credito",
];

const BILLING_PHRASES: &[&str] = &[
    "fatura",
    "fatura em aberto",
    "cobrança indevida",
    "cobranca indevida",
    "lançamento indevido",
    "lancamento indevido",
    "parcela não reconhecida",
    "parcela nao reconhecida",
    "juros na fatura",
    "juros indevidos",
];

const PAYMENT_PHRASES: &[&str] = &[
    "paguei a fatura",
    "paguei o boleto",
    "pagamento não compensado",
    "pagamento nao compensado",
    "não foi identificado o pagamento",
    "nao foi identificado o pagamento",
    "data de vencimento",
    "segunda via da fatura",
    "segunda via do boleto",
];

const ACCESS_PHRASES: &[&str] = &[
    "não consigo acessar",
    "nao consigo acessar",
    "não consigo entrar",
    "nao consigo entrar",
    "senha inválida",
    "senha invalida",
    "esqueci minha senha",
    "trocar a senha",
    "aplicativo não abre",
    "aplicativo nao abre",
    "app não abre",
    "app nao abre",
    "login",
    "bloqueio de acesso",
];

const DOCUMENT_PHRASES: &[&str] = &[
    "segue em anexo",
    "estou enviando em anexo",
    "documentos em anexo",
    "comprovante em anexo",
    "anexo o comprovante",
];

const COURTESY_PHRASES: &[&str] = &[
    "feliz natal",
    "boas festas",
    "feliz ano novo",
    "parabéns",
    "parabens",
    "agradeço",
    "agradecimento",
    "obrigado",
    "obrigada",
    "grato",
    "grata",
];

const INTENT_WORDS: &[&str] = &[
    "quero",
    "queria",
    "preciso",
    "gostaria",
    "solicito",
    "reclamo",
    "reclamação",
    "reclamacao",
    "dúvida",
    "duvida",
];

const FINANCE_WORDS: &[&str] = &[
    "cartão",
    "cartao",
    "limite",
    "fatura",
    "boleto",
    "pagamento",
    "crédito",
    "credito",
    "conta",
    "empréstimo",
    "emprestimo",
];

const SUPPORT_WORDS: &[&str] = &[
    "solicitação",
    "solicitacao",
    "protocolo",
    "chamado",
    "ticket",
    "caso",
    "suporte",
    "atendimento",
    "reclamação",
    "reclamacao",
    "análise",
    "analise",
];

// Messages shorter than this (after trim, in characters) with no intent,
// finance word or question mark are treated as courtesy. Tunable heuristic.
const SHORT_MESSAGE_CHARS: usize = 30;

const CARD_LIMIT_REASON: &str =
    "O e-mail fala sobre aumento, redução ou dúvida em relação ao limite/crédito do cartão.";

const CARD_LIMIT_REPLY: &str = "Olá! Obrigado pelo contato.\n\n\
    Identificamos que sua mensagem trata sobre limite/crédito do cartão. \
    Nossa equipe irá verificar as informações do seu cadastro e do seu cartão para avaliar a possibilidade de ajuste.\n\n\
    Para agilizar, por favor responda este e-mail com:\n\
    - CPF do titular;\n\
    - Últimos 4 dígitos do cartão;\n\
    - Se deseja aumento, redução ou apenas esclarecimento sobre o limite.\n\n\
    Assim que a análise for concluída, retornaremos com a atualização do seu pedido.";

const BILLING_REASON: &str = "O texto menciona fatura, cobranças ou lançamentos questionados.";

const BILLING_REPLY: &str = "Olá! Obrigado por entrar em contato sobre sua fatura.\n\n\
    Identificamos que você está questionando lançamentos, valores ou cobranças indevidas. \
    Vamos abrir ou prosseguir com a análise dos itens informados.\n\n\
    Se ainda não enviou, por favor, responda este e-mail com:\n\
    - Número do cartão (apenas os 4 últimos dígitos);\n\
    - Mês de referência da fatura;\n\
    - Descrição dos lançamentos que deseja contestar.\n\n\
    Nossa equipe financeira irá avaliar e retornaremos com o posicionamento ou eventuais ajustes necessários.";

const PAYMENT_REASON: &str =
    "O e-mail cita pagamento de fatura ou boleto, ou dúvidas sobre compensação.";

const PAYMENT_REPLY: &str = "Olá! Obrigado pela mensagem.\n\n\
    Verificamos que sua dúvida está relacionada ao pagamento de fatura ou boleto. \
    Pagamentos podem levar até 3 dias úteis para compensar, dependendo da forma de pagamento e do banco utilizado.\n\n\
    Para seguir com a análise, pedimos que responda este e-mail com:\n\
    - Comprovante de pagamento anexado;\n\
    - Data em que o pagamento foi realizado;\n\
    - Se foi feito via TED, PIX, boleto ou débito automático.\n\n\
    Após recebermos as informações, daremos sequência à verificação e retornaremos com uma atualização.";

const ACCESS_REASON: &str = "O usuário relata dificuldade de acesso, senha ou uso do aplicativo.";

const ACCESS_REPLY: &str = "Olá! Obrigado por nos avisar sobre a dificuldade de acesso.\n\n\
    Sua mensagem indica problemas para acessar a conta ou o aplicativo (login, senha ou bloqueio). \
    Para ajudar com segurança, pedimos que:\n\
    1) Não envie sua senha por e-mail;\n\
    2) Confirme se já tentou a opção 'Esqueci minha senha' no app ou site;\n\
    3) Informe, respondendo este e-mail:\n   - CPF do titular;\n   - Sistema operacional do celular (Android ou iOS);\n   - Mensagem de erro exibida (se houver).\n\n\
    Com essas informações, nossa equipe técnica poderá orientar o melhor procedimento para restabelecer seu acesso.";

const DOCUMENTS_REASON: &str =
    "O e-mail menciona envio de documentos ou comprovantes para análise.";

const DOCUMENTS_REPLY: &str = "Olá! Obrigado pelo envio dos documentos.\n\n\
    Recebemos os arquivos anexados e vamos direcioná-los para a área responsável para conferência. \
    Caso seja necessária alguma informação complementar ou novo documento, retornaremos por este mesmo canal.\n\n\
    Se desejar, na resposta a este e-mail, você pode informar o número de protocolo (se já houver) para facilitar o acompanhamento interno.";

const COURTESY_REASON: &str =
    "A mensagem é de cortesia/felicitação, sem uma solicitação clara de ação.";

const COURTESY_REPLY: &str = "Olá! Muito obrigado pela mensagem e pelo carinho.\n\n\
    Ficamos felizes com o seu contato. Sempre que precisar de ajuda com nossos serviços, \
    estamos à disposição por aqui.\n\n\
    Tenha um excelente dia!";

const SHORT_MESSAGE_REASON: &str =
    "A mensagem é curta e não apresenta uma solicitação clara de ação.";

const SHORT_MESSAGE_REPLY: &str = "Olá! Muito obrigado pela mensagem.\n\n\
    Se em algum momento você precisar de ajuda com nossos serviços, \
    basta responder por aqui.\n\n\
    Tenha um excelente dia!";

const GENERIC_REASON: &str =
    "O e-mail parece tratar de uma solicitação ou dúvida relacionada ao atendimento financeiro.";

const GENERIC_REPLY: &str = "Olá! Obrigado pelo seu contato.\n\n\
    Recebemos sua mensagem e vamos direcioná-la para a área responsável para análise. \
    Caso seja necessário algum documento ou informação adicional, entraremos em contato por este mesmo e-mail.\n\n\
    Se tiver número de protocolo ou mais detalhes sobre o que precisa, você pode responder esta mensagem para complementar.";

const OUT_OF_SCOPE_REASON: &str =
    "O texto não apresenta pedido claro relacionado aos serviços financeiros da empresa.";

const OUT_OF_SCOPE_REPLY: &str = "Olá! Obrigado pela mensagem.\n\n\
    Identificamos que o conteúdo não traz uma solicitação ou dúvida diretamente relacionada aos nossos serviços financeiros. \
    Se você precisar de algum suporte ou tiver uma solicitação específica, por favor responda este e-mail \
    detalhando o que precisa, e teremos prazer em ajudar.\n\n\
    Estamos à disposição.";

/// Classify without the model. Security has the highest priority; after
/// that the branches run in order and the first match wins, ending in the
/// out-of-scope default. Always returns a result.
pub fn classify(text: &str) -> ClassificationResult {
    if let Some(security_case) = security::detect(text) {
        return security_case;
    }

    let text = text.to_lowercase();

    if contains_any(&text, CARD_LIMIT_PHRASES)
        || (text.contains("aumento")
            && (text.contains("limite") || text.contains("credito") || text.contains("crédito")))
    {
        return ClassificationResult::new(
            Category::Productive,
            SubCategory::CardLimit,
            CARD_LIMIT_REASON,
            CARD_LIMIT_REPLY,
        );
    }

    if contains_any(&text, BILLING_PHRASES) {
        return ClassificationResult::new(
            Category::Productive,
            SubCategory::Billing,
            BILLING_REASON,
            BILLING_REPLY,
        );
    }

    if contains_any(&text, PAYMENT_PHRASES) {
        return ClassificationResult::new(
            Category::Productive,
            SubCategory::Payment,
            PAYMENT_REASON,
            PAYMENT_REPLY,
        );
    }

    if contains_any(&text, ACCESS_PHRASES) {
        return ClassificationResult::new(
            Category::Productive,
            SubCategory::AccountAccess,
            ACCESS_REASON,
            ACCESS_REPLY,
        );
    }

    if contains_any(&text, DOCUMENT_PHRASES) {
        return ClassificationResult::new(
            Category::Productive,
            SubCategory::Documents,
            DOCUMENTS_REASON,
            DOCUMENTS_REPLY,
        );
    }

    let courtesy = contains_any(&text, COURTESY_PHRASES);
    let has_intent = contains_any(&text, INTENT_WORDS);
    let has_finance = contains_any(&text, FINANCE_WORDS);
    let has_support = contains_any(&text, SUPPORT_WORDS);
    let has_question = text.contains('?');

    if courtesy && !has_intent && !has_question {
        return ClassificationResult::new(
            Category::NonProductive,
            SubCategory::Courtesy,
            COURTESY_REASON,
            COURTESY_REPLY,
        );
    }

    // Covers the empty string as well: nothing to act on reads as courtesy.
    if text.trim().chars().count() < SHORT_MESSAGE_CHARS
        && !has_intent
        && !has_finance
        && !has_question
    {
        return ClassificationResult::new(
            Category::NonProductive,
            SubCategory::Courtesy,
            SHORT_MESSAGE_REASON,
            SHORT_MESSAGE_REPLY,
        );
    }

    // Only treat as productive when there is intent or a question and the
    // text is recognizably about the company's services.
    if (has_intent || has_question) && (has_finance || has_support) {
        return ClassificationResult::new(
            Category::Productive,
            SubCategory::GenericRequest,
            GENERIC_REASON,
            GENERIC_REPLY,
        );
    }

    ClassificationResult::new(
        Category::NonProductive,
        SubCategory::OutOfScope,
        OUT_OF_SCOPE_REASON,
        OUT_OF_SCOPE_REPLY,
    )
}
