// src/classifier/security.rs
// Highest-priority detector for fraud reports and card-data phishing

use once_cell::sync::Lazy;
use regex::Regex;

use super::contains_any;
use super::result::{Category, ClassificationResult, SubCategory};

static RE_SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?;\n\r]+").expect("valid regex"));

// Cloned-card / unrecognized-purchase vocabulary, matched anywhere in the
// text. Accented and unaccented spellings are both listed because inputs
// arrive with inconsistent accents, especially from PDF extraction.
const FRAUD_PHRASES: &[&str] = &[
    "clonado",
    "cartão clonado",
    "cartao clonado",
    "fraude",
    "fraudaram",
    "compra que não fiz",
    "compra que nao fiz",
    "não reconheço",
    "nao reconheço",
    "nao reconheco",
    "compra não reconhecida",
    "compra nao reconhecida",
    "golpe no cartão",
    "golpe no cartao",
];

const REQUEST_VERBS: &[&str] = &[
    "enviar",
    "enviasse",
    "mandar",
    "mandasse",
    "passar",
    "fornecer",
    "pedir",
    "pediu",
    "pediram",
    "solicitar",
    "solicitou",
    "solicitaram",
];

const CARD_DATA_WORDS: &[&str] = &[
    "dados",
    "informações",
    "informacoes",
    "números",
    "numeros",
    "numero",
    "número",
    "codigo",
    "código",
    "codigo de seguranca",
    "código de segurança",
];

const CARD_WORDS: &[&str] = &[
    "cartão",
    "cartao",
    "cartões",
    "cartoes",
    "cartão de crédito",
    "cartao de credito",
];

const CHANNEL_WORDS: &[&str] = &[
    "whatsapp",
    "wpp",
    "zap",
    "zapzap",
    "mensagem",
    "msg",
];

const CVV_WORDS: &[&str] = &[
    "cvv",
    "cvc",
    "codigo de segurança",
    "codigo de seguranca",
    "código de segurança",
    "senha do cartão",
    "senha do cartao",
    "senha do cartão de crédito",
    "senha do cartão de credito",
    "senha do cartao de credito",
];

// High-confidence phrasings that skip the sentence-combination logic.
const EXPLICIT_PHRASES: &[&str] = &[
    "pediu os numeros do meu cartao",
    "pediram os numeros do meu cartao",
    "pediram os numeros do cartão",
    "pediram os dados do meu cartão",
    "me pediu os dados do cartão",
    "me pediu os dados do cartao",
    "estão pedindo os dados do cartão",
    "estao pedindo os dados do cartao",
    "pediram meu cvv",
    "pediu meu cvv",
    "pediram o meu cvv",
    "pediu o meu cvv",
];

const FRAUD_REASON: &str =
    "O e-mail cita possíveis compras não reconhecidas ou fraude no cartão.";

const FRAUD_REPLY: &str = "Olá! Sentimos muito pela situação relatada.\n\n\
    Identificamos que sua mensagem menciona possíveis compras não reconhecidas ou suspeita de fraude no cartão. \
    Por segurança, recomendamos que você:\n\
    1) Bloqueie o cartão imediatamente pelo app, internet banking ou central de atendimento;\n\
    2) Não compartilhe senhas ou códigos por e-mail, SMS ou mensagens de aplicativos;\n\
    3) Aguarde o contato da nossa equipe especializada, que irá analisar o caso e orientar sobre o próximo passo.\n\n\
    Se tiver algum número de protocolo, por favor informe na resposta a este e-mail para agilizar a análise.";

const SCAM_REASON: &str = "O e-mail menciona pedido de CVV, senha ou dados sensíveis do cartão, \
    indicando possível golpe ou necessidade de orientação de segurança.";

const SCAM_REPLY: &str = "Olá! Obrigado por nos avisar.\n\n\
    É muito importante nunca compartilhar os números completos do cartão, o código de segurança (CVV/CVC), \
    senhas ou códigos recebidos por SMS, WhatsApp ou e-mail, mesmo que a solicitação pareça confiável.\n\n\
    Recomendamos que você NÃO informe esses dados ao solicitante e, se desconfiar de golpe, \
    entre em contato imediatamente com a nossa central oficial pelos canais de atendimento informados \
    no verso do cartão ou em nosso site/app para verificar a situação e, se necessário, bloquear o cartão.\n\n\
    Se puder, responda este e-mail informando quem fez o pedido e por qual canal (telefone, e-mail, mensagem), \
    para que possamos orientar da melhor forma.";

/// True when some single sentence contains at least one member of every
/// group. Document-wide co-occurrence is not enough here; the groups must
/// land in the same sentence.
fn any_sentence(sentences: &[&str], groups: &[&[&str]]) -> bool {
    sentences
        .iter()
        .any(|sentence| groups.iter().all(|group| contains_any(sentence, group)))
}

/// Scan for security cases. Fraud reports win over phishing guidance; either
/// returns a fully-formed result that the rest of the pipeline must not
/// override. `None` means no security signal.
pub fn detect(text: &str) -> Option<ClassificationResult> {
    let text = text.to_lowercase();

    if contains_any(&text, FRAUD_PHRASES) {
        return Some(ClassificationResult::new(
            Category::Productive,
            SubCategory::Fraud,
            FRAUD_REASON,
            FRAUD_REPLY,
        ));
    }

    let sentences: Vec<&str> = RE_SENTENCE_BOUNDARY
        .split(&text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let data_or_cvv: Vec<&str> = CARD_DATA_WORDS
        .iter()
        .chain(CVV_WORDS.iter())
        .copied()
        .collect();

    let suspicious_combo = any_sentence(&sentences, &[REQUEST_VERBS, CARD_DATA_WORDS, CARD_WORDS])
        || any_sentence(&sentences, &[REQUEST_VERBS, CVV_WORDS])
        || any_sentence(&sentences, &[REQUEST_VERBS, CARD_WORDS, CHANNEL_WORDS])
        || any_sentence(&sentences, &[data_or_cvv.as_slice(), CARD_WORDS, CHANNEL_WORDS]);

    // Looser document-wide check: a CVV word and a request verb anywhere.
    let cvv_and_request =
        contains_any(&text, CVV_WORDS) && contains_any(&text, REQUEST_VERBS);

    if suspicious_combo || contains_any(&text, EXPLICIT_PHRASES) || cvv_and_request {
        return Some(ClassificationResult::new(
            Category::Productive,
            SubCategory::SecurityGuidance,
            SCAM_REASON,
            SCAM_REPLY,
        ));
    }

    None
}
