// src/extract/mod.rs
// Text extraction for uploaded .txt and .pdf email files

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type. Please upload a .txt or .pdf file.")]
    UnsupportedType,

    #[error("Could not extract text from the uploaded file.")]
    Empty,

    #[error("PDF is password protected. Please provide an unencrypted version.")]
    EncryptedPdf,

    #[error("failed to read PDF: {0}")]
    Pdf(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Pdf,
}

/// Decide how to treat an upload. The filename extension is checked first,
/// then the declared part content type, then a mime guess from the name;
/// the text branch is tried before the PDF branch. Anything that is not
/// plain text or PDF is unsupported.
pub fn detect_kind(filename: &str, content_type: Option<&str>) -> Option<FileKind> {
    let name = filename.to_lowercase();
    let declared = content_type.unwrap_or("").to_lowercase();
    let guessed = mime_guess::from_path(&name)
        .first_raw()
        .unwrap_or("")
        .to_lowercase();

    if name.ends_with(".txt") || declared.contains("text/plain") || guessed == "text/plain" {
        return Some(FileKind::Text);
    }
    if name.ends_with(".pdf") || declared.contains("pdf") || guessed.contains("pdf") {
        return Some(FileKind::Pdf);
    }
    None
}

/// Extract text for a detected kind. Whitespace-only extraction is an error
/// so the caller can reject the upload instead of classifying nothing.
pub fn extract_text(kind: FileKind, bytes: &[u8]) -> Result<String, ExtractError> {
    let text = match kind {
        FileKind::Text => decode_text(bytes),
        FileKind::Pdf => extract_pdf(bytes)?,
    };
    if text.trim().is_empty() {
        return Err(ExtractError::Empty);
    }
    Ok(text)
}

/// Convenience for the upload handler: detect, then extract.
pub fn extract_upload(
    filename: &str,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<String, ExtractError> {
    let kind = detect_kind(filename, content_type).ok_or(ExtractError::UnsupportedType)?;
    extract_text(kind, bytes)
}

// Strict UTF-8 first; Windows-1252 as the lossy fallback for legacy exports.
fn decode_text(bytes: &[u8]) -> String {
    let (content, _, had_errors) = encoding_rs::UTF_8.decode(bytes);
    if !had_errors {
        return content.into_owned();
    }
    let (content, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    content.into_owned()
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    // Encrypted documents make pdf-extract produce garbage or panic-adjacent
    // errors, so check up front with lopdf.
    let doc = lopdf::Document::load_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))?;
    if doc.is_encrypted() {
        return Err(ExtractError::EncryptedPdf);
    }

    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}
