pub mod pdftotext;

use crate::error::PriceSheetError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Page separator emitted by pdftotext.
pub const PAGE_BREAK: char = '\x0c';

/// Plain text decoded from an uploaded PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDocument {
    pub text: String,
    pub page_count: usize,
}

impl DecodedDocument {
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let page_count = count_pages(&text);
        DecodedDocument { text, page_count }
    }
}

/// Trait for PDF-to-text backends.
pub trait PdfDecoder: Send + Sync {
    /// Decode PDF bytes into layout-preserving plain text.
    fn decode(&self, pdf_bytes: &[u8]) -> Result<DecodedDocument, PriceSheetError>;

    /// Name of this decoding backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Reject uploads that are empty or not PDFs before any decoding work.
pub fn ensure_pdf(bytes: &[u8]) -> Result<(), PriceSheetError> {
    if bytes.is_empty() {
        return Err(PriceSheetError::EmptyUpload);
    }
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(PriceSheetError::NotPdf);
    }
    Ok(())
}

/// Count form-feed separated pages, ignoring the empty segment pdftotext
/// leaves after the final page break. Never less than one.
pub fn count_pages(text: &str) -> usize {
    let segments = text.split(PAGE_BREAK).count();
    let trailing_empty = text.ends_with(PAGE_BREAK);
    let pages = if trailing_empty {
        segments - 1
    } else {
        segments
    };
    pages.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_pdf_accepts_magic() {
        assert!(ensure_pdf(b"%PDF-1.7\n...").is_ok());
    }

    #[test]
    fn test_ensure_pdf_rejects_other_content() {
        assert!(matches!(
            ensure_pdf(b"\x89PNG\r\n"),
            Err(PriceSheetError::NotPdf)
        ));
        assert!(matches!(ensure_pdf(b""), Err(PriceSheetError::EmptyUpload)));
    }

    #[test]
    fn test_count_pages() {
        assert_eq!(count_pages(""), 1);
        assert_eq!(count_pages("one page"), 1);
        assert_eq!(count_pages("page one\x0cpage two\x0c"), 2);
        assert_eq!(count_pages("a\x0cb\x0cc"), 3);
    }
}
