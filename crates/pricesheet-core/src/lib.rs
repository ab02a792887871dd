pub mod config;
pub mod draft;
pub mod error;
pub mod extraction;
pub mod model;
pub mod pricing;
pub mod trace;

use error::PriceSheetError;
use extraction::{ensure_pdf, DecodedDocument, PdfDecoder};
use model::ExtractionResult;
use pricing::PricingTextExtractor;
use serde::Serialize;

pub use pricing::{explain, extract};

/// A table proposal together with what is known about the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfImport {
    pub page_count: usize,
    pub backend: String,
    pub result: ExtractionResult,
}

/// Main API entry point: turn an uploaded price-list PDF into a table
/// proposal.
///
/// Fails only when the upload is not a PDF or cannot be decoded. A PDF
/// without a recognisable table is a valid, empty proposal.
pub fn import_pdf(
    pdf_bytes: &[u8],
    decoder: &dyn PdfDecoder,
    extractor: &PricingTextExtractor,
) -> Result<PdfImport, PriceSheetError> {
    let document = decode_pdf(pdf_bytes, decoder)?;
    Ok(import_document(document, decoder.backend_name(), extractor))
}

/// Guard and decode an upload without extracting.
pub fn decode_pdf(
    pdf_bytes: &[u8],
    decoder: &dyn PdfDecoder,
) -> Result<DecodedDocument, PriceSheetError> {
    ensure_pdf(pdf_bytes)?;
    decoder.decode(pdf_bytes)
}

/// Same as [`import_pdf`] for text that was decoded elsewhere.
pub fn import_text(text: &str, extractor: &PricingTextExtractor) -> PdfImport {
    import_document(DecodedDocument::from_text(text), "text", extractor)
}

/// Extract from an already decoded document, tagging it with the backend
/// that produced it.
pub fn import_document(
    document: DecodedDocument,
    backend: &str,
    extractor: &PricingTextExtractor,
) -> PdfImport {
    let result = extractor.extract(&document.text);

    tracing::debug!(
        backend,
        pages = document.page_count,
        columns = result.columns.len(),
        rows = result.data.len(),
        "extracted pricing table"
    );
    if !result.is_table() {
        tracing::info!(
            pages = document.page_count,
            "no pricing rows found, suggesting an image gallery"
        );
    }

    PdfImport {
        page_count: document.page_count,
        backend: backend.to_string(),
        result,
    }
}
