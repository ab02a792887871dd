pub mod config;
pub mod explain;
pub mod extract;

use pricesheet_core::config::load_config;
use pricesheet_core::error::PriceSheetError;
use pricesheet_core::extraction::pdftotext::PdftotextDecoder;
use pricesheet_core::extraction::{DecodedDocument, PdfDecoder};
use pricesheet_core::pricing::PricingTextExtractor;
use pricesheet_core::PdfImport;
use std::path::{Path, PathBuf};

pub(crate) fn build_extractor(
    config_file: Option<PathBuf>,
) -> Result<PricingTextExtractor, PriceSheetError> {
    match config_file {
        Some(path) => Ok(PricingTextExtractor::with_config(load_config(&path)?)),
        None => Ok(PricingTextExtractor::new()),
    }
}

/// A decoded input file and the backend that decoded it.
pub(crate) struct DecodedInput {
    pub document: DecodedDocument,
    pub backend: String,
}

/// Decode an input file: `.txt` is taken as already decoded, anything else
/// goes through pdftotext.
pub(crate) fn decode_file(input_file: &Path) -> Result<DecodedInput, PriceSheetError> {
    if is_text_file(input_file) {
        let text = std::fs::read_to_string(input_file)?;
        return Ok(DecodedInput {
            document: DecodedDocument::from_text(text),
            backend: "text".into(),
        });
    }

    let bytes = std::fs::read(input_file)?;
    let decoder = PdftotextDecoder::new();
    let document = pricesheet_core::decode_pdf(&bytes, &decoder)?;
    Ok(DecodedInput {
        document,
        backend: decoder.backend_name().to_string(),
    })
}

pub(crate) fn import_file(
    input_file: &Path,
    extractor: &PricingTextExtractor,
) -> Result<PdfImport, PriceSheetError> {
    let input = decode_file(input_file)?;
    Ok(pricesheet_core::import_document(
        input.document,
        &input.backend,
        extractor,
    ))
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn text_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_extract_and_explain_share_decoded_text() {
        let file = text_file("FLYERS A5\nQty  Price\n100  R350\x0cNotes: x\x0c");
        let extractor = PricingTextExtractor::new();

        let import = import_file(file.path(), &extractor).unwrap();
        let input = decode_file(file.path()).unwrap();

        assert_eq!(import.backend, input.backend);
        assert_eq!(import.page_count, input.document.page_count);
        assert_eq!(import.page_count, 2);
        assert_eq!(extractor.explain(&input.document.text).result, import.result);
    }

    #[test]
    fn test_non_pdf_rejected_on_both_paths() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"GIF89a").unwrap();
        let extractor = PricingTextExtractor::new();

        assert!(matches!(
            decode_file(file.path()),
            Err(PriceSheetError::NotPdf)
        ));
        assert!(matches!(
            import_file(file.path(), &extractor),
            Err(PriceSheetError::NotPdf)
        ));
    }
}
