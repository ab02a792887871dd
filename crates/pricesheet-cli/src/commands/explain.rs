use pricesheet_core::error::PriceSheetError;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    config_file: Option<PathBuf>,
    output_format: &str,
) -> Result<(), PriceSheetError> {
    let extractor = super::build_extractor(config_file)?;
    let input = super::decode_file(&input_file)?;
    tracing::debug!(
        backend = %input.backend,
        pages = input.document.page_count,
        "explaining extraction"
    );
    let trace = extractor.explain(&input.document.text);

    match output_format {
        "json" => output::json::print(&trace)?,
        _ => output::table::print_trace(&trace),
    }

    Ok(())
}
