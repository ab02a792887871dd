use pricesheet_core::draft::{DocumentStore, JsonLinesStore, SubcategoryDraft};
use pricesheet_core::error::PriceSheetError;
use std::path::PathBuf;

use crate::output;

pub struct ExtractArgs {
    pub input_file: PathBuf,
    pub output_format: String,
    pub output_file: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub store_file: Option<PathBuf>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

pub fn run(args: ExtractArgs) -> Result<(), PriceSheetError> {
    tracing::debug!(file = %args.input_file.display(), "extracting pricing table");
    let extractor = super::build_extractor(args.config_file)?;
    let import = super::import_file(&args.input_file, &extractor)?;

    let output_str = match args.output_format.as_str() {
        "json" => serde_json::to_string_pretty(&import)?,
        _ => output::table::format_import(&import),
    };

    match &args.output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&import)?;
            std::fs::write(path, json)?;
            eprintln!(
                "Extracted {} column(s), {} row(s) from {} page(s), written to {}",
                import.result.columns.len(),
                import.result.data.len(),
                import.page_count,
                path.display()
            );
        }
        None => {
            println!("{output_str}");
        }
    }

    if let Some(store_path) = args.store_file {
        let suggested = import.result.suggestions.clone();
        let category = args.category.unwrap_or(suggested.category_name);
        let subcategory = args.subcategory.unwrap_or(suggested.subcategory_name);

        let draft = SubcategoryDraft::from_result(import.result)
            .with_names(&category, &subcategory)?
            .normalize();

        let mut store = JsonLinesStore::new(store_path);
        store.append(&draft)?;
        eprintln!(
            "Saved '{} / {}' ({}) to {}",
            draft.category_name,
            draft.subcategory_name,
            draft.kind,
            store.path().display()
        );
    }

    Ok(())
}
