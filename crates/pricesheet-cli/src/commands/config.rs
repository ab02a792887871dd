use pricesheet_core::config::{load_config, HeuristicConfig};
use pricesheet_core::error::PriceSheetError;
use std::path::Path;

use crate::output;

pub fn defaults() -> Result<(), PriceSheetError> {
    output::json::print(&HeuristicConfig::default())
}

pub fn validate(file: &Path) -> Result<(), PriceSheetError> {
    let config = load_config(file)?;

    println!("Config '{}' is valid.", file.display());
    println!(
        "  Category: first {} line(s), length {}..{} (exclusive)",
        config.category_scan_lines, config.category_min_len, config.category_max_len
    );
    println!(
        "  Subcategory: lines {}..={}, length {}..{} (exclusive)",
        config.subcategory_first_line,
        config.subcategory_last_line,
        config.subcategory_min_len,
        config.subcategory_max_len
    );
    println!(
        "  Excluded prefixes: {}",
        config.subcategory_excluded_prefixes.join(", ")
    );

    // Check for potential issues (warnings, not errors)
    let defaults = HeuristicConfig::default();
    let mut warnings = Vec::new();
    if config.category_scan_lines == 0 {
        warnings.push(format!(
            "category_scan_lines is 0, every document will be named '{}'",
            config.default_category_name
        ));
    }
    if config.subcategory_max_len > 200 || config.category_max_len > 200 {
        warnings.push("very long names allowed; paragraphs may be suggested as names".to_string());
    }
    if config.subcategory_excluded_prefixes.is_empty() {
        warnings.push(format!(
            "no excluded prefixes (defaults: {})",
            defaults.subcategory_excluded_prefixes.join(", ")
        ));
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
