pub mod lines;
pub mod suggest;
pub mod table;

use crate::config::HeuristicConfig;
use crate::model::{ExtractionResult, SectionType, Suggestions};
use crate::trace::{ExtractionTrace, TRACE_SCHEMA_VERSION};
use lines::prepare_lines;
use suggest::{suggest_category, suggest_subcategory};
use table::scan_table;

/// Turns decoded price-list text into a table proposal for operator review.
///
/// Extraction is total: text without a recognisable table yields no columns,
/// no rows and an `image-gallery` suggestion.
#[derive(Debug, Clone, Default)]
pub struct PricingTextExtractor {
    config: HeuristicConfig,
}

impl PricingTextExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HeuristicConfig) -> Self {
        PricingTextExtractor { config }
    }

    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    pub fn extract(&self, text: &str) -> ExtractionResult {
        self.explain(text).result
    }

    /// Extract and keep the per-line classification and naming decisions.
    pub fn explain(&self, text: &str) -> ExtractionTrace {
        let lines = prepare_lines(text);
        let scan = scan_table(&lines);
        let category = suggest_category(&lines, &self.config);
        let subcategory = suggest_subcategory(&lines, &self.config);

        let result = ExtractionResult {
            suggestions: Suggestions {
                category_name: category.value.clone(),
                subcategory_name: subcategory.value.clone(),
                section_type: SectionType::for_row_count(scan.rows.len()),
            },
            columns: scan.columns,
            data: scan.rows,
        };

        ExtractionTrace {
            trace_schema_version: TRACE_SCHEMA_VERSION.to_string(),
            lines: scan.decisions,
            category,
            subcategory,
            result,
        }
    }
}

/// Extract with the default heuristics.
pub fn extract(text: &str) -> ExtractionResult {
    PricingTextExtractor::new().extract(text)
}

/// Explain an extraction with the default heuristics.
pub fn explain(text: &str) -> ExtractionTrace {
    PricingTextExtractor::new().explain(text)
}
