use crate::error::PriceSheetError;
use crate::model::{ColumnSpec, DataRow, ExtractionResult, SectionType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// An operator-confirmed subcategory, ready to be appended to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryDraft {
    pub category_name: String,
    pub subcategory_name: String,
    #[serde(rename = "type")]
    pub kind: SectionType,
    pub columns: Vec<ColumnSpec>,
    pub data: Vec<DataRow>,
}

impl SubcategoryDraft {
    /// Seed a draft from an extraction, taking the suggested names as-is.
    pub fn from_result(result: ExtractionResult) -> Self {
        SubcategoryDraft {
            category_name: result.suggestions.category_name,
            subcategory_name: result.suggestions.subcategory_name,
            kind: result.suggestions.section_type,
            columns: result.columns,
            data: result.data,
        }
    }

    /// Replace the suggested names with the operator's choice.
    pub fn with_names(mut self, category: &str, subcategory: &str) -> Result<Self, PriceSheetError> {
        let category = category.trim();
        let subcategory = subcategory.trim();
        if category.is_empty() {
            return Err(PriceSheetError::DraftInvalid(
                "category name must not be blank".into(),
            ));
        }
        if subcategory.is_empty() {
            return Err(PriceSheetError::DraftInvalid(
                "subcategory name must not be blank".into(),
            ));
        }
        self.category_name = category.to_string();
        self.subcategory_name = subcategory.to_string();
        Ok(self)
    }

    /// Drop cells whose key has no column (including `qty`/`discount` when no
    /// column carries those keys), drop rows left empty, and re-derive the
    /// section type from what remains.
    pub fn normalize(mut self) -> Self {
        let keys: BTreeSet<&str> = self.columns.iter().map(|c| c.key.as_str()).collect();
        for row in &mut self.data {
            row.retain(|key, _| keys.contains(key.as_str()));
        }
        self.data.retain(|row| !row.is_empty());
        self.kind = SectionType::for_row_count(self.data.len());
        self
    }
}

/// Append-only sink for confirmed drafts.
pub trait DocumentStore {
    fn append(&mut self, draft: &SubcategoryDraft) -> Result<(), PriceSheetError>;
}

/// Stores drafts as JSON lines, one draft per line.
pub struct JsonLinesStore {
    path: PathBuf,
}

impl JsonLinesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonLinesStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back every stored draft, in append order.
    pub fn load_all(&self) -> Result<Vec<SubcategoryDraft>, PriceSheetError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).map_err(PriceSheetError::from))
            .collect()
    }
}

impl DocumentStore for JsonLinesStore {
    fn append(&mut self, draft: &SubcategoryDraft) -> Result<(), PriceSheetError> {
        let line = serde_json::to_string(draft)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        tracing::debug!(
            path = %self.path.display(),
            category = %draft.category_name,
            subcategory = %draft.subcategory_name,
            rows = draft.data.len(),
            "stored subcategory draft"
        );
        Ok(())
    }
}
