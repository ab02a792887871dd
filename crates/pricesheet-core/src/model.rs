use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A trimmed, non-empty line of decoded text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedLine {
    /// Position among the non-empty lines; the naming windows count this.
    pub index: usize,
    /// 1-based line number in the decoded text, blank lines included.
    pub source_line: usize,
    pub text: String,
}

/// A keyed column definition derived from a header line token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sublabel: Option<String>,
}

impl ColumnSpec {
    /// Column for the token found at `position` in a split header line.
    pub fn at_position(position: usize, label: &str) -> Self {
        ColumnSpec {
            key: format!("col_{position}"),
            label: label.to_string(),
            sublabel: None,
        }
    }
}

/// One pricing row: column key -> raw cell text.
pub type DataRow = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionType {
    Table,
    /// Pages with no recoverable rows are assumed to be scanned images.
    #[default]
    ImageGallery,
}

impl SectionType {
    pub fn for_row_count(rows: usize) -> SectionType {
        if rows > 0 {
            SectionType::Table
        } else {
            SectionType::ImageGallery
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionType::Table => write!(f, "table"),
            SectionType::ImageGallery => write!(f, "image-gallery"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestions {
    pub category_name: String,
    pub subcategory_name: String,
    #[serde(rename = "type")]
    pub section_type: SectionType,
}

/// Table proposal produced from one decoded PDF, held until an operator
/// confirms it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub columns: Vec<ColumnSpec>,
    pub data: Vec<DataRow>,
    pub suggestions: Suggestions,
}

impl ExtractionResult {
    pub fn is_table(&self) -> bool {
        self.suggestions.section_type == SectionType::Table
    }
}
