use crate::model::ExtractionResult;
use serde::{Deserialize, Serialize};

pub const TRACE_SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableState {
    #[default]
    Outside,
    Inside,
}

/// How the scan treated one prepared line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineClass {
    /// First header line; defined the columns.
    Header,
    /// Later header line; reopened the section, columns unchanged.
    HeaderRepeat,
    Terminator,
    DataRow,
    IgnoredOutsideTable,
    IgnoredNoDigits,
    IgnoredNoCells,
}

impl LineClass {
    pub fn label(&self) -> &'static str {
        match self {
            LineClass::Header => "header",
            LineClass::HeaderRepeat => "header (repeat)",
            LineClass::Terminator => "terminator",
            LineClass::DataRow => "row",
            LineClass::IgnoredOutsideTable => "skip: outside table",
            LineClass::IgnoredNoDigits => "skip: no digits",
            LineClass::IgnoredNoCells => "skip: no cells",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDecision {
    pub index: usize,
    /// 1-based line number in the decoded text.
    pub source_line: usize,
    pub text: String,
    pub class: LineClass,
    pub state_after: TableState,
}

/// A suggested name and the line it came from (`None` when defaulted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameDecision {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_line: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionTrace {
    pub trace_schema_version: String,
    pub lines: Vec<LineDecision>,
    pub category: NameDecision,
    pub subcategory: NameDecision,
    pub result: ExtractionResult,
}

impl ExtractionTrace {
    pub fn count(&self, class: LineClass) -> usize {
        self.lines.iter().filter(|l| l.class == class).count()
    }
}
