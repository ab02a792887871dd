use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PriceSheetError {
    #[error("PDF decoding failed: {0}")]
    Decode(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("uploaded file is not a PDF (missing %PDF- header)")]
    NotPdf,

    #[error("uploaded file is empty")]
    EmptyUpload,

    #[error("failed to load heuristic config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid heuristic config: {0}")]
    ConfigInvalid(String),

    #[error("invalid subcategory draft: {0}")]
    DraftInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
