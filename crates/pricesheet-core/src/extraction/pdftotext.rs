use crate::error::PriceSheetError;
use crate::extraction::{DecodedDocument, PdfDecoder};
use std::io::Write;
use std::process::{Command, Output};

/// PDF decoding backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` so table columns stay separated by runs of
/// spaces, which is what the cell splitter keys on.
pub struct PdftotextDecoder;

impl PdftotextDecoder {
    pub fn new() -> Self {
        PdftotextDecoder
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfDecoder for PdftotextDecoder {
    fn decode(&self, pdf_bytes: &[u8]) -> Result<DecodedDocument, PriceSheetError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| PriceSheetError::Decode(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| PriceSheetError::Decode(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PriceSheetError::PdftotextNotFound
                } else {
                    PriceSheetError::Decode(format!("pdftotext failed: {}", e))
                }
            })?;

        let text = decoded_stdout(output)?;
        tracing::debug!(bytes = pdf_bytes.len(), chars = text.len(), "pdftotext finished");

        Ok(DecodedDocument::from_text(text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

fn decoded_stdout(output: Output) -> Result<String, PriceSheetError> {
    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(PriceSheetError::PdftotextFailed { code, stderr });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn exit_output(code: i32, stdout: &[u8], stderr: &[u8]) -> Output {
        use std::os::unix::process::ExitStatusExt;
        Output {
            status: std::process::ExitStatus::from_raw(code << 8),
            stdout: stdout.to_vec(),
            stderr: stderr.to_vec(),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_exit_maps_to_error() {
        let out = exit_output(1, b"", b"Syntax Error: Couldn't find trailer dictionary\n");
        match decoded_stdout(out) {
            Err(PriceSheetError::PdftotextFailed { code, stderr }) => {
                assert_eq!(code, 1);
                assert!(stderr.starts_with("Syntax Error"));
            }
            other => panic!("expected PdftotextFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_exit_returns_text() {
        let out = exit_output(0, b"FLYERS\x0c", b"");
        assert_eq!(decoded_stdout(out).unwrap(), "FLYERS\x0c");
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(PdftotextDecoder::new().backend_name(), "pdftotext");
    }
}
