use crate::error::PriceSheetError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound for any line-position setting.
pub const MAX_SCAN_LINE: usize = 10_000;

/// Thresholds for the naming suggestions.
///
/// Length bands are exclusive on both ends and counted in characters.
/// Line positions index the prepared (trimmed, non-empty) line list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    pub category_scan_lines: usize,
    pub category_min_len: usize,
    pub category_max_len: usize,
    pub subcategory_first_line: usize,
    /// Inclusive.
    pub subcategory_last_line: usize,
    pub subcategory_min_len: usize,
    pub subcategory_max_len: usize,
    /// A line starting with any of these is never a subcategory name.
    /// Lines starting with `R` and a digit (rand prices) are always excluded.
    pub subcategory_excluded_prefixes: Vec<String>,
    pub default_category_name: String,
    pub default_subcategory_name: String,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        HeuristicConfig {
            category_scan_lines: 10,
            category_min_len: 5,
            category_max_len: 50,
            subcategory_first_line: 1,
            subcategory_last_line: 14,
            subcategory_min_len: 5,
            subcategory_max_len: 60,
            subcategory_excluded_prefixes: vec!["Note".into(), "Price".into()],
            default_category_name: "New Category".into(),
            default_subcategory_name: "New Subcategory".into(),
        }
    }
}

/// Load a heuristic config from a JSON file. Missing fields keep their defaults.
pub fn load_config(path: &Path) -> Result<HeuristicConfig, PriceSheetError> {
    let content = std::fs::read_to_string(path).map_err(|e| PriceSheetError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let config: HeuristicConfig =
        serde_json::from_str(&content).map_err(|e| PriceSheetError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_config(&config)?;
    Ok(config)
}

/// Parse a heuristic config from a JSON string (no file path context).
pub fn parse_config_str(json: &str) -> Result<HeuristicConfig, PriceSheetError> {
    let config: HeuristicConfig = serde_json::from_str(json)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &HeuristicConfig) -> Result<(), PriceSheetError> {
    if config.category_min_len >= config.category_max_len {
        return Err(PriceSheetError::ConfigInvalid(format!(
            "category length band is empty ({} >= {})",
            config.category_min_len, config.category_max_len
        )));
    }

    if config.subcategory_min_len >= config.subcategory_max_len {
        return Err(PriceSheetError::ConfigInvalid(format!(
            "subcategory length band is empty ({} >= {})",
            config.subcategory_min_len, config.subcategory_max_len
        )));
    }

    if config.subcategory_first_line > config.subcategory_last_line {
        return Err(PriceSheetError::ConfigInvalid(format!(
            "subcategory scan starts after it ends ({} > {})",
            config.subcategory_first_line, config.subcategory_last_line
        )));
    }

    if config.category_scan_lines > MAX_SCAN_LINE
        || config.subcategory_last_line > MAX_SCAN_LINE
    {
        return Err(PriceSheetError::ConfigInvalid(format!(
            "line positions must not exceed {MAX_SCAN_LINE}"
        )));
    }

    if config.default_category_name.trim().is_empty()
        || config.default_subcategory_name.trim().is_empty()
    {
        return Err(PriceSheetError::ConfigInvalid(
            "default names must not be blank".into(),
        ));
    }

    if config
        .subcategory_excluded_prefixes
        .iter()
        .any(|p| p.is_empty())
    {
        return Err(PriceSheetError::ConfigInvalid(
            "excluded prefixes must not be empty strings".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&HeuristicConfig::default()).is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = parse_config_str(r#"{ "category_max_len": 80 }"#).unwrap();
        assert_eq!(cfg.category_max_len, 80);
        assert_eq!(cfg.category_scan_lines, 10);
        assert_eq!(cfg.default_subcategory_name, "New Subcategory");
    }

    #[test]
    fn test_empty_length_band_rejected() {
        let json = r#"{ "subcategory_min_len": 60, "subcategory_max_len": 60 }"#;
        assert!(matches!(
            parse_config_str(json),
            Err(PriceSheetError::ConfigInvalid(_))
        ));
    }

    #[test]
    fn test_inverted_scan_window_rejected() {
        let json = r#"{ "subcategory_first_line": 5, "subcategory_last_line": 2 }"#;
        assert!(parse_config_str(json).is_err());
    }

    #[test]
    fn test_huge_scan_window_rejected() {
        let json = r#"{ "subcategory_last_line": 18446744073709551615 }"#;
        assert!(matches!(
            parse_config_str(json),
            Err(PriceSheetError::ConfigInvalid(_))
        ));
        assert!(parse_config_str(r#"{ "category_scan_lines": 10001 }"#).is_err());
        assert!(parse_config_str(r#"{ "subcategory_last_line": 10000 }"#).is_ok());
    }

    #[test]
    fn test_blank_prefix_rejected() {
        let json = r#"{ "subcategory_excluded_prefixes": ["Note", ""] }"#;
        assert!(parse_config_str(json).is_err());
    }

    #[test]
    fn test_load_config_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        match load_config(file.path()) {
            Err(PriceSheetError::ConfigLoad { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected ConfigLoad, got {other:?}"),
        }
    }
}
