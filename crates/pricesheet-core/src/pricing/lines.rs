use crate::model::ExtractedLine;
use regex::Regex;
use std::sync::LazyLock;

/// Tokens that mark a pricing table header ("Qty", paper weight "GSM", ...).
const HEADER_TOKENS: &[&str] = &["GSM", "Qty", "Quantity"];

/// A cell boundary in layout text: a gap of two or more whitespace
/// characters, or a single tab.
static CELL_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}|\t").expect("cell gap regex is valid"));

static TERMINATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:note|notes|additional|minimum):").expect("terminator regex is valid")
});

/// Split decoded text into trimmed, non-empty lines, numbered in order.
pub fn prepare_lines(text: &str) -> Vec<ExtractedLine> {
    text.split('\n')
        .enumerate()
        .map(|(raw, line)| (raw + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .enumerate()
        .map(|(index, (source_line, line))| ExtractedLine {
            index,
            source_line,
            text: line.to_string(),
        })
        .collect()
}

/// Split a line into cells on layout gaps.
///
/// Empty tokens are kept so callers can index by split position.
pub fn split_cells(line: &str) -> Vec<&str> {
    CELL_GAP.split(line).collect()
}

pub fn is_header_line(line: &str) -> bool {
    HEADER_TOKENS.iter().any(|token| line.contains(token))
}

pub fn is_terminator_line(line: &str) -> bool {
    TERMINATOR.is_match(line)
}

pub fn has_digit(line: &str) -> bool {
    line.bytes().any(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_lines_trims_and_drops_blanks() {
        let lines = prepare_lines("  FLYERS  \r\n\r\n\tA5 Gloss\n   \nQty  Price");
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["FLYERS", "A5 Gloss", "Qty  Price"]);
        assert_eq!(lines[2].index, 2);
    }

    #[test]
    fn test_prepare_lines_keeps_source_line_numbers() {
        let lines = prepare_lines("\nFLYERS\n\n\nQty  Price\n10  R5");
        let numbers: Vec<(usize, usize)> =
            lines.iter().map(|l| (l.index, l.source_line)).collect();
        assert_eq!(numbers, vec![(0, 2), (1, 5), (2, 6)]);
    }

    #[test]
    fn test_lone_carriage_return_is_not_a_break() {
        let lines = prepare_lines("one\rtwo");
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_split_cells_on_gaps_and_tabs() {
        assert_eq!(
            split_cells("Qty      GSM 300      GSM 350"),
            vec!["Qty", "GSM 300", "GSM 350"]
        );
        assert_eq!(split_cells("1-50\tR120.00"), vec!["1-50", "R120.00"]);
        // a single space is part of a cell
        assert_eq!(split_cells("Full Colour"), vec!["Full Colour"]);
    }

    #[test]
    fn test_split_cells_keeps_empty_edge_tokens() {
        assert_eq!(split_cells("\tQty"), vec!["", "Qty"]);
        assert_eq!(split_cells(""), vec![""]);
    }

    #[test]
    fn test_header_detection_is_case_sensitive() {
        assert!(is_header_line("Qty   Price"));
        assert!(is_header_line("Paper GSM"));
        assert!(is_header_line("Quantity  Single  Double"));
        assert!(!is_header_line("qty   price"));
        assert!(!is_header_line("Gsm weights"));
    }

    #[test]
    fn test_terminator_detection() {
        assert!(is_terminator_line("Notes: see below"));
        assert!(is_terminator_line("NOTE: excl. VAT"));
        assert!(is_terminator_line("additional: setup fee"));
        assert!(is_terminator_line("Minimum: 50 units"));
        assert!(!is_terminator_line("Note that prices exclude VAT"));
        assert!(!is_terminator_line("Notes : spaced colon"));
        assert!(!is_terminator_line("See Notes: below"));
    }

    #[test]
    fn test_has_digit() {
        assert!(has_digit("R120.00"));
        assert!(!has_digit("Prices on request"));
    }
}
