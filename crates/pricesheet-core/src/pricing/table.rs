use super::lines::{has_digit, is_header_line, is_terminator_line, split_cells};
use crate::model::{ColumnSpec, DataRow, ExtractedLine};
use crate::trace::{LineClass, LineDecision, TableState};

/// Outcome of a single pass over the prepared lines.
#[derive(Debug, Clone, Default)]
pub struct TableScan {
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<DataRow>,
    pub decisions: Vec<LineDecision>,
}

/// Walk the lines once, collecting the column schema from the first header
/// line and data rows while inside a table section.
///
/// A header line opens a section; a terminator line (`Notes:` ...) closes it
/// without discarding the columns. Reaching the end of input while inside a
/// section needs no action.
pub fn scan_table(lines: &[ExtractedLine]) -> TableScan {
    let mut scan = TableScan::default();
    let mut state = TableState::Outside;

    for line in lines {
        let text = line.text.as_str();

        let class = if is_header_line(text) {
            state = TableState::Inside;
            if scan.columns.is_empty() {
                scan.columns = parse_header(text);
                LineClass::Header
            } else {
                LineClass::HeaderRepeat
            }
        } else if is_terminator_line(text) {
            state = TableState::Outside;
            LineClass::Terminator
        } else if state == TableState::Outside {
            LineClass::IgnoredOutsideTable
        } else if !has_digit(text) {
            LineClass::IgnoredNoDigits
        } else {
            match parse_row(text, &scan.columns) {
                Some(row) => {
                    scan.rows.push(row);
                    LineClass::DataRow
                }
                None => LineClass::IgnoredNoCells,
            }
        };

        scan.decisions.push(LineDecision {
            index: line.index,
            source_line: line.source_line,
            text: line.text.clone(),
            class,
            state_after: state,
        });
    }

    scan
}

/// Columns keyed by split position, so a dropped empty token leaves a gap
/// in the key sequence.
fn parse_header(line: &str) -> Vec<ColumnSpec> {
    split_cells(line)
        .into_iter()
        .enumerate()
        .filter_map(|(position, token)| {
            let label = token.trim();
            (!label.is_empty()).then(|| ColumnSpec::at_position(position, label))
        })
        .collect()
}

/// Cells are matched to columns by array index; extra cells are dropped.
fn parse_row(line: &str, columns: &[ColumnSpec]) -> Option<DataRow> {
    let mut row = DataRow::new();
    for (token, column) in split_cells(line).into_iter().zip(columns) {
        row.insert(column.key.clone(), token.trim().to_string());
    }

    if row.is_empty() {
        None
    } else {
        Some(row)
    }
}
