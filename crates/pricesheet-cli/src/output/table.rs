use pricesheet_core::model::ExtractionResult;
use pricesheet_core::trace::ExtractionTrace;
use pricesheet_core::PdfImport;

pub fn format_import(import: &PdfImport) -> String {
    let mut out = String::new();
    let result = &import.result;
    let s = &result.suggestions;

    out.push_str(&format!(
        "Source: {} page(s) via {}\n",
        import.page_count, import.backend
    ));
    out.push_str(&format!("Category:    {}\n", s.category_name));
    out.push_str(&format!("Subcategory: {}\n", s.subcategory_name));
    out.push_str(&format!("Type:        {}\n", s.section_type));

    if result.columns.is_empty() {
        out.push_str("\n  No pricing table found.\n");
        return out;
    }

    out.push('\n');
    out.push_str(&format_grid(result));

    if result.data.is_empty() {
        out.push_str("  (header found, no rows)\n");
    }

    out
}

fn format_grid(result: &ExtractionResult) -> String {
    let mut out = String::new();

    // Width per column: widest of label and cells
    let widths: Vec<usize> = result
        .columns
        .iter()
        .map(|col| {
            result
                .data
                .iter()
                .filter_map(|row| row.get(&col.key))
                .map(|v| v.chars().count())
                .chain(std::iter::once(col.label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = result
        .columns
        .iter()
        .zip(&widths)
        .map(|(col, w)| format!("{:<width$}", col.label, width = *w))
        .collect();
    out.push_str(&format!("  {}\n", header.join("  ").trim_end()));

    let rule_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&format!("  {}\n", "-".repeat(rule_len)));

    for row in &result.data {
        let cells: Vec<String> = result
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| {
                let value = row.get(&col.key).map(String::as_str).unwrap_or("-");
                format!("{:<width$}", value, width = *w)
            })
            .collect();
        out.push_str(&format!("  {}\n", cells.join("  ").trim_end()));
    }

    out
}

pub fn print_trace(trace: &ExtractionTrace) {
    let label_width = trace
        .lines
        .iter()
        .map(|l| l.class.label().len())
        .max()
        .unwrap_or(10);

    for line in &trace.lines {
        println!(
            "  {:>4}  {:<width$}  {}",
            line.source_line,
            line.class.label(),
            line.text,
            width = label_width
        );
    }
    println!();

    let origin = |source_line: Option<usize>| match source_line {
        Some(i) => format!("line {}", i),
        None => "default".to_string(),
    };
    println!(
        "  Category:    {} ({})",
        trace.category.value,
        origin(trace.category.source_line)
    );
    println!(
        "  Subcategory: {} ({})",
        trace.subcategory.value,
        origin(trace.subcategory.source_line)
    );
    println!(
        "  Result:      {} column(s), {} row(s) -> {}",
        trace.result.columns.len(),
        trace.result.data.len(),
        trace.result.suggestions.section_type
    );
}
