use crate::config::HeuristicConfig;
use crate::model::ExtractedLine;
use crate::trace::NameDecision;

/// Guess a category name: an all-caps title near the top of the document.
pub fn suggest_category(lines: &[ExtractedLine], config: &HeuristicConfig) -> NameDecision {
    let found = lines
        .iter()
        .take(config.category_scan_lines)
        .find(|line| {
            let len = line.text.chars().count();
            is_upper_case(&line.text)
                && len > config.category_min_len
                && len < config.category_max_len
        });

    decision(found, &config.default_category_name)
}

/// Guess a subcategory name: the first plausible line after the title that
/// is not a note, a price heading or a rand amount.
pub fn suggest_subcategory(lines: &[ExtractedLine], config: &HeuristicConfig) -> NameDecision {
    let window = config.subcategory_first_line..=config.subcategory_last_line;
    let found = lines
        .iter()
        .enumerate()
        .take_while(|(position, _)| *position <= config.subcategory_last_line)
        .filter(|(position, _)| window.contains(position))
        .map(|(_, line)| line)
        .find(|line| {
            let len = line.text.chars().count();
            len > config.subcategory_min_len
                && len < config.subcategory_max_len
                && !is_excluded_subcategory(&line.text, config)
        });

    decision(found, &config.default_subcategory_name)
}

fn decision(found: Option<&ExtractedLine>, fallback: &str) -> NameDecision {
    match found {
        Some(line) => NameDecision {
            value: line.text.clone(),
            line_index: Some(line.index),
            source_line: Some(line.source_line),
        },
        None => NameDecision {
            value: fallback.to_string(),
            line_index: None,
            source_line: None,
        },
    }
}

fn is_upper_case(text: &str) -> bool {
    text.to_uppercase() == text
}

fn is_excluded_subcategory(text: &str, config: &HeuristicConfig) -> bool {
    if config
        .subcategory_excluded_prefixes
        .iter()
        .any(|prefix| text.starts_with(prefix.as_str()))
    {
        return true;
    }

    // "R120.00" and friends
    let mut chars = text.chars();
    chars.next() == Some('R') && chars.next().is_some_and(|c| c.is_ascii_digit())
}
