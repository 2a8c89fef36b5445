//! Row splitting for published-spreadsheet CSV exports.
//!
//! Two deliberately distinct strategies are kept side by side:
//! [`split_quoted_line`] for the per-topic question sheets, whose cells can
//! contain commas inside double quotes, and [`split_plain_line`] for the
//! master config/leaderboard sheet, which is assumed never to embed commas.
//! Unifying the two would change behavior on malformed master-sheet data,
//! so both stay as named functions.

/// Split one CSV line, treating commas inside double quotes as field
/// content. Quote characters toggle the in-quotes flag and are not emitted;
/// fields are trimmed of surrounding whitespace.
///
/// Escaped quotes (`""` inside a quoted field) are not handled.
pub fn split_quoted_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

/// Split one CSV line on every comma, trimming each field and stripping at
/// most one leading and one trailing `"`. Quoted commas are NOT respected.
pub fn split_plain_line(line: &str) -> Vec<String> {
    line.split(',').map(strip_quotes).collect()
}

fn strip_quotes(field: &str) -> String {
    let trimmed = field.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.to_string()
}
