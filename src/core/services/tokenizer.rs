//! Quote-aware CSV tokenizer
//!
//! Records are `\n`-separated; a quoted field may contain commas but not
//! newlines. Malformed quoting never fails, the scan just keeps toggling.

use crate::core::models::RawRow;

/// Split CSV text into rows of trimmed fields
///
/// Blank lines are skipped. A leading byte-order mark is dropped.
#[must_use]
pub fn tokenize(text: &str) -> Vec<RawRow> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(split_line)
        .collect()
}

/// Split a single line into fields
///
/// `"` toggles quoting and is dropped from the output; `,` separates fields
/// only outside quotes.
#[must_use]
pub fn split_line(line: &str) -> RawRow {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            },
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_string());
    fields
}
