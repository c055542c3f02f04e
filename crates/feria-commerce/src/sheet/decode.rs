//! Best-effort decoder for spreadsheet CSV exports.
//!
//! Published sheets export comma-separated lines with double-quoted fields
//! and doubled-quote escaping. Input is untrusted: decoding never fails,
//! malformed quoting runs to end of line, and rows are padded or truncated
//! to the header width.

use tracing::debug;

use crate::sheet::RawRow;

/// Decode delimited text into raw rows.
///
/// The first non-blank line is the header; every later non-blank line is
/// zipped against it by position. Fields are trimmed and lose one pair of
/// surrounding quotes when both are present. Missing trailing fields become
/// empty strings; fields beyond the header width are dropped.
pub fn decode(text: &str) -> Vec<RawRow> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };

    let headers: Vec<String> = split_line(header_line)
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let rows: Vec<RawRow> = lines.map(|line| build_row(&headers, line)).collect();
    debug!(
        rows = rows.len(),
        columns = headers.len(),
        "decoded sheet text"
    );
    rows
}

/// Split one line into fields, honoring quotes.
///
/// A quote toggles quoted state; a doubled quote inside a quoted field is a
/// literal quote. Commas split only outside quotes. An unterminated quote
/// simply runs to end of line.
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

fn build_row(headers: &[String], line: &str) -> RawRow {
    let fields = split_line(line);
    let mut row = RawRow::new();
    for (i, name) in headers.iter().enumerate() {
        let value = fields.get(i).map(|f| clean_field(f)).unwrap_or_default();
        row.push(name.clone(), value);
    }
    row
}

/// Trim a field and strip one surrounding quote pair, but only when both
/// ends carry one.
fn clean_field(field: &str) -> String {
    let trimmed = field.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}
