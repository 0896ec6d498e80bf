//! Value normalization helpers.
//!
//! Stateless functions shared by every verb: quote-aware splitting,
//! literal unescaping, and the list shapes used by `INSERT`, `IN` and `SET`.

use crate::error::{NueError, NueResult};

/// Split `input` on `separator`, ignoring separators inside quoted literals.
///
/// Both `'` and `"` open a literal; a backslash escapes the next character
/// inside one. Empty segments are kept.
pub fn split_outside_quotes(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (idx, c) in input.char_indices() {
        match quote {
            Some(_) if escaped => escaped = false,
            Some(_) if c == '\\' => escaped = true,
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '\'' || c == '"' => quote = Some(c),
            None if c == separator => {
                parts.push(&input[start..idx]);
                start = idx + c.len_utf8();
            }
            None => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

/// Trim a literal and, when it is wrapped in matching quotes, strip them and
/// restore escaped quotes and backslashes.
///
/// Unquoted text is returned trimmed but otherwise verbatim.
pub fn clean(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) if open == close && is_quote(open) => {
            unescape(&trimmed[1..trimmed.len() - 1], open)
        }
        _ => trimmed.to_string(),
    }
}

fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

fn unescape(inner: &str, quote: char) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next == quote || next == '\\' {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Strip one pair of surrounding parentheses, if present.
pub fn strip_parentheses(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(trimmed)
}

/// Split a plain comma-separated name list and trim each entry.
pub fn split_columns(raw: &str) -> Vec<String> {
    raw.split(',').map(|c| c.trim().to_string()).collect()
}

/// Split an `INSERT` value list.
///
/// Commas inside quoted literals do not split; each value is cleaned.
/// Empty unquoted segments are dropped.
pub fn split_values(raw: &str) -> Vec<String> {
    split_outside_quotes(strip_parentheses(raw), ',')
        .into_iter()
        .filter(|segment| !segment.trim().is_empty())
        .map(clean)
        .collect()
}

/// Parse the value of an `IN` / `NOT IN` condition: `(a, 'b', 3)`.
///
/// Every comma-separated item is kept, trimmed and cleaned.
pub fn parse_value_list(raw: &str) -> Vec<String> {
    split_outside_quotes(strip_parentheses(raw), ',')
        .into_iter()
        .map(clean)
        .collect()
}

/// Parse a `SET a=1, b='x'` assignment list into parallel field and value lists.
pub fn parse_assignments(raw: &str) -> NueResult<(Vec<String>, Vec<String>)> {
    let mut fields = Vec::new();
    let mut values = Vec::new();

    for segment in split_outside_quotes(raw, ',') {
        let Some((field, value)) = segment.split_once('=') else {
            return Err(NueError::syntax(
                0,
                format!("Malformed SET assignment: '{}'", segment.trim()),
            ));
        };
        let field = field.trim();
        if field.is_empty() || !field.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(NueError::syntax(
                0,
                format!("Invalid SET field: '{}'", field),
            ));
        }
        fields.push(field.to_string());
        values.push(clean(value));
    }

    Ok((fields, values))
}
