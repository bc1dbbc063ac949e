//! Shared HTML fragment helpers for the page renderers.
//!
//! Everything user-entered is escaped here; the functions returning ready
//! markup document whether their output is already escaped.

use std::borrow::Cow;

use crate::utils::dates;

/// Escape text for an element body.
pub fn text(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

/// Escape text for a double-quoted attribute value.
pub fn attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

/// Non-blank lines of a newline-delimited field, in order, verbatim.
pub fn lines(field: Option<&str>) -> Vec<&str> {
    field
        .map(|value| {
            value
                .split('\n')
                .filter(|line| !line.trim().is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// First `max` characters of `value`, with a trailing `...` iff it was longer.
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let cut: String = value.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        value.to_string()
    }
}

/// `Jun 1, 2024 - Jun 10, 2024`. Output is escaped; unparseable inputs fall
/// back to the raw value.
pub fn date_range_short(start: &str, end: &str) -> String {
    date_range(start, end, dates::format_short)
}

/// `June 1, 2024 - June 10, 2024`. Output is escaped.
pub fn date_range_long(start: &str, end: &str) -> String {
    date_range(start, end, dates::format_long)
}

fn date_range(start: &str, end: &str, format: fn(&str) -> Option<String>) -> String {
    let start_text = format(start).unwrap_or_else(|| start.to_string());
    let end_text = format(end).unwrap_or_else(|| end.to_string());
    format!("{} - {}", text(&start_text), text(&end_text))
}

/// Error panel shown inside a page's content container.
pub fn error_state(message: &str) -> String {
    format!(
        "<div class=\"empty-state\"><h3>Error</h3><p>{}</p></div>",
        text(message)
    )
}
