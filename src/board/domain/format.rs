//! Display helpers for task cards.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Suffix appended to truncated text.
const ELLIPSIS: &str = "...";

/// Formats a timestamp as a short month-day-time label, e.g.
/// `Oct 19, 02:30 PM`.
#[must_use]
pub fn format_timestamp<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.format("%b %-d, %I:%M %p").to_string()
}

/// Shortens `text` to at most `max_chars` characters followed by `...`.
///
/// Text that already fits is returned unchanged.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_owned(),
        Some((cut, _)) => {
            let mut truncated = text.get(..cut).unwrap_or(text).to_owned();
            truncated.push_str(ELLIPSIS);
            truncated
        }
    }
}
