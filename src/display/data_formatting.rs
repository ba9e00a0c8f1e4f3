use jiff::Timestamp;
use jiff::civil::{Date, DateTime};
use jiff::tz::TimeZone;

/// Placeholder for a missing value
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown when a date is present but cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Render an optional field, falling back when it is absent or empty
///
/// Whitespace is passed through unchanged.
///
/// # Examples
///
/// ```
/// use portal::display::display_or;
///
/// assert_eq!(display_or(Some("Acme"), "N/A"), "Acme");
/// assert_eq!(display_or(Some(""), "N/A"), "N/A");
/// assert_eq!(display_or(Some("  "), "N/A"), "  ");
/// assert_eq!(display_or(None, "0"), "0");
/// ```
pub fn display_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

/// Like [`display_or`] with the "N/A" placeholder
pub fn or_na(value: Option<&str>) -> &str {
    display_or(value, NOT_AVAILABLE)
}

/// `Some` only when the value is non-empty
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Format a record timestamp as `Mon D, YYYY` in the local time zone
///
/// Missing dates render as "N/A" and unparseable ones as "Invalid Date".
pub fn format_date(raw: Option<&str>) -> String {
    format_date_in(raw, &TimeZone::system())
}

/// Format a record timestamp as `Mon D, YYYY` in the given time zone
///
/// # Examples
///
/// ```
/// use jiff::tz::TimeZone;
/// use portal::display::format_date_in;
///
/// let utc = TimeZone::UTC;
/// assert_eq!(format_date_in(Some("2024-01-05T10:00:00.000Z"), &utc), "Jan 5, 2024");
/// assert_eq!(format_date_in(None, &utc), "N/A");
/// assert_eq!(format_date_in(Some("yesterday"), &utc), "Invalid Date");
/// ```
pub fn format_date_in(raw: Option<&str>, tz: &TimeZone) -> String {
    let Some(raw) = present(raw) else {
        return NOT_AVAILABLE.to_string();
    };

    match parse_calendar_date(raw.trim(), tz) {
        Some(date) => date.strftime("%b %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Resolve a timestamp string to the calendar date it falls on in `tz`.
///
/// Instants with an offset are converted. A bare date is midnight UTC. A
/// date-time without an offset is already local.
fn parse_calendar_date(raw: &str, tz: &TimeZone) -> Option<Date> {
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Some(ts.to_zoned(tz.clone()).date());
    }

    if raw.contains(['T', 't', ' ']) {
        return raw.parse::<DateTime>().ok().map(|dt| dt.date());
    }

    let date = raw.parse::<Date>().ok()?;
    let midnight_utc = date.to_zoned(TimeZone::UTC).ok()?;
    Some(midnight_utc.timestamp().to_zoned(tz.clone()).date())
}

/// Word-wrap text to `width` columns, keeping its own line breaks
///
/// Words longer than `width` are split. Blank input lines are kept as empty
/// lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while !word.is_empty() {
                let sep = usize::from(current_len > 0);
                if current_len + sep + word.len() <= width {
                    if sep == 1 {
                        current.push(' ');
                    }
                    current.extend(word.iter());
                    current_len += sep + word.len();
                    break;
                }

                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                    continue;
                }

                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }
        }

        lines.push(current);
    }

    lines
}

/// Clamp text to at most `max_lines` wrapped lines of `width` columns,
/// ending with an ellipsis when anything was cut
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> String {
    if width == 0 || max_lines == 0 {
        return String::new();
    }

    let mut lines = wrap_text(text, width);
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let mut kept: String = last.chars().take(width.saturating_sub(3)).collect();
            kept.push_str("...");
            *last = kept;
        }
    }

    lines.join("\n")
}
