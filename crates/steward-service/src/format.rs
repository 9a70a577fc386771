//! Formatter - pure helpers that turn notification bodies into padded,
//! timestamped display strings.
//!
//! Timestamps use local wall-clock time on a 12-hour clock; no timezone
//! handling anywhere.

use chrono::{DateTime, Local};

/// Width of the dash border used by [`pad_message`].
pub const BANNER_WIDTH: usize = 75;

/// Column the classifier templates pad message prefixes to.
pub const PREFIX_WIDTH: usize = 35;

/// Column the status templates pad the prefix-plus-status run to.
pub const STATUS_WIDTH: usize = 44;

/// Space-pad `text` on the right to `width` characters.
///
/// Counts characters, not bytes; text already at or past `width` is returned
/// unchanged.
pub fn ljust(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + width - len);
    out.push_str(text);
    for _ in len..width {
        out.push(' ');
    }
    out
}

/// Prepend `"<MM-DD-YY>\t<hh:mm:ssAM/PM>\t"` to `text` using the wall clock.
pub fn with_timestamp(text: &str) -> String {
    with_timestamp_at(text, Local::now())
}

/// Timestamp-prefix `text` with an explicit instant (deterministic form used
/// by tests).
pub fn with_timestamp_at(text: &str, at: DateTime<Local>) -> String {
    format!(
        "{}\t{}\t{}",
        at.format("%m-%d-%y"),
        at.format("%I:%M:%S%p"),
        text
    )
}

/// Wrap a timestamped `text` in a symmetric border of [`BANNER_WIDTH`] dashes
/// on each side, with a leading and trailing newline inside the border.
///
/// Deterministic given the same text and timestamp; used for the startup
/// banner.
pub fn pad_message(text: &str) -> String {
    pad_message_at(text, Local::now())
}

/// Banner form with an explicit instant.
pub fn pad_message_at(text: &str, at: DateTime<Local>) -> String {
    let border = "-".repeat(BANNER_WIDTH);
    format!("{border}\n{}\n{border}", with_timestamp_at(text, at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> DateTime<Local> {
        Local.with_ymd_and_hms(2021, 4, 30, 13, 5, 9).unwrap()
    }

    #[test]
    fn test_ljust_pads_short_text() {
        assert_eq!(ljust("abc", 6), "abc   ");
    }

    #[test]
    fn test_ljust_leaves_long_text() {
        assert_eq!(ljust("abcdefgh", 4), "abcdefgh");
    }

    #[test]
    fn test_ljust_counts_chars_not_bytes() {
        // Five characters, six bytes
        assert_eq!(ljust("héllo", 7), "héllo  ");
    }

    #[test]
    fn test_timestamp_format() {
        let line = with_timestamp_at("Ann has joined UTGOP!", instant());
        assert_eq!(line, "04-30-21\t01:05:09PM\tAnn has joined UTGOP!");
    }

    #[test]
    fn test_timestamp_morning_is_am() {
        let at = Local.with_ymd_and_hms(2021, 4, 30, 9, 0, 0).unwrap();
        let line = with_timestamp_at("x", at);
        assert_eq!(line, "04-30-21\t09:00:00AM\tx");
    }

    #[test]
    fn test_banner_border() {
        let banner = pad_message_at("steward is now online!", instant());
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "-".repeat(BANNER_WIDTH));
        assert_eq!(lines[2], "-".repeat(BANNER_WIDTH));
        assert!(lines[1].ends_with("steward is now online!"));
        assert!(lines[1].starts_with("04-30-21\t01:05:09PM\t"));
    }
}
