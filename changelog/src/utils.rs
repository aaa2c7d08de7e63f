use once_cell::sync::Lazy;
use regex::Regex;

/// `year.month.day`, zero padding optional
pub static DATE_LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,4})\.(\d{1,2})\.(\d{1,2})$").expect("Failed to compile date label regex")
});

pub static LIST_MARKER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t]*(?:[*+-]|\d{1,9}[.)])(?:[ \t]+|$)")
        .expect("Failed to compile list marker regex")
});

pub static ATX_HEADING_OPEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ {0,3}#{1,6}(?:[ \t]|$)").expect("Failed to compile heading regex"));

/// Optional closing sequence of an ATX heading (`## Added ##`)
pub static ATX_HEADING_CLOSE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[ \t]+)#+[ \t]*$").expect("Failed to compile heading close regex")
});

pub static SETEXT_UNDERLINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n[ \t]*(?:=+|-+)[ \t]*$").expect("Failed to compile setext underline regex")
});

/// Default change categories offered by `init`
pub static DEFAULT_CHANGE_CATEGORIES: Lazy<Vec<String>> = Lazy::new(|| {
    ["Added", "Changed", "Fixed"]
        .iter()
        .map(ToString::to_string)
        .collect()
});

/// Removes the `#` markup, including an optional closing sequence, and surrounding whitespace of a heading's raw form
#[must_use]
pub fn strip_heading_markup(raw: &str) -> &str {
    let text = raw.trim().trim_start_matches('#').trim();
    match ATX_HEADING_CLOSE_PATTERN.find(text) {
        Some(close) => text[..close.start()].trim_end(),
        None => text,
    }
}
