//! String manipulation helpers.
//!
//! Functions that accept `Option<&str>` treat `None` like a missing input
//! and return an empty result rather than failing.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Converts a string to camel case.
///
/// Words may be delimited by `_`, `-` or spaces. Each word is lower-cased and
/// capitalised, then the first character of the result is lower-cased.
///
/// ```
/// use stdkit::strings::camel;
///
/// assert_eq!(camel(Some("snake_case")), "snakeCase");
/// assert_eq!(camel(Some("Kebab-CASE")), "kebabCase");
/// assert_eq!(camel(None), "");
/// ```
pub fn camel(subject: Option<&str>) -> String {
    let Some(subject) = subject else {
        return String::new();
    };

    let mut result = String::with_capacity(subject.len());
    for word in subject
        .split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
    {
        let lower = word.to_lowercase();
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }

    let mut chars = result.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => result,
    }
}

/// Checks whether `subject` starts with `start`.
///
/// With `case_sensitive` off, both sides are compared case-folded.
pub fn starts_with(subject: Option<&str>, start: &str, case_sensitive: bool) -> bool {
    let subject = subject.unwrap_or_default();
    if case_sensitive {
        return subject.starts_with(start);
    }

    let mut subject_chars = subject.chars().flat_map(char::to_lowercase);
    start
        .chars()
        .flat_map(char::to_lowercase)
        .all(|c| subject_chars.next() == Some(c))
}

/// Splits `subject` into exactly `limit` parts.
///
/// At most `limit` parts are produced (the last one holds the rest of the
/// string); missing parts are filled with `default`. This fits destructuring
/// with fallbacks:
///
/// ```
/// use stdkit::strings::symmetric_split;
///
/// let parts = symmetric_split(Some("host:8080"), ":", 3, Some("-"));
/// assert_eq!(parts, vec![Some("host".into()), Some("8080".into()), Some("-".into())]);
/// ```
pub fn symmetric_split(
    subject: Option<&str>,
    delimiter: &str,
    limit: usize,
    default: Option<&str>,
) -> Vec<Option<String>> {
    let mut parts: Vec<Option<String>> = match subject {
        Some(subject) if !delimiter.is_empty() && limit > 0 => subject
            .splitn(limit, delimiter)
            .map(|part| Some(part.to_string()))
            .collect(),
        _ => Vec::with_capacity(limit),
    };

    parts.resize(limit, default.map(str::to_string));
    parts
}

/// Splits `subject` on `delimiter` and trims whitespace from each part.
///
/// With a `limit`, at most that many parts are produced.
pub fn trim_split(subject: Option<&str>, delimiter: &str, limit: Option<usize>) -> Vec<String> {
    let Some(subject) = subject else {
        return Vec::new();
    };
    if delimiter.is_empty() {
        return Vec::new();
    }

    match limit {
        Some(limit) => subject
            .splitn(limit.max(1), delimiter)
            .map(|part| part.trim().to_string())
            .collect(),
        None => subject
            .split(delimiter)
            .map(|part| part.trim().to_string())
            .collect(),
    }
}

/// Truncates `subject` to `width` display columns and appends `end` if
/// anything was cut.
///
/// Widths are measured with Unicode width rules, so CJK characters count as
/// two columns. `end` defaults to `"..."` and is not counted against `width`.
///
/// ```
/// use stdkit::strings::limit;
///
/// assert_eq!(limit("Hello", 10, None), "Hello");
/// assert_eq!(limit("Hello World", 5, None), "Hello...");
/// assert_eq!(limit("Hello World", 5, Some("…")), "Hello…");
/// ```
pub fn limit(subject: &str, width: usize, end: Option<&str>) -> String {
    if subject.width() <= width {
        return subject.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in subject.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push_str(end.unwrap_or("..."));
    result
}
