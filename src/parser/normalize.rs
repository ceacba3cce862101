//! Participant field normalization shared by every site adapter
//!
//! All functions here are total: malformed input degrades to an empty string
//! or to [`UNKNOWN_CIVL_ID`], never to an error.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::models::UNKNOWN_CIVL_ID;

// Name characters are ASCII letters, Latin-1 letters and periods
static TRAILING_GARBAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-ZÀ-ÿ.]+$").unwrap());

static LEADING_GARBAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^a-zA-ZÀ-ÿ.]+").unwrap());

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Keep only the ASCII digits of a raw field
///
/// # Examples
///
/// ```
/// use compstrength::parser::normalize::extract_numbers;
///
/// assert_eq!(extract_numbers("123John!!"), "123");
/// assert_eq!(extract_numbers("no id"), "");
/// ```
pub fn extract_numbers(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Extract a cleaned, lower-cased name from a packed name/number field
///
/// Steps:
/// 1. Replace the trailing run of non-name characters with one space
/// 2. Drop the last `trim` characters (the site-specific suffix)
/// 3. Strip leading non-name characters (start numbers)
/// 4. Collapse whitespace and lower-case
///
/// The trim in step 2 is applied unconditionally: a field without trailing
/// garbage loses its last `trim` name characters.
///
/// # Examples
///
/// ```
/// use compstrength::parser::normalize::extract_names;
///
/// assert_eq!(extract_names("123John!!", 1), "john");
/// assert_eq!(extract_names("Jean DUPONT\nCivl ID: 12345", 8), "jean dupont");
/// ```
pub fn extract_names(value: &str, trim: usize) -> String {
    let replaced = TRAILING_GARBAGE_REGEX.replace(value, " ");
    let keep = replaced.chars().count().saturating_sub(trim);
    let trimmed: String = replaced.chars().take(keep).collect();
    let stripped = LEADING_GARBAGE_REGEX.replace(&trimmed, "");
    collapse(&stripped)
}

/// Strip trailing non-name characters and lower-case
///
/// Used for sources that publish the name in its own field.
///
/// # Examples
///
/// ```
/// use compstrength::parser::normalize::clean_name;
///
/// assert_eq!(clean_name("Jean-Marc O'Neil *"), "jean-marc o'neil");
/// ```
pub fn clean_name(value: &str) -> String {
    let stripped = TRAILING_GARBAGE_REGEX.replace(value, "");
    collapse(&stripped)
}

/// Trim, collapse whitespace runs to one space and lower-case
///
/// Both sides of a name join go through this, so ranking names compare
/// equal to roster names that differ only in spacing.
pub fn collapse(value: &str) -> String {
    WHITESPACE_REGEX
        .replace_all(value.trim(), " ")
        .to_lowercase()
}

/// Canonical registration status: trimmed and lower-cased
pub fn normalize_status(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Coerce a raw text field to a CIVL ID
///
/// Empty or non-numeric input yields [`UNKNOWN_CIVL_ID`].
pub fn coerce_civl_id(value: &str) -> u64 {
    value.trim().parse::<u64>().unwrap_or(UNKNOWN_CIVL_ID)
}

/// Coerce a JSON value to a CIVL ID
///
/// Accepts integers, integral non-negative floats and numeric strings;
/// anything else (null, missing, negative, fractional) is unknown.
pub fn civl_id_from_json(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                    .map(|f| f as u64)
            })
            .unwrap_or(UNKNOWN_CIVL_ID),
        Some(Value::String(s)) => coerce_civl_id(s),
        _ => UNKNOWN_CIVL_ID,
    }
}

/// First three characters of a raw field, `None` when empty
pub fn country_prefix(value: &str) -> Option<String> {
    let prefix: String = value.chars().take(3).collect();
    if prefix.is_empty() {
        None
    } else {
        Some(prefix)
    }
}
