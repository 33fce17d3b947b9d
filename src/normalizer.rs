use crate::profile::preset::JAPANESE_SPACING;
use std::borrow::Cow;

/// Remove meaningless whitespace from a Japanese text fragment.
///
/// Runs two rewrites in order:
///
/// 1. every run of two or more whitespace code points becomes one `' '`;
/// 2. every whitespace run whose neighbours are both Han, Hiragana or
///    Katakana (by `Script_Extensions`) is deleted.
///
/// Whitespace next to Latin text, digits or the string edges is kept.  Text
/// that needs no change is returned borrowed.
///
/// ```
/// assert_eq!(jaspace::normalize("これ は 日本語 です"), "これは日本語です");
/// assert_eq!(jaspace::normalize("Hello  世界 です"), "Hello 世界です");
/// assert_eq!(jaspace::normalize("2024 年 1 月"), "2024 年 1 月");
/// ```
#[inline]
pub fn normalize(text: &str) -> Cow<'_, str> {
    JAPANESE_SPACING.run(Cow::Borrowed(text))
}

/// `true` exactly when [`normalize`] would change `text`.
///
/// Never allocates.
///
/// ```
/// assert!(jaspace::is_normalizable("これ は"));
/// assert!(!jaspace::is_normalizable("Hello 世界"));
/// ```
#[inline]
pub fn is_normalizable(text: &str) -> bool {
    JAPANESE_SPACING.needs_run(text)
}
