use regex::Regex;
use std::{collections::BTreeSet, fmt::Display, sync::LazyLock};

/// Matches a hex color token anywhere in a document.
pub(crate) static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{6}").expect("hex color pattern is valid"));

/// A single `#rrggbb` occurrence within a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken<'a> {
    text: &'a str,
}

impl<'a> ColorToken<'a> {
    /// The matched text, including the leading `#`.
    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

impl Display for ColorToken<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)
    }
}

/// Iterate every color token in `text`, left to right, without overlaps.
pub fn find_tokens(text: &str) -> impl Iterator<Item = ColorToken<'_>> {
    HEX_COLOR
        .find_iter(text)
        .map(|m| ColorToken { text: m.as_str() })
}

/// Collect the distinct tokens present in `text`.
///
/// Distinctness is by exact text, so `#ffffff` and `#FFFFFF` are two entries.
pub fn distinct_colors(text: &str) -> BTreeSet<String> {
    find_tokens(text).map(|t| t.as_str().to_string()).collect()
}

/// Check whether `value` is exactly one hex color token and nothing else.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR
        .find(value)
        .is_some_and(|m| m.start() == 0 && m.end() == value.len())
}
