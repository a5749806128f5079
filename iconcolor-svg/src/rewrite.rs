use crate::token::{HEX_COLOR, distinct_colors, find_tokens, is_hex_color};
use regex::NoExpand;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// The result of replacing every color token in a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rewrite {
    /// The document with every token replaced by the target.
    pub text: String,

    /// Distinct tokens present before the rewrite.
    pub found: BTreeSet<String>,

    /// Number of token occurrences that were replaced.
    pub replaced: usize,

    /// The value every token was replaced with.
    pub target: String,
}

impl Rewrite {
    /// Whether any replaced token differed from the target.
    pub fn changed(&self) -> bool {
        self.found.iter().any(|color| color != &self.target)
    }
}

/// Replace every color token in `text` with `target`.
///
/// The target is inserted verbatim: `$` sequences are not expanded and the
/// value is not required to be a color itself.
pub fn rewrite_colors(text: &str, target: &str) -> Rewrite {
    if !is_hex_color(target) {
        warn!(
            color = target,
            "Target is not a #rrggbb color, later runs will not find it again"
        );
    }

    let found = distinct_colors(text);
    let replaced = find_tokens(text).count();
    debug!(distinct = found.len(), replaced, "Rewriting color tokens");

    Rewrite {
        text: HEX_COLOR.replace_all(text, NoExpand(target)).into_owned(),
        found,
        replaced,
        target: target.to_string(),
    }
}
