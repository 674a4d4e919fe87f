//! HTML comment extraction.
//!
//! Comment nodes come from the page snapshot already separated from markup,
//! so there is no span scan here, only normalization of malformed nodes.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::data::{CommentKind, RawSpan};

static TRAILING_END_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-->\s*$").unwrap());
static LEADING_START_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<!--\s*").unwrap());

const START_MARKER: &str = "<!--";

/// Normalize a comment node's value.
///
/// A node like `<!-- outer <!-- inner -->` parses to one comment whose value
/// holds a second start marker. Only the text before that marker is kept.
pub fn clean_comment(value: &str) -> String {
    let cleaned = TRAILING_END_MARKER.replace(value.trim(), "");
    let cleaned = LEADING_START_MARKER.replace(&cleaned, "");

    match cleaned.split_once(START_MARKER) {
        Some((head, _)) => head.trim().to_string(),
        None => cleaned.trim().to_string(),
    }
}

/// One span per non-blank comment node, in document order.
pub fn spans<'a>(
    comment_nodes: impl IntoIterator<Item = &'a str>,
    origin: &str,
) -> Vec<RawSpan> {
    comment_nodes
        .into_iter()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| RawSpan::new(CommentKind::Html, value, origin))
        .collect()
}
