//! Stylesheet comment extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::data::{CommentKind, RawSpan};

/// Shortest `/* ... */` match, across lines.
pub(crate) static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

static BLOCK_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/\*\s*").unwrap());
static BLOCK_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\*/$").unwrap());

pub fn spans(css: &str, origin: &str) -> Vec<RawSpan> {
    BLOCK_COMMENT
        .find_iter(css)
        .map(|m| RawSpan::new(CommentKind::Css, m.as_str(), origin))
        .collect()
}

/// Remove `/*` and `*/` with their adjacent whitespace.
pub fn strip_delimiters(raw: &str) -> String {
    let text = BLOCK_OPEN.replace(raw, "");
    let text = BLOCK_CLOSE.replace(&text, "");
    text.trim().to_string()
}
