//! Script comment extraction.
//!
//! String literals are elided before scanning so that `//` or `/*` inside a
//! string never opens a comment. Line comments are reported before block
//! comments.

use std::sync::LazyLock;

use regex::Regex;

use super::css::BLOCK_COMMENT;
use crate::core::data::{CommentKind, RawSpan};

static SINGLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'(?:[^'\\\n]|\\(?s:.))*'").unwrap());
static DOUBLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(?:[^"\\\n]|\\(?s:.))*""#).unwrap());
static TEMPLATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`(?:[^`\\]|\\(?s:.))*`").unwrap());

static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)//.*$").unwrap());
static LINE_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^//\s*").unwrap());

/// Replace every string literal with an empty literal of the same quote.
///
/// Quoted strings stay on one line unless the newline is escaped. Template
/// literals may span lines.
pub fn elide_strings(source: &str) -> String {
    let text = SINGLE_QUOTED.replace_all(source, "''");
    let text = DOUBLE_QUOTED.replace_all(&text, "\"\"");
    TEMPLATE.replace_all(&text, "``").into_owned()
}

pub fn spans(source: &str, origin: &str) -> Vec<RawSpan> {
    let elided = elide_strings(source);

    let line = LINE_COMMENT.find_iter(&elided);
    let block = BLOCK_COMMENT.find_iter(&elided);

    line.chain(block)
        .map(|m| RawSpan::new(CommentKind::Js, m.as_str(), origin))
        .collect()
}

/// Remove `//` or `/* */` delimiters with their adjacent whitespace.
pub fn strip_delimiters(raw: &str) -> String {
    if raw.starts_with("//") {
        LINE_OPEN.replace(raw, "").trim().to_string()
    } else {
        super::css::strip_delimiters(raw)
    }
}
