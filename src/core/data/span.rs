use super::comment::{CommentKind, TaggedComment};
use crate::core::extract::{css, html, js};

/// A comment-delimited substring found by syntax alone.
///
/// For CSS and JS the raw text still includes its delimiters. For HTML it is
/// the comment node's value, which may carry malformed marker remnants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSpan {
    pub kind: CommentKind,
    pub raw: String,
    pub origin: String,
}

impl RawSpan {
    pub fn new(kind: CommentKind, raw: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
            origin: origin.into(),
        }
    }

    /// Strip delimiters and normalize. Returns None when nothing is left.
    pub fn clean(&self) -> Option<CleanedComment> {
        let text = match self.kind {
            CommentKind::Html => html::clean_comment(&self.raw),
            CommentKind::Css => css::strip_delimiters(&self.raw),
            CommentKind::Js => js::strip_delimiters(&self.raw),
        };

        if text.is_empty() {
            return None;
        }

        Some(CleanedComment {
            kind: self.kind,
            text,
            origin: self.origin.clone(),
        })
    }
}

/// A span with delimiters removed. `text` is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedComment {
    pub kind: CommentKind,
    pub text: String,
    pub origin: String,
}

impl CleanedComment {
    pub fn into_tagged(self) -> TaggedComment {
        TaggedComment::new(self.kind, self.text, self.origin)
    }
}
