//! Comment extraction for each resource kind.
//!
//! Extraction runs in three steps: find syntactic spans, clean them, and
//! keep those the classifier does not reject.
//!
//! ## Module Structure
//!
//! - `html`: comment-node normalization
//! - `css`: block comment scan
//! - `js`: string elision plus line and block comment scan

pub mod css;
pub mod html;
pub mod js;

use tracing::trace;

use crate::core::{
    classify::classify,
    data::{CommentKind, RawSpan, TaggedComment, Verdict},
};

/// Clean and classify spans, keeping survivors in order.
pub fn retain_comments(spans: Vec<RawSpan>) -> Vec<TaggedComment> {
    spans
        .into_iter()
        .filter_map(|span| span.clean())
        .filter_map(|comment| match classify(comment.kind, &comment.text) {
            Verdict::Keep { .. } => Some(comment.into_tagged()),
            Verdict::Discard { evidence } => {
                trace!(
                    kind = %comment.kind,
                    origin = %comment.origin,
                    ?evidence,
                    "discarded code-like comment"
                );
                None
            }
        })
        .collect()
}

/// Extract comments from the text of one stylesheet or script.
pub fn extract_text(kind: CommentKind, text: &str, origin: &str) -> Vec<TaggedComment> {
    let spans = match kind {
        CommentKind::Html => html::spans([text], origin),
        CommentKind::Css => css::spans(text, origin),
        CommentKind::Js => js::spans(text, origin),
    };
    retain_comments(spans)
}

/// Extract comments from a page's comment nodes.
pub fn extract_html<'a>(
    comment_nodes: impl IntoIterator<Item = &'a str>,
    origin: &str,
) -> Vec<TaggedComment> {
    retain_comments(html::spans(comment_nodes, origin))
}
