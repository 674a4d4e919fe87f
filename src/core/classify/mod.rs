//! Comment-vs-code classification.
//!
//! Each resource kind has its own policy. HTML comments are always kept.
//! CSS needs two independent signals before a comment is discarded, while
//! JS discards on any single matching group.
//!
//! ## Module Structure
//!
//! - `pattern`: PatternGroup, a named predicate over a set of regexes
//! - `css`: stylesheet signals and the 2-of-N policy
//! - `js`: script pattern groups and the any-of policy

pub mod css;
pub mod js;
pub mod pattern;

pub use pattern::PatternGroup;

use crate::core::data::{CommentKind, KeepReason, Verdict};

/// Classify cleaned comment text. Never fails; ambiguous text is kept.
pub fn classify(kind: CommentKind, text: &str) -> Verdict {
    match kind {
        CommentKind::Html => Verdict::keep(KeepReason::NoEvidence),
        CommentKind::Css => css::classify(text),
        CommentKind::Js => js::classify(text),
    }
}
