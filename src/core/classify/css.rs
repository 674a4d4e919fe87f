//! Stylesheet comment classification.
//!
//! Stylesheet comments are short and noisy, so one matching signal is not
//! enough. A comment is treated as commented-out CSS only when at least
//! [`CSS_MIN_SIGNALS`] distinct signals match. Property names are matched
//! as ASCII words.

use std::sync::LazyLock;

use super::pattern::{PatternGroup, char_len};
use crate::core::data::{KeepReason, Verdict};

/// Comments shorter than this are never treated as code.
pub const CSS_MIN_LENGTH: usize = 10;

/// Number of distinct signals needed to discard a comment.
pub const CSS_MIN_SIGNALS: usize = 2;

pub static CSS_SIGNALS: LazyLock<Vec<PatternGroup>> = LazyLock::new(|| {
    vec![
        // Structural shapes
        PatternGroup::new("declaration", &[r"(?m)^\s*[[:word:]-]+\s*:\s*[^;]+(?:;|$)"]),
        PatternGroup::new(
            "declaration-sequence",
            &[r"[[:word:]-]+\s*:\s*[^;{}]+;\s*[[:word:]-]+\s*:\s*[^;{}]+"],
        ),
        PatternGroup::new("at-rule", &[r"^\s*@[[:word:]]+"]),
        PatternGroup::new("selector-block", &[r"(?m)^\s*[[:word:]\-\.#\[\]:()]+\s*\{"]),
        PatternGroup::new("closing-brace", &[r"(?m)^\s*\}\s*$"]),
        // Well-known property and function signatures
        PatternGroup::new("border-width", &[r"border\s*:\s*[0-9]+px"]),
        PatternGroup::new("animation", &[r"animation\s*:\s*[[:word:]-]+"]),
        PatternGroup::new("background", &[r"background[^:]*:\s*"]),
        PatternGroup::new("filter", &[r"filter\s*:\s*"]),
        PatternGroup::new("data-highlight", &[r"data-highlight"]),
        PatternGroup::new("fade-out", &[r"fadeOut"]),
        PatternGroup::new("color-function", &[r"rgba?\("]),
        PatternGroup::new("hue-rotate", &[r"hue-rotate"]),
        PatternGroup::new("forwards", &[r"forwards"]),
        PatternGroup::new("important", &[r"!important"]),
        PatternGroup::new("transform", &[r"transform\s*:"]),
        PatternGroup::new("opacity", &[r"opacity\s*:"]),
        PatternGroup::new("translate-y", &[r"translateY"]),
        PatternGroup::new("sepia", &[r"sepia\("]),
        PatternGroup::new("saturate", &[r"saturate\("]),
    ]
});

/// Names of every signal that matches `text`, in declaration order.
pub fn matching_signals(text: &str) -> Vec<&'static str> {
    CSS_SIGNALS
        .iter()
        .filter(|signal| signal.matches(text))
        .map(PatternGroup::name)
        .collect()
}

pub fn classify(text: &str) -> Verdict {
    if char_len(text) < CSS_MIN_LENGTH {
        return Verdict::keep(KeepReason::BelowLengthFloor);
    }

    let matched = matching_signals(text);
    if matched.len() >= CSS_MIN_SIGNALS {
        Verdict::Discard { evidence: matched }
    } else if matched.is_empty() {
        Verdict::keep(KeepReason::NoEvidence)
    } else {
        Verdict::keep(KeepReason::InsufficientEvidence { matched })
    }
}
