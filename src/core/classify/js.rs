//! Script comment classification.
//!
//! Any single matching group discards the comment. Groups are evaluated
//! independently and the verdict lists every group that matched.
//!
//! Word and digit classes are ASCII only. Identifiers are ASCII, so prose in
//! other scripts never reads as a call or a declaration.

use std::sync::LazyLock;

use regex::Regex;

use super::pattern::{PatternGroup, char_len};
use crate::core::data::{KeepReason, Verdict};

/// Comments shorter than this are never treated as code.
pub const JS_MIN_LENGTH: usize = 3;

/// Comments longer than this are treated as data or code.
pub const JS_MAX_LENGTH: usize = 500;

/// Evidence name reported when the length ceiling is exceeded.
pub const LENGTH_CEILING: &str = "length-ceiling";

static NATURAL_LANGUAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());

/// SVG or HTML that leaked into script text.
pub static MARKUP: LazyLock<PatternGroup> = LazyLock::new(|| {
    PatternGroup::new(
        "markup",
        &[
            r"www\.w3\.org/2000/svg",
            r"</?[[:word:]]+",
            r#"fill=["']"#,
            r"path\s+d=",
            r#"class=["']"#,
            r"clip-rule=",
            r"fill-rule=",
        ],
    )
});

/// Statement, call, literal and API shapes.
pub static CODE_SYNTAX: LazyLock<PatternGroup> = LazyLock::new(|| {
    PatternGroup::new(
        "code-syntax",
        &[
            r"^\s*(function|const|let|var|if|for|while|return|import|export|class|async|await)\s*[\(\{]",
            r"^\s*[[:word:]]+\s*=\s*[\[\{]",
            r"^\s*[[:word:]]+\s*\([^)]*\)\s*[\{;]",
            r"^\s*(true|false|null|undefined)\s*[,;\}]",
            r"^\s*[0-9]+\s*[,;\}]",
            r#"^\s*["'].*["']\s*[,;\}]"#,
            r"^\s*/.*/[gimuy]*\s*[,;\}]",
            r"^\s*[\[\{].*[\]\}]\s*$",
            r"console\.(log|error|warn|info)\s*\(",
            r"document\.|window\.",
            r"addEventListener|querySelector|getElementById",
            r"^[[:word:]]+\s*[\(\{]",
        ],
    )
});

/// CSS declarations, units and property signatures inside script text.
pub static CSS_LEAK: LazyLock<PatternGroup> = LazyLock::new(|| {
    PatternGroup::new(
        "css-leak",
        &[
            r"\{\s*[[:word:]-]+\s*:\s*[^}]+\}",
            r"[[:word:]-]+\s*:\s*[^;]+;",
            r"px|em|rem|%|vh|vw|deg",
            r"border\s*:\s*[0-9]+px",
            r"animation\s*:\s*",
            r"background-color\s*:\s*",
            r"filter\s*:\s*",
            r"rgba?\(",
            r"hue-rotate",
            r"forwards",
            r"!important",
            r"transform\s*:",
            r"opacity\s*:",
            r"translateY",
            r"sepia\(",
            r"saturate\(",
            r"fadeOut",
            r"data-highlight",
        ],
    )
});

/// Leftover fragments: punctuation, flags, filenames, URLs, ids.
pub static SYNTAX_FRAGMENT: LazyLock<PatternGroup> = LazyLock::new(|| {
    PatternGroup::new(
        "syntax-fragment",
        &[
            r"^[,;\}\]]+$",
            r"^[gm]+$",
            r"^[[:word:].-]+\.js$",
            r"^https?://",
            r"^[A-Z][0-9]+[A-Z][0-9]+",
            r"^[0-9A-Fa-f]{6,}$",
            r"^[[:word:]]+\([0-9]+",
        ],
    )
});

/// The pattern groups, in evaluation order.
pub fn groups() -> [&'static PatternGroup; 4] {
    [&MARKUP, &CODE_SYNTAX, &CSS_LEAK, &SYNTAX_FRAGMENT]
}

pub fn is_natural_language(text: &str) -> bool {
    NATURAL_LANGUAGE.is_match(text)
}

pub fn classify(text: &str) -> Verdict {
    let length = char_len(text);
    if length < JS_MIN_LENGTH {
        return Verdict::keep(KeepReason::BelowLengthFloor);
    }

    if is_natural_language(text) {
        return Verdict::keep(KeepReason::NaturalLanguage);
    }

    let mut evidence: Vec<&'static str> = groups()
        .into_iter()
        .filter(|group| group.matches(text))
        .map(PatternGroup::name)
        .collect();

    if length > JS_MAX_LENGTH {
        evidence.push(LENGTH_CEILING);
    }

    if evidence.is_empty() {
        Verdict::keep(KeepReason::NoEvidence)
    } else {
        Verdict::Discard { evidence }
    }
}
