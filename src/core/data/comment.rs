use std::{fmt, str::FromStr};

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Separator between comment text and origin in the wire encoding.
pub const SOURCE_SEPARATOR: &str = " | Source: ";

/// Origin used when a decoded comment carries no `Source:` part.
pub const UNKNOWN_ORIGIN: &str = "Unknown";

/// The kind of resource a comment was found in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    ValueEnum,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    /// `<!-- ... -->` comment nodes in the document.
    Html,
    /// `/* ... */` comments in inline or linked stylesheets.
    Css,
    /// `//` and `/* ... */` comments in inline or linked scripts.
    Js,
}

impl CommentKind {
    pub const ALL: [CommentKind; 3] = [CommentKind::Html, CommentKind::Css, CommentKind::Js];

    /// Upper-case label used in the wire encoding and in reports.
    pub fn label(self) -> &'static str {
        match self {
            CommentKind::Html => "HTML",
            CommentKind::Css => "CSS",
            CommentKind::Js => "JS",
        }
    }

    /// Noun used in inline origin labels ("Inline style #1").
    pub fn element_noun(self) -> &'static str {
        match self {
            CommentKind::Html => "document",
            CommentKind::Css => "style",
            CommentKind::Js => "script",
        }
    }

    /// Noun used when an external resource of this kind cannot be read.
    pub fn resource_noun(self) -> &'static str {
        match self {
            CommentKind::Html => "document",
            CommentKind::Css => "stylesheet",
            CommentKind::Js => "script",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "HTML" => Some(CommentKind::Html),
            "CSS" => Some(CommentKind::Css),
            "JS" => Some(CommentKind::Js),
            _ => None,
        }
    }
}

impl fmt::Display for CommentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Failure to decode a `"<KIND>: <text> | Source: <origin>"` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("missing \"<KIND>: \" prefix in {0:?}")]
    MissingKind(String),
    #[error("unknown comment kind {0:?}, expected HTML, CSS or JS")]
    UnknownKind(String),
}

/// A comment that survived classification, tagged with where it came from.
///
/// Serializes as its wire string so messages carry the same shape the
/// popup consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TaggedComment {
    kind: CommentKind,
    text: String,
    origin: String,
}

impl TaggedComment {
    pub fn new(kind: CommentKind, text: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            origin: origin.into(),
        }
    }

    pub fn kind(&self) -> CommentKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Encode as `"<KIND>: <text> | Source: <origin>"`.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Decode a wire string.
    ///
    /// Splits on the first `": "` for the kind, then on the first
    /// `" | Source: "` for the origin. A missing origin becomes `Unknown`.
    pub fn decode(encoded: &str) -> Result<Self, DecodeError> {
        let (label, rest) = encoded
            .split_once(": ")
            .ok_or_else(|| DecodeError::MissingKind(encoded.to_string()))?;
        let kind = CommentKind::from_label(label)
            .ok_or_else(|| DecodeError::UnknownKind(label.to_string()))?;
        let (text, origin) = rest
            .split_once(SOURCE_SEPARATOR)
            .unwrap_or((rest, UNKNOWN_ORIGIN));

        Ok(Self::new(kind, text, origin))
    }
}

impl fmt::Display for TaggedComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}{}{}",
            self.kind, self.text, SOURCE_SEPARATOR, self.origin
        )
    }
}

impl FromStr for TaggedComment {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl From<TaggedComment> for String {
    fn from(comment: TaggedComment) -> Self {
        comment.encode()
    }
}

impl TryFrom<String> for TaggedComment {
    type Error = DecodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::decode(&value)
    }
}
