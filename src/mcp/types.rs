use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::{CommentKind, Verdict, data::KeepReason};
use crate::messaging::{Badge, PopupView};

// ============================================================
// get_comments
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCommentsParams {
    /// Page to scan: an http(s) URL, a file:// URL or an absolute path to an HTML file
    pub page: String,
    /// Kinds of comments to return. All kinds when omitted.
    #[serde(default)]
    pub kinds: Option<Vec<CommentKind>>,
    /// Milliseconds to wait after load before scanning. Config value when omitted.
    #[serde(default)]
    pub settle_delay_ms: Option<u64>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BadgeDto {
    /// Comment count, or empty when there are none
    pub text: String,
    /// Path of the toolbar icon
    pub icon: String,
}

impl From<&Badge> for BadgeDto {
    fn from(badge: &Badge) -> Self {
        Self {
            text: badge.text.clone(),
            icon: badge.icon.path().to_string(),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentItem {
    pub kind: CommentKind,
    pub text: String,
    pub origin: String,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCommentsResult {
    pub badge: BadgeDto,
    pub total_count: usize,
    /// HTML comments first, then CSS, then JS
    pub comments: Vec<CommentItem>,
}

impl GetCommentsResult {
    pub fn new(badge: &Badge, view: &PopupView) -> Self {
        let comments = CommentKind::ALL
            .into_iter()
            .flat_map(|kind| {
                view.entries(kind).iter().map(move |entry| CommentItem {
                    kind,
                    text: entry.text.clone(),
                    origin: entry.origin.clone(),
                })
            })
            .collect();

        Self {
            badge: BadgeDto::from(badge),
            total_count: view.total(),
            comments,
        }
    }
}

// ============================================================
// classify_comment
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyCommentParams {
    /// Language the comment was written in: html, css or js
    pub kind: CommentKind,
    /// Comment text without its delimiters
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum VerdictLabel {
    Keep,
    Discard,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyCommentResult {
    pub verdict: VerdictLabel,
    /// Why the comment was kept. Absent on discard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Names of the pattern groups or signals that matched
    pub evidence: Vec<String>,
}

impl From<&Verdict> for ClassifyCommentResult {
    fn from(verdict: &Verdict) -> Self {
        let evidence = verdict.evidence().iter().map(|s| s.to_string()).collect();
        match verdict {
            Verdict::Keep { reason } => Self {
                verdict: VerdictLabel::Keep,
                reason: Some(reason_code(reason).to_string()),
                evidence,
            },
            Verdict::Discard { .. } => Self {
                verdict: VerdictLabel::Discard,
                reason: None,
                evidence,
            },
        }
    }
}

fn reason_code(reason: &KeepReason) -> &'static str {
    match reason {
        KeepReason::BelowLengthFloor => "belowLengthFloor",
        KeepReason::NaturalLanguage => "naturalLanguage",
        KeepReason::NoEvidence => "noEvidence",
        KeepReason::InsufficientEvidence { .. } => "insufficientEvidence",
    }
}
