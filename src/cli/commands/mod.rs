pub mod classify;
pub mod init;
pub mod scan;

use crate::core::{CommentKind, Verdict};
use crate::messaging::{Badge, PopupView};

/// What one `scan` produced: the badge as the toolbar shows it and the
/// popup's grouped comments.
#[derive(Debug, Clone)]
pub struct ScanSummary {
    /// The page argument as given on the command line.
    pub page: String,
    pub badge: Badge,
    pub view: PopupView,
}

#[derive(Debug, Clone)]
pub struct ClassifySummary {
    pub kind: CommentKind,
    pub verdict: Verdict,
}
