/// Why a comment was kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeepReason {
    /// Shorter than the kind's minimum length for code.
    BelowLengthFloor,
    /// Only letters and whitespace (JS fast-path).
    NaturalLanguage,
    /// No disqualifying pattern matched.
    NoEvidence,
    /// Some CSS signals matched, but fewer than the threshold.
    InsufficientEvidence { matched: Vec<&'static str> },
}

/// Outcome of classifying one comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Keep { reason: KeepReason },
    /// `evidence` names every pattern group or signal that matched.
    Discard { evidence: Vec<&'static str> },
}

impl Verdict {
    pub fn keep(reason: KeepReason) -> Self {
        Verdict::Keep { reason }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, Verdict::Keep { .. })
    }

    pub fn is_discard(&self) -> bool {
        !self.is_keep()
    }

    /// Names of the patterns that matched, whatever the outcome.
    pub fn evidence(&self) -> &[&'static str] {
        match self {
            Verdict::Discard { evidence } => evidence,
            Verdict::Keep {
                reason: KeepReason::InsufficientEvidence { matched },
            } => matched,
            Verdict::Keep { .. } => &[],
        }
    }
}
