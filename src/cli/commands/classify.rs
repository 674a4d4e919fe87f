use anyhow::Result;

use super::ClassifySummary;
use crate::cli::{args::ClassifyCommand, exit_status::ExitStatus, report};
use crate::core::classify::classify as classify_text;

pub fn classify(cmd: ClassifyCommand) -> Result<ExitStatus> {
    let summary = ClassifySummary {
        kind: cmd.kind,
        verdict: classify_text(cmd.kind, &cmd.text),
    };
    report::print_classify(&summary);

    Ok(ExitStatus::found(summary.verdict.is_discard()))
}
