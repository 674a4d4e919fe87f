use std::process::ExitCode;

/// Exit status for CLI commands, following the convention of linters.
///
/// - `Success` (0): nothing found (no comments, or the text is kept)
/// - `Failure` (1): something found (comments on the page, or the text is discarded)
/// - `Error` (2): the command could not run (page not loadable, bad config, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// `Failure` when `found` is true, `Success` otherwise.
    pub fn found(found: bool) -> Self {
        if found {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
