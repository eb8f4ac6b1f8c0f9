use std::process::ExitCode;

/// Exit status for the CLI, following common conventions for linter tools.
///
/// - `Success` (0): run completed; nothing fatal and no hard failures
/// - `Failure` (1): missing keys in strict mode, or the run aborted
///   (bad path, unreadable file, malformed locale document)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed successfully, or findings were downgraded by `--silent`.
    Success,
    /// Missing keys in strict mode, or a fatal error.
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
        }
    }
}
