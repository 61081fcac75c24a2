use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): every file was parsed and transformed
/// - `Failure` (1): at least one file could not be read or parsed
/// - `Error` (2): the command itself failed (config error, missing path, I/O)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// Some inputs failed to parse; the rest were still reported.
    Failure,
    Error,
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
