//! Structured results for a routine run.
use std::fmt;
use std::process::ExitCode;

use crate::session::LoginStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
    /// Transport failure or aborted bootstrap.
    Errored,
    /// Routine has no checks defined.
    Skipped,
    /// Ran without a pass/fail expectation.
    Observed,
}

impl Verdict {
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Verdict::Failed | Verdict::Errored)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Verdict::Passed => "passed",
            Verdict::Failed => "failed",
            Verdict::Errored => "errored",
            Verdict::Skipped => "skipped",
            Verdict::Observed => "observed",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub routine: &'static str,
    pub login: LoginStatus,
    pub verdict: Verdict,
}

impl RunReport {
    /// Process exit status; only `strict` runs ever report 1.
    #[must_use]
    pub const fn exit_status(&self, strict: bool) -> u8 {
        if strict && self.verdict.is_failure() {
            1
        } else {
            0
        }
    }

    #[must_use]
    pub fn exit_code(&self, strict: bool) -> ExitCode {
        ExitCode::from(self.exit_status(strict))
    }
}
