use crate::domain::AppError;

/// Exit status of a finished child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStatus {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl ProcessStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Status to forward from a failed child. Signal termination maps to 1.
    pub fn forwarded_code(&self) -> i32 {
        match self.code {
            Some(0) | None => 1,
            Some(code) => code,
        }
    }
}

pub trait ProcessRunner {
    /// Run `program` with `args`, sharing this process's stdio, and wait for it.
    ///
    /// Returns an error only when the program could not be started.
    fn run(&self, program: &str, args: &[&str]) -> Result<ProcessStatus, AppError>;
}
