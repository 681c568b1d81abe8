use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{ProcessRunner, ProcessStatus};

/// A single recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
}

/// Records invocations and answers with a fixed status.
pub struct FakeProcessRunner {
    pub calls: Mutex<Vec<RecordedCall>>,
    status: Option<ProcessStatus>,
}

impl FakeProcessRunner {
    /// Runner whose every invocation exits with `code`.
    pub fn exiting_with(code: i32) -> Self {
        Self { calls: Mutex::new(Vec::new()), status: Some(ProcessStatus { code: Some(code) }) }
    }

    /// Runner whose programs cannot be started.
    pub fn unavailable() -> Self {
        Self { calls: Mutex::new(Vec::new()), status: None }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessRunner for FakeProcessRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<ProcessStatus, AppError> {
        self.calls.lock().unwrap().push(RecordedCall {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        });

        self.status.ok_or_else(|| AppError::ExternalToolError {
            tool: program.to_string(),
            error: "No such file or directory (os error 2)".into(),
        })
    }
}
