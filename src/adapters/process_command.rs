use std::process::Command;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{ProcessRunner, ProcessStatus};

#[derive(Debug, Clone, Default)]
pub struct ProcessCommandAdapter;

impl ProcessCommandAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for ProcessCommandAdapter {
    fn run(&self, program: &str, args: &[&str]) -> Result<ProcessStatus, AppError> {
        let mut cmd = Command::new(program);
        cmd.args(args);

        debug!(program, ?args, "Spawning external tool");

        let status = cmd.status().map_err(|e| AppError::ExternalToolError {
            tool: program.to_string(),
            error: e.to_string(),
        })?;

        debug!(program, code = ?status.code(), "External tool finished");

        Ok(ProcessStatus { code: status.code() })
    }
}
