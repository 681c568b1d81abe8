//! Extract-issue command implementation.

use crate::app::commands::workflow::write_step_outputs;
use crate::domain::{AppError, ToolsConfig};

pub fn run_extract_issue(issue_body: &str, config: &ToolsConfig) -> Result<(), AppError> {
    let metadata = crate::app::api::extract_issue(issue_body, config)?;
    let outputs = crate::app::api::issue_step_outputs(&metadata)?;
    write_step_outputs(&outputs)
}
