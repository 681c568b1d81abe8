//! API Facade for the application.
//!
//! This module exposes high-level functions that wire the process adapter
//! into each command.

use std::path::Path;

use crate::adapters::process_command::ProcessCommandAdapter;
use crate::app::commands::{build, extract_issue, install_requirements};
use crate::app::config;

pub use crate::app::commands::build::BuildOutcome;
pub use crate::app::commands::install_requirements::InstallOutcome;
pub use crate::app::commands::workflow::StepOutput;
pub use crate::domain::{AppError, ExtractedMetadata, IssueExtractError, ToolsConfig};

/// Load tool configuration from `path`, or defaults when absent.
pub fn load_config(path: Option<&Path>) -> Result<ToolsConfig, AppError> {
    config::load_tools_config(path)
}

/// Extract build metadata from an issue-form body.
pub fn extract_issue(issue_body: &str, config: &ToolsConfig) -> Result<ExtractedMetadata, AppError> {
    extract_issue::execute(issue_body, &config.issue)
}

/// Step outputs (`python-version`, `target-platform`, `zip-link`) for extracted metadata.
pub fn issue_step_outputs(metadata: &ExtractedMetadata) -> Result<Vec<StepOutput>, AppError> {
    extract_issue::step_outputs(metadata)
}

/// Install dependencies from a requirements file, skipping when it is absent.
pub fn install_requirements(
    requirements_file: &Path,
    config: &ToolsConfig,
) -> Result<InstallOutcome, AppError> {
    let runner = ProcessCommandAdapter::new();
    install_requirements::execute(&runner, requirements_file, &config.install)
}

/// Locate the build spec under `project_dir` and run the packaging tool on it.
pub fn build(project_dir: &Path, config: &ToolsConfig) -> Result<BuildOutcome, AppError> {
    let runner = ProcessCommandAdapter::new();
    build::execute(&runner, project_dir, &config.build)
}
