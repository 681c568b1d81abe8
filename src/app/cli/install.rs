//! Install-requirements command implementation.

use std::path::Path;

use crate::app::api::InstallOutcome;
use crate::domain::{AppError, ToolsConfig};

pub fn run_install_requirements(
    requirements_file: &Path,
    config: &ToolsConfig,
) -> Result<(), AppError> {
    match crate::app::api::install_requirements(requirements_file, config)? {
        InstallOutcome::Installed { requirements_file } => {
            println!("✅ Installed dependencies from {}", requirements_file.display());
        }
        InstallOutcome::Skipped { requirements_file } => {
            println!(
                "Requirements file not found: {}, skipping dependency installation.",
                requirements_file.display()
            );
        }
    }
    Ok(())
}
