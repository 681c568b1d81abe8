use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::{AppError, InstallConfig};
use crate::ports::ProcessRunner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Dependencies were installed from the file.
    Installed { requirements_file: PathBuf },
    /// The requirements file does not exist; nothing to install.
    Skipped { requirements_file: PathBuf },
}

/// Install dependencies listed in `requirements_file`, if it exists.
pub fn execute(
    runner: &impl ProcessRunner,
    requirements_file: &Path,
    config: &InstallConfig,
) -> Result<InstallOutcome, AppError> {
    let requirements_file = requirements_file.to_path_buf();

    if !requirements_file.exists() {
        info!(file = %requirements_file.display(), "Requirements file absent, skipping install");
        return Ok(InstallOutcome::Skipped { requirements_file });
    }

    println!(
        "Found requirements file: {}, starting to install dependencies...",
        requirements_file.display()
    );

    let file_arg = requirements_file.to_string_lossy();
    let status = runner.run(&config.program, &["install", "-r", &*file_arg])?;

    if !status.success() {
        warn!(program = %config.program, code = ?status.code, "Dependency install failed");
        return Err(AppError::RequirementsInstallFailed {
            file: requirements_file.display().to_string(),
            code: status.forwarded_code(),
        });
    }

    Ok(InstallOutcome::Installed { requirements_file })
}
