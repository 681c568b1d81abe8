use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::{AppError, BuildConfig};
use crate::ports::ProcessRunner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    /// Spec file handed to the packaging tool.
    pub spec_file: PathBuf,
}

/// Locate the first spec file under `project_dir` and package it.
pub fn execute(
    runner: &impl ProcessRunner,
    project_dir: &Path,
    config: &BuildConfig,
) -> Result<BuildOutcome, AppError> {
    if !project_dir.is_dir() {
        return Err(AppError::ProjectDirNotFound(project_dir.display().to_string()));
    }

    let spec_file = find_file_with_extension(project_dir, &config.spec_extension)?
        .ok_or_else(|| AppError::SpecFileNotFound { extension: config.spec_extension.clone() })?;

    println!(
        "Found {} file: {}, building with {}...",
        config.spec_extension,
        spec_file.display(),
        config.program
    );

    let spec_arg = spec_file.to_string_lossy();
    let status = runner.run(&config.program, &[&*spec_arg])?;

    if !status.success() {
        warn!(program = %config.program, code = ?status.code, "Build failed");
        return Err(AppError::ToolFailed {
            tool: config.program.clone(),
            code: status.forwarded_code(),
        });
    }

    Ok(BuildOutcome { spec_file })
}

/// First file below `dir` whose name ends with `extension`.
///
/// Walks top-down: a directory's files are checked before its
/// subdirectories, and entries are visited in name order. Symlinked
/// directories are not descended into, and subdirectories that cannot be
/// read are skipped. Only `dir` itself must be readable.
pub fn find_file_with_extension(dir: &Path, extension: &str) -> Result<Option<PathBuf>, AppError> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut subdirs = Vec::new();
    for entry in entries {
        let path = entry.path();
        if entry.file_type().is_ok_and(|file_type| file_type.is_dir()) {
            subdirs.push(path);
        } else if path.is_file() && entry.file_name().to_string_lossy().ends_with(extension) {
            debug!(path = %path.display(), "Matched spec file");
            return Ok(Some(path));
        }
    }

    for subdir in subdirs {
        match find_file_with_extension(&subdir, extension) {
            Ok(Some(found)) => return Ok(Some(found)),
            Ok(None) => {}
            Err(e) => warn!(dir = %subdir.display(), error = %e, "Skipping unreadable directory"),
        }
    }

    Ok(None)
}
