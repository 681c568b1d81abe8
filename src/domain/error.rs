use std::io;

use thiserror::Error;

use crate::domain::issue::IssueExtractError;

/// Library-wide error type for pybuild-ci operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Issue body did not yield the mandatory metadata.
    #[error(transparent)]
    IssueExtract(#[from] IssueExtractError),

    /// Serialization or other internal failure.
    #[error("Internal error: {0}")]
    InternalError(String),

    /// External tool could not be started.
    #[error("Failed to run {tool}: {error}")]
    ExternalToolError { tool: String, error: String },

    /// External tool ran and exited unsuccessfully.
    #[error("{tool} exited with status {code}")]
    ToolFailed { tool: String, code: i32 },

    /// Dependency installation returned a non-zero status.
    #[error("Error occurred while installing dependencies from {file} (status {code})")]
    RequirementsInstallFailed { file: String, code: i32 },

    /// No build specification file under the project directory.
    #[error("No available {extension} found.")]
    SpecFileNotFound { extension: String },

    /// Project directory does not exist or is not a directory.
    #[error("Project directory not found: {0}")]
    ProjectDirNotFound(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Process exit status for this error.
    ///
    /// Failures of external tools forward the tool's own status; everything
    /// else terminates with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ToolFailed { code, .. } | AppError::RequirementsInstallFailed { code, .. }
                if *code != 0 =>
            {
                *code
            }
            _ => 1,
        }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::IssueExtract(_) => io::ErrorKind::InvalidInput,
            AppError::SpecFileNotFound { .. } | AppError::ProjectDirNotFound(_) => {
                io::ErrorKind::NotFound
            }
            AppError::InternalError(_)
            | AppError::ExternalToolError { .. }
            | AppError::ToolFailed { .. }
            | AppError::RequirementsInstallFailed { .. } => io::ErrorKind::Other,
        }
    }
}
