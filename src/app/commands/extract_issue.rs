use tracing::info;

use crate::app::commands::workflow::StepOutput;
use crate::domain::issue::extract_metadata;
use crate::domain::{AppError, ExtractedMetadata, IssueConfig};

pub const PYTHON_VERSION_OUTPUT: &str = "python-version";
pub const TARGET_PLATFORM_OUTPUT: &str = "target-platform";
pub const ZIP_LINK_OUTPUT: &str = "zip-link";

pub fn execute(issue_body: &str, config: &IssueConfig) -> Result<ExtractedMetadata, AppError> {
    let metadata = extract_metadata(issue_body, config)?;
    info!(
        platforms = metadata.target_platforms.len(),
        versioned = metadata.runtime_version.is_some(),
        "Issue metadata extracted"
    );
    Ok(metadata)
}

/// Step outputs for the extracted metadata.
///
/// The version is emitted verbatim (empty when the issue had no version
/// section); the platform list and link are JSON-encoded.
pub fn step_outputs(metadata: &ExtractedMetadata) -> Result<Vec<StepOutput>, AppError> {
    Ok(vec![
        StepOutput::plain(
            PYTHON_VERSION_OUTPUT,
            metadata.runtime_version.clone().unwrap_or_default(),
        ),
        StepOutput::json(TARGET_PLATFORM_OUTPUT, &metadata.target_platforms)?,
        StepOutput::json(ZIP_LINK_OUTPUT, &metadata.archive_link)?,
    ])
}
