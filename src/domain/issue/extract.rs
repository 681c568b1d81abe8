//! Field extraction from issue-form bodies.
//!
//! Issue forms render every field as a `### <label>` header followed by one
//! content line. Each field is located independently, so section order in
//! the body does not matter.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use super::ExtractedMetadata;
use crate::domain::IssueConfig;

static ARCHIVE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https://github\.com/[^"\s]+/files/[^"\s]+\.zip"#).expect("valid regex")
});

/// Reasons an issue body cannot produce build metadata.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IssueExtractError {
    /// No GitHub attachment link ending in `.zip` in the body.
    #[error("ZIP file link not found in issue body, aborting")]
    ArchiveLinkMissing,

    /// A configured section label could not be turned into a pattern.
    #[error("Invalid section label '{label}': {details}")]
    InvalidLabel { label: String, details: String },
}

/// Extract build metadata from an issue body.
///
/// The version and platform fields fall back to the configured defaults when
/// the form left them blank; only a missing archive link is an error.
pub fn extract_metadata(
    raw_body: &str,
    config: &IssueConfig,
) -> Result<ExtractedMetadata, IssueExtractError> {
    let runtime_version = read_section(raw_body, &config.version_label)?.map(|value| {
        if value == config.version_placeholder { config.default_version.clone() } else { value }
    });

    let platform = read_section(raw_body, &config.platform_label)?
        .filter(|value| !value.is_empty() && *value != config.platform_placeholder);
    let target_platforms = split_platforms(platform.as_deref(), &config.default_platform);

    let archive_link =
        find_archive_link(raw_body).ok_or(IssueExtractError::ArchiveLinkMissing)?.to_string();

    debug!(
        version = ?runtime_version,
        platforms = ?target_platforms,
        link = %archive_link,
        "Extracted issue metadata"
    );

    Ok(ExtractedMetadata { runtime_version, target_platforms, archive_link })
}

/// Read the content line following `### <label>`, trimmed.
///
/// Blank lines between the header and the content are skipped. The content
/// line must be terminated by a newline to count.
pub fn read_section(raw_body: &str, label: &str) -> Result<Option<String>, IssueExtractError> {
    let pattern = format!(r"### {}\s*\n\s*(.*?)\s*\n", regex::escape(label));
    let re = Regex::new(&pattern).map_err(|e| IssueExtractError::InvalidLabel {
        label: label.to_string(),
        details: e.to_string(),
    })?;

    Ok(re
        .captures(raw_body)
        .and_then(|caps| caps.get(1))
        .map(|value| value.as_str().trim().to_string()))
}

/// First `https://github.com/.../files/....zip` URL in the body.
///
/// A link ends at whitespace or a double quote, so two links in one body are
/// never merged into a single match.
pub fn find_archive_link(raw_body: &str) -> Option<&str> {
    ARCHIVE_LINK.find(raw_body).map(|m| m.as_str())
}

/// Split the platform field on `,`, trimming each entry.
///
/// Empty entries are kept in place; the default only stands in for a field
/// that is absent, blank, or the placeholder.
fn split_platforms(value: Option<&str>, default_platform: &str) -> Vec<String> {
    value.unwrap_or(default_platform).split(',').map(|entry| entry.trim().to_string()).collect()
}
