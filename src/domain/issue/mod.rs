//! Issue-form body parsing.

mod extract;
mod metadata;

pub use extract::{IssueExtractError, extract_metadata, find_archive_link, read_section};
pub use metadata::ExtractedMetadata;
