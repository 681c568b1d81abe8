/// Build parameters recovered from an issue body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMetadata {
    /// Python version requested by the reporter.
    ///
    /// `None` when the issue has no version section at all. A section left
    /// blank by the form resolves to the configured default instead.
    pub runtime_version: Option<String>,
    /// Runner labels to build on, in issue order. Never empty.
    pub target_platforms: Vec<String>,
    /// First qualifying attachment URL in the body.
    pub archive_link: String,
}
