pub mod error;
pub mod issue;
pub mod tools_config;

pub use error::AppError;
pub use issue::{ExtractedMetadata, IssueExtractError};
pub use tools_config::{BuildConfig, InstallConfig, IssueConfig, ToolsConfig};
