//! Tool configuration model and parser (`--config <file>.toml`).

use serde::Deserialize;

use crate::domain::AppError;

/// Top-level configuration for all pybuild-ci commands.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsConfig {
    /// Issue template labels, placeholders, and defaults.
    #[serde(default)]
    pub issue: IssueConfig,
    /// Requirements installer settings.
    #[serde(default)]
    pub install: InstallConfig,
    /// Spec-file builder settings.
    #[serde(default)]
    pub build: BuildConfig,
}

/// How issue-form bodies are read.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IssueConfig {
    /// Section label carrying the Python version.
    #[serde(default = "default_version_label")]
    pub version_label: String,
    /// Section label carrying the comma-separated platform list.
    #[serde(default = "default_platform_label")]
    pub platform_label: String,
    /// Version used when the form field was left blank.
    #[serde(default = "default_version")]
    pub default_version: String,
    /// Platform used when the form field was left blank or is absent.
    #[serde(default = "default_platform")]
    pub default_platform: String,
    /// Sentinel the form writes into a blank version field.
    #[serde(default = "default_version_placeholder")]
    pub version_placeholder: String,
    /// Sentinel the form writes into a blank platform field.
    #[serde(default = "default_platform_placeholder")]
    pub platform_placeholder: String,
}

impl Default for IssueConfig {
    fn default() -> Self {
        Self {
            version_label: default_version_label(),
            platform_label: default_platform_label(),
            default_version: default_version(),
            default_platform: default_platform(),
            version_placeholder: default_version_placeholder(),
            platform_placeholder: default_platform_placeholder(),
        }
    }
}

fn default_version_label() -> String {
    "Python版本".to_string()
}

fn default_platform_label() -> String {
    "目标平台".to_string()
}

fn default_version() -> String {
    "3.6.5".to_string()
}

fn default_platform() -> String {
    "ubuntu-latest".to_string()
}

fn default_version_placeholder() -> String {
    "_No response_".to_string()
}

// The issue form emits this spelling for the platform field.
fn default_platform_placeholder() -> String {
    "_Noresponse_".to_string()
}

/// Requirements installer settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallConfig {
    /// Package manager executable.
    #[serde(default = "default_installer")]
    pub program: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self { program: default_installer() }
    }
}

fn default_installer() -> String {
    "pip".to_string()
}

/// Spec-file builder settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Packaging tool executable.
    #[serde(default = "default_builder")]
    pub program: String,
    /// File extension identifying the build specification.
    #[serde(default = "default_spec_extension")]
    pub spec_extension: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self { program: default_builder(), spec_extension: default_spec_extension() }
    }
}

fn default_builder() -> String {
    "pyinstaller".to_string()
}

fn default_spec_extension() -> String {
    ".spec".to_string()
}

/// Parse and validate tool configuration content.
pub fn parse_tools_config_content(content: &str) -> Result<ToolsConfig, AppError> {
    let config: ToolsConfig = toml::from_str(content)?;

    if config.install.program.trim().is_empty() {
        return Err(AppError::config_error("install.program must not be empty"));
    }
    if config.build.program.trim().is_empty() {
        return Err(AppError::config_error("build.program must not be empty"));
    }
    if config.build.spec_extension.is_empty() {
        return Err(AppError::config_error("build.spec_extension must not be empty"));
    }
    if config.issue.default_platform.trim().is_empty() {
        return Err(AppError::config_error("issue.default_platform must not be empty"));
    }

    Ok(config)
}
