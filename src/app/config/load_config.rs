//! Tool configuration loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::tools_config::parse_tools_config_content;
use crate::domain::{AppError, ToolsConfig};

/// Load the tool configuration from `path`, or defaults when no path is given.
pub fn load_tools_config(path: Option<&Path>) -> Result<ToolsConfig, AppError> {
    let Some(path) = path else {
        return Ok(ToolsConfig::default());
    };

    if !path.is_file() {
        return Err(AppError::config_error(format!("Config file not found: {}", path.display())));
    }

    debug!(path = %path.display(), "Loading tool configuration");
    let content = fs::read_to_string(path)?;
    parse_tools_config_content(&content)
}
