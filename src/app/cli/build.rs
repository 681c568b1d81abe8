//! Build command implementation.

use std::path::Path;

use crate::domain::{AppError, ToolsConfig};

pub fn run_build(project_dir: &Path, config: &ToolsConfig) -> Result<(), AppError> {
    let outcome = crate::app::api::build(project_dir, config)?;
    println!("✅ Built {}", outcome.spec_file.display());
    Ok(())
}
