//! Step output helper.
//!
//! Emits `::set-output name=<name>::<value>` annotations on stdout, and
//! appends `<name>=<value>` to `GITHUB_OUTPUT` when set.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::domain::AppError;

/// One named value handed to later workflow steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutput {
    pub name: String,
    pub value: String,
}

impl StepOutput {
    /// Output carrying `value` verbatim.
    pub fn plain(name: &str, value: impl Into<String>) -> Self {
        Self { name: name.to_string(), value: value.into() }
    }

    /// Output carrying `value` as compact single-line JSON.
    pub fn json<T: Serialize + ?Sized>(name: &str, value: &T) -> Result<Self, AppError> {
        let json = serde_json::to_string(value).map_err(|e| {
            AppError::InternalError(format!("Failed to serialize output '{}': {}", name, e))
        })?;
        Ok(Self { name: name.to_string(), value: json })
    }

    /// Legacy workflow-command annotation for this output.
    pub fn annotation(&self) -> String {
        format!("::set-output name={}::{}", self.name, self.value)
    }
}

/// Write step outputs to stdout and, if set, the `GITHUB_OUTPUT` file.
///
/// # Errors
/// Returns an error if a value spans lines or file I/O fails.
pub fn write_step_outputs(outputs: &[StepOutput]) -> Result<(), AppError> {
    for output in outputs {
        if output.value.contains('\n') {
            return Err(AppError::InternalError(format!(
                "Output '{}' must be a single line",
                output.name
            )));
        }
    }

    let mut stdout = std::io::stdout().lock();
    for output in outputs {
        writeln!(stdout, "{}", output.annotation())?;
    }

    if let Ok(path) = std::env::var("GITHUB_OUTPUT") {
        append_github_output(Path::new(&path), outputs)?;
    }

    Ok(())
}

fn append_github_output(path: &Path, outputs: &[StepOutput]) -> Result<(), AppError> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::InternalError(format!("Failed to open GITHUB_OUTPUT: {}", e)))?;

    for output in outputs {
        writeln!(file, "{}={}", output.name, output.value).map_err(|e| {
            AppError::InternalError(format!("Failed to write GITHUB_OUTPUT: {}", e))
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn annotation_uses_legacy_format() {
        let output = StepOutput::plain("python-version", "3.9.0");
        assert_eq!(output.annotation(), "::set-output name=python-version::3.9.0");
    }

    #[test]
    fn json_outputs_are_compact() {
        let list = StepOutput::json("target-platform", &["windows-latest", "macos-latest"]).unwrap();
        assert_eq!(list.value, r#"["windows-latest","macos-latest"]"#);

        let link = StepOutput::json("zip-link", "https://github.com/o/r/files/1/a.zip").unwrap();
        assert_eq!(link.value, r#""https://github.com/o/r/files/1/a.zip""#);
    }

    #[test]
    fn multiline_values_are_rejected() {
        let err = write_step_outputs(&[StepOutput::plain("bad", "a\nb")]).unwrap_err();
        assert!(matches!(err, AppError::InternalError(msg) if msg.contains("single line")));
    }

    #[test]
    #[serial]
    fn github_output_receives_one_line_per_output() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_string_lossy().to_string();

        // SAFETY: Tests run in serial, env var manipulation is isolated
        unsafe {
            std::env::set_var("GITHUB_OUTPUT", &path);
        }

        let outputs = vec![
            StepOutput::plain("python-version", "3.9.0"),
            StepOutput::json("target-platform", &["ubuntu-latest"]).unwrap(),
        ];
        let result = write_step_outputs(&outputs);

        // SAFETY: Tests run in serial, env var manipulation is isolated
        unsafe {
            std::env::remove_var("GITHUB_OUTPUT");
        }
        result.unwrap();

        let contents = fs::read_to_string(temp_file.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec!["python-version=3.9.0", r#"target-platform=["ubuntu-latest"]"#]);
    }

    #[test]
    #[serial]
    fn no_github_output_when_env_not_set() {
        // SAFETY: Tests run in serial, env var manipulation is isolated
        unsafe {
            std::env::remove_var("GITHUB_OUTPUT");
        }

        let result = write_step_outputs(&[StepOutput::plain("python-version", "3.9.0")]);
        assert!(result.is_ok());
    }
}
