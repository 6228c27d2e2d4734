use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{Result, SproutError};

/// Creates a language environment (a Python virtualenv) inside a new project.
pub trait EnvironmentSetup {
    fn setup(&self, env_dir: &Path) -> Result<()>;
}

/// Runs `<interpreter> -m venv <env_dir>`.
#[derive(Debug, Clone)]
pub struct PythonVenv {
    interpreter: String,
}

impl Default for PythonVenv {
    fn default() -> Self {
        Self::new("python3")
    }
}

impl PythonVenv {
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }
}

impl EnvironmentSetup for PythonVenv {
    fn setup(&self, env_dir: &Path) -> Result<()> {
        debug!(interpreter = %self.interpreter, path = %env_dir.display(), "creating virtualenv");

        let output = Command::new(&self.interpreter)
            .arg("-m")
            .arg("venv")
            .arg(env_dir)
            .output()
            .map_err(|e| SproutError::EnvironmentSetupFailed {
                path: env_dir.to_path_buf(),
                reason: format!("failed to run {}: {e}", self.interpreter),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SproutError::EnvironmentSetupFailed {
                path: env_dir.to_path_buf(),
                reason: format!("{} exited with {}: {}", self.interpreter, output.status, stderr.trim()),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_interpreter_fails_setup() {
        let dir = tempfile::tempdir().unwrap();
        let venv = PythonVenv::new("definitely-not-a-python-interpreter");
        let err = venv.setup(&dir.path().join(".venv")).unwrap_err();
        match err {
            SproutError::EnvironmentSetupFailed { path, reason } => {
                assert_eq!(path, dir.path().join(".venv"));
                assert!(reason.contains("definitely-not-a-python-interpreter"));
            }
            other => panic!("expected EnvironmentSetupFailed, got: {other:?}"),
        }
    }

    #[test]
    fn default_interpreter_is_python3() {
        assert_eq!(PythonVenv::default().interpreter(), "python3");
    }
}
