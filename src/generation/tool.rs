use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

use super::error::{GenerateError, Result};
use crate::config::Config;

/// Handle to the external interface-to-struct generator
///
/// The root directory comes in through configuration; this module never
/// consults the process environment itself. The subprocess runs on the tokio
/// runtime so a caller driving an interactive surface stays responsive.
pub struct GeneratorTool {
    root: PathBuf,
    binary: String,
}

impl GeneratorTool {
    pub fn new(root: impl Into<PathBuf>, binary: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            binary: binary.into(),
        }
    }

    /// Build a tool from configuration
    pub fn from_config(config: &Config) -> crate::core::Result<Self> {
        Ok(Self::new(config.resolve_root()?, config.binary_name()))
    }

    /// Full path to the generator binary: `<root>/bin/<binary>`, with the
    /// platform executable suffix on Windows
    pub fn binary_path(&self) -> PathBuf {
        let mut name = self.binary.clone();
        if cfg!(windows) {
            name.push_str(".exe");
        }
        self.root.join("bin").join(name)
    }

    /// Run the generator with a receiver spec and interface name, with the
    /// working directory set to the directory of the current document
    ///
    /// Returns the generated method stubs printed on stdout.
    pub async fn run(&self, receiver: &str, interface_name: &str, cwd: &Path) -> Result<String> {
        let binary_path = self.binary_path();
        debug!(
            "Running {} with receiver {:?} for interface {}",
            binary_path.display(),
            receiver,
            interface_name
        );

        let output = Command::new(&binary_path)
            .arg(receiver)
            .arg(interface_name)
            .current_dir(cwd)
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => GenerateError::BinaryNotFound(binary_path.clone()),
                _ => GenerateError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GenerateError::Failed(format!(
                "{} exited with {}: {}",
                binary_path.display(),
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout).map_err(|_| GenerateError::InvalidOutput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_path() {
        let tool = GeneratorTool::new("/home/dev/go", "impl");
        let path = tool.binary_path();

        if cfg!(windows) {
            assert_eq!(path, PathBuf::from("/home/dev/go/bin/impl.exe"));
        } else {
            assert_eq!(path, PathBuf::from("/home/dev/go/bin/impl"));
        }
    }

    #[tokio::test]
    async fn test_run_missing_binary() {
        let tool = GeneratorTool::new("/nonexistent-implgen-root", "impl");
        let err = tool
            .run("a *Animal", "Animal", Path::new("/tmp"))
            .await
            .unwrap_err();

        assert!(matches!(err, GenerateError::BinaryNotFound(_)));
    }
}
