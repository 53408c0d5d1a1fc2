pub mod error;

use error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure for implgen
///
/// The tool root is carried here explicitly so the generation layer never
/// reads ambient environment state itself; `GOPATH` is consulted only as a
/// fallback when no config file names a root.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    /// Root directory containing the generator under bin/ (optional,
    /// falls back to the GOPATH environment variable)
    pub go_path: Option<String>,

    /// Generator binary name (optional, defaults to "impl")
    pub binary: Option<String>,
}

impl Config {
    /// Load configuration from implgen.toml
    ///
    /// A missing config file is not an error: the original workflow ran with
    /// no config at all, relying on GOPATH. Defaults apply in that case.
    pub fn load(target_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = match find_config_file(target_path.as_ref())? {
            Some(path) => path,
            None => {
                debug!("No implgen.toml found, using defaults");
                return Ok(Config::default());
            }
        };

        let config_data = fs::read_to_string(&config_path)?;
        let mut config: Config = toml::from_str(&config_data)?;

        // Expand environment variables
        config.expand_env_vars();

        // Normalize paths relative to config file location
        let config_dir = config_path.parent().unwrap_or(Path::new("."));
        config.normalize_paths(config_dir);

        Ok(config)
    }

    /// Resolve the tool root: configured go_path first, GOPATH second
    pub fn resolve_root(&self) -> Result<PathBuf> {
        if let Some(root) = &self.go_path {
            return Ok(PathBuf::from(root));
        }
        env::var("GOPATH")
            .map(PathBuf::from)
            .map_err(|_| ConfigError::MissingField("go_path (or GOPATH environment variable)".to_string()))
    }

    /// Name of the generator binary, without platform suffix
    pub fn binary_name(&self) -> &str {
        self.binary.as_deref().unwrap_or("impl")
    }

    /// Expand environment variables in configuration values
    fn expand_env_vars(&mut self) {
        if let Some(go_path) = &self.go_path {
            if let Some(expanded) = expand_env_var(go_path) {
                self.go_path = Some(expanded);
            }
        }
    }

    /// Normalize paths to be relative to config file location
    fn normalize_paths(&mut self, config_dir: &Path) {
        if let Some(go_path) = &self.go_path {
            if !Path::new(go_path).is_absolute() {
                let full_path = config_dir.join(go_path);
                self.go_path = Some(full_path.to_string_lossy().to_string());
            }
        }
    }
}

/// Find implgen.toml by searching upward from the given path
fn find_config_file(start_path: &Path) -> Result<Option<PathBuf>> {
    let current_dir = if start_path.is_file() {
        start_path
            .parent()
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid file path: {}", start_path.display())))?
    } else {
        start_path
    };

    // Convert to absolute path
    let mut current_dir = current_dir.canonicalize()?;

    loop {
        let config_path = current_dir.join("implgen.toml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break, // Reached root
        }
    }

    Ok(None)
}

/// Expand environment variable in the format ${VAR_NAME}
fn expand_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        env::var(var_name).ok()
    } else {
        None
    }
}
