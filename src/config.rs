use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the detection report, relative to the working directory.
pub const DEFAULT_REPORT_PATH: &str = ".pipeline/detection.json";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub installer: InstallerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Where `scan` writes the JSON report
    pub report_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallerConfig {
    /// Install ecosystems concurrently
    pub parallel: bool,
    /// Python interpreter used to drive pip
    pub python: String,
    /// What to do for Python projects
    pub python_policy: PythonPolicy,
}

/// Policy for Python dependency installation.
///
/// The two policies are never combined; one is selected per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PythonPolicy {
    /// Act only when `requirements.txt` or `pyproject.toml` is present.
    #[default]
    Manifest,
    /// Always upgrade the packaging toolchain, and install `pytest` when no
    /// manifest is present.
    TestRunnerFallback,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            python: "python3".to_string(),
            python_policy: PythonPolicy::Manifest,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, the user config
    /// file (`<config dir>/piper/config.toml`) is read when present, and
    /// defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config: Config =
            toml::from_str(&contents).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");

        Ok(config)
    }

    /// Path of the user config file, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("piper").join("config.toml"))
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.installer.python.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "installer.python must not be empty".into(),
            ));
        }
        if self.scan.report_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "scan.report_path must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scan.report_path, PathBuf::from(DEFAULT_REPORT_PATH));
        assert!(!config.installer.parallel);
    }

    #[test]
    fn config_serializes_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[installer]"));
        assert!(toml_str.contains("python_policy = \"manifest\""));
    }

    #[test]
    fn default_python_policy_is_manifest() {
        assert_eq!(PythonPolicy::default(), PythonPolicy::Manifest);
    }

    #[test]
    fn empty_python_is_invalid() {
        let mut config = Config::default();
        config.installer.python = "  ".into();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
