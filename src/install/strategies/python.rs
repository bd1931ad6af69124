//! pip install strategy.

use crate::config::PythonPolicy;
use crate::detect::Ecosystem;
use crate::install::{InstallStep, InstallStrategy};
use std::path::Path;

/// Strategy for Python projects, driven through `<python> -m pip`.
pub struct PythonStrategy {
    python: String,
    policy: PythonPolicy,
}

impl PythonStrategy {
    pub fn new(python: impl Into<String>, policy: PythonPolicy) -> Self {
        Self {
            python: python.into(),
            policy,
        }
    }

    fn pip(&self, args: &[&str]) -> InstallStep {
        let mut full = vec!["-m", "pip"];
        full.extend_from_slice(args);
        InstallStep::new(Ecosystem::Python, self.python.as_str(), &full)
    }

    fn upgrade_toolchain(&self) -> InstallStep {
        self.pip(&["install", "--upgrade", "pip", "setuptools", "wheel"])
    }
}

impl Default for PythonStrategy {
    fn default() -> Self {
        Self::new("python3", PythonPolicy::default())
    }
}

impl InstallStrategy for PythonStrategy {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Python
    }

    fn plan(&self, root: &Path) -> Vec<InstallStep> {
        let has_requirements = root.join("requirements.txt").exists();
        let has_pyproject = root.join("pyproject.toml").exists();

        match self.policy {
            PythonPolicy::Manifest => {
                if has_requirements {
                    vec![
                        self.upgrade_toolchain(),
                        self.pip(&["install", "-r", "requirements.txt"]),
                    ]
                } else if has_pyproject {
                    vec![self.pip(&["install", "."])]
                } else {
                    Vec::new()
                }
            }
            PythonPolicy::TestRunnerFallback => {
                let install = if has_requirements {
                    self.pip(&["install", "-r", "requirements.txt"])
                } else if has_pyproject {
                    self.pip(&["install", "."])
                } else {
                    self.pip(&["install", "pytest"])
                };
                vec![self.upgrade_toolchain(), install]
            }
        }
    }
}
