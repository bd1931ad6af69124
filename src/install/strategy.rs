//! Core trait and types for install planning.

use crate::detect::Ecosystem;
use std::fmt;
use std::path::Path;

/// A single external command the installer will run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallStep {
    /// Ecosystem this step belongs to.
    pub ecosystem: Ecosystem,
    /// Executable name, resolved through `PATH`.
    pub program: String,
    /// Fixed argument list. The project root is never part of it.
    pub args: Vec<String>,
}

impl InstallStep {
    pub fn new(ecosystem: Ecosystem, program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            ecosystem,
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl fmt::Display for InstallStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Trait for per-ecosystem install strategies.
///
/// A strategy only decides; it inspects lock files under the root and returns
/// the commands to run, in order. An empty plan means nothing to do.
pub trait InstallStrategy: Send + Sync {
    /// Ecosystem handled by this strategy.
    fn ecosystem(&self) -> Ecosystem;

    /// Commands to run for the project at `root`.
    fn plan(&self, root: &Path) -> Vec<InstallStep>;
}
