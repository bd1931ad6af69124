//! Dependency installation for detected ecosystems.
//!
//! This module provides:
//! - Per-ecosystem strategies that pick commands from lock-file state
//! - Runners that execute (or print) those commands
//! - An installer that runs them in order, aborting on the first failure

mod installer;
mod runner;
pub mod strategies;
mod strategy;

pub use installer::{EcosystemPlan, InstallOptions, InstallPlan, Installer};
pub use runner::{CommandRunner, DryRunRunner, SystemRunner};
pub use strategies::all_strategies;
pub use strategy::{InstallStep, InstallStrategy};

use crate::config::InstallerConfig;
use crate::detect::Classification;
use crate::error::Result;
use std::path::Path;

/// Install dependencies for `classification` at `root` with default settings.
///
/// Runs real package managers sequentially and fails on the first command
/// that cannot be started or exits non-zero.
pub fn install(classification: &Classification, root: &Path) -> Result<()> {
    Installer::new(&InstallerConfig::default(), SystemRunner).install(classification, root)
}
