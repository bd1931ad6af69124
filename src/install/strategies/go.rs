//! Go modules install strategy.

use crate::detect::Ecosystem;
use crate::install::{InstallStep, InstallStrategy};
use std::path::Path;

/// Strategy for Go projects.
///
/// Downloads module dependencies into the module cache without building.
pub struct GoStrategy;

impl InstallStrategy for GoStrategy {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Go
    }

    fn plan(&self, root: &Path) -> Vec<InstallStep> {
        if root.join("go.mod").exists() {
            vec![InstallStep::new(Ecosystem::Go, "go", &["mod", "download"])]
        } else {
            Vec::new()
        }
    }
}
