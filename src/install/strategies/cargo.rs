//! Rust/Cargo install strategy.

use crate::detect::Ecosystem;
use crate::install::{InstallStep, InstallStrategy};
use std::path::Path;

/// Strategy for Rust projects.
///
/// Fetches declared dependencies into the local cache without compiling.
pub struct CargoStrategy;

impl InstallStrategy for CargoStrategy {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Rust
    }

    fn plan(&self, root: &Path) -> Vec<InstallStep> {
        if root.join("Cargo.toml").exists() {
            vec![InstallStep::new(Ecosystem::Rust, "cargo", &["fetch"])]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cargo_fetch() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Cargo.toml"), "[package]").unwrap();

        let plan = CargoStrategy.plan(tmp.path());
        assert_eq!(plan, vec![InstallStep::new(Ecosystem::Rust, "cargo", &["fetch"])]);
    }

    #[test]
    fn test_cargo_without_manifest() {
        let tmp = TempDir::new().unwrap();
        assert!(CargoStrategy.plan(tmp.path()).is_empty());
    }
}
