//! npm/pnpm/yarn install strategy.

use crate::detect::Ecosystem;
use crate::install::{InstallStep, InstallStrategy};
use std::path::Path;

/// Lock files checked in priority order, with the frozen install they select.
const LOCKFILES: &[(&str, &str, &[&str])] = &[
    ("package-lock.json", "npm", &["ci"]),
    ("pnpm-lock.yaml", "pnpm", &["install", "--frozen-lockfile"]),
    ("yarn.lock", "yarn", &["install", "--frozen-lockfile"]),
];

/// Strategy for Node.js projects.
///
/// Picks exactly one package manager from the first lock file found, falling
/// back to a plain `npm install` when only `package.json` exists.
pub struct NodeStrategy;

impl InstallStrategy for NodeStrategy {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Node
    }

    fn plan(&self, root: &Path) -> Vec<InstallStep> {
        if let Some((_, program, args)) = LOCKFILES
            .iter()
            .find(|(lockfile, _, _)| root.join(lockfile).exists())
        {
            return vec![InstallStep::new(Ecosystem::Node, *program, args)];
        }

        if root.join("package.json").exists() {
            return vec![InstallStep::new(Ecosystem::Node, "npm", &["install"])];
        }

        Vec::new()
    }
}
