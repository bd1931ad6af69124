//! Project stack detection.
//!
//! This module provides:
//! - The marker catalog mapping categories to evidence files
//! - The classification record derived from a scan
//! - The `detect` entry point

mod catalog;
mod classification;

pub use catalog::{Category, Signals};
pub use classification::{Classification, DeployTarget, Ecosystem, Framework};

use std::path::Path;

/// Scan `root` for marker files and classify the project.
///
/// Never fails: a missing or unreadable root is treated as empty.
pub fn detect(root: &Path) -> Classification {
    let classification = Classification::from_signals(Signals::collect(root));

    tracing::info!(
        root = %root.display(),
        types = ?classification.types(),
        framework = ?classification.framework(),
        deploy = ?classification.deploy(),
        "Detection complete"
    );

    classification
}
