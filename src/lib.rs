//! Piper - Project stack detection and dependency bootstrap
//!
//! This crate provides functionality for:
//! - Detecting language ecosystems, UI frameworks and deploy targets from marker files
//! - Writing and reading JSON detection reports
//! - Installing dependencies with the package manager each ecosystem uses

pub mod cli;
pub mod commands;
pub mod config;
pub mod detect;
pub mod error;
pub mod install;
pub mod report;

// Re-export commonly used types
pub use config::Config;
pub use detect::{detect, Classification};
pub use error::{PiperError, Result};
pub use install::install;
