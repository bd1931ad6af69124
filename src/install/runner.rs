//! Runners that execute install steps.

use crate::error::{PiperError, Result};
use crate::install::InstallStep;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Executes a single install step.
pub trait CommandRunner: Send + Sync {
    /// Run `step` with `cwd` as the working directory.
    ///
    /// Returns an error if the command cannot be started or exits non-zero.
    fn run(&self, step: &InstallStep, cwd: &Path) -> Result<()>;
}

/// Spawns real processes, inheriting stdin, stdout and stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, step: &InstallStep, cwd: &Path) -> Result<()> {
        tracing::info!(ecosystem = %step.ecosystem, command = %step, "Running install step");

        let status = Command::new(&step.program)
            .args(&step.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => PiperError::CommandNotFound {
                    program: step.program.clone(),
                },
                _ => PiperError::Spawn {
                    command: step.to_string(),
                    source,
                },
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(PiperError::CommandFailed {
                command: step.to_string(),
                status,
            })
        }
    }
}

/// Prints each step instead of running it.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, step: &InstallStep, cwd: &Path) -> Result<()> {
        println!("[DRY RUN] ({}) {}$ {}", step.ecosystem, cwd.display(), step);
        Ok(())
    }
}
