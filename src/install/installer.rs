//! Orchestrates install strategies and runs their commands.

use crate::config::InstallerConfig;
use crate::detect::{Classification, Ecosystem};
use crate::error::{PiperError, Result};
use crate::install::runner::CommandRunner;
use crate::install::strategies::all_strategies;
use crate::install::{InstallStep, InstallStrategy};
use rayon::prelude::*;
use std::path::Path;

/// Steps planned for one ecosystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcosystemPlan {
    pub ecosystem: Ecosystem,
    pub steps: Vec<InstallStep>,
}

/// Ordered commands for a whole project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallPlan {
    groups: Vec<EcosystemPlan>,
}

impl InstallPlan {
    /// Per-ecosystem groups, in installation order. Groups are never empty.
    pub fn groups(&self) -> &[EcosystemPlan] {
        &self.groups
    }

    /// All steps, flattened in execution order.
    pub fn steps(&self) -> impl Iterator<Item = &InstallStep> {
        self.groups.iter().flat_map(|g| g.steps.iter())
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.steps.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Options for the installer.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Install ecosystems concurrently. Steps within an ecosystem stay ordered.
    pub parallel: bool,
}

/// Installs dependencies for every detected ecosystem.
pub struct Installer<R: CommandRunner> {
    strategies: Vec<Box<dyn InstallStrategy>>,
    runner: R,
    options: InstallOptions,
}

impl<R: CommandRunner> Installer<R> {
    /// Create an installer with the built-in strategies.
    pub fn new(config: &InstallerConfig, runner: R) -> Self {
        Self {
            strategies: all_strategies(config),
            runner,
            options: InstallOptions {
                parallel: config.parallel,
            },
        }
    }

    /// Create an installer with custom strategies, run in the given order.
    pub fn with_strategies(
        strategies: Vec<Box<dyn InstallStrategy>>,
        runner: R,
        options: InstallOptions,
    ) -> Self {
        Self {
            strategies,
            runner,
            options,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.options.parallel = parallel;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Decide which commands to run, without running anything.
    ///
    /// Only ecosystems present in `classification.types` are considered.
    pub fn plan(&self, classification: &Classification, root: &Path) -> InstallPlan {
        let groups = self
            .strategies
            .iter()
            .filter(|s| classification.has(s.ecosystem()))
            .filter_map(|s| {
                let steps = s.plan(root);
                if steps.is_empty() {
                    tracing::debug!(ecosystem = %s.ecosystem(), "Nothing to install");
                    None
                } else {
                    Some(EcosystemPlan {
                        ecosystem: s.ecosystem(),
                        steps,
                    })
                }
            })
            .collect();

        InstallPlan { groups }
    }

    /// Plan and run all install steps for the project at `root`.
    ///
    /// Stops at the first failing command; no later step is started.
    pub fn install(&self, classification: &Classification, root: &Path) -> Result<()> {
        let plan = self.plan(classification, root);
        self.execute(&plan, root)
    }

    /// Run a previously computed plan.
    pub fn execute(&self, plan: &InstallPlan, root: &Path) -> Result<()> {
        if plan.is_empty() {
            tracing::info!(root = %root.display(), "No dependencies to install");
            return Ok(());
        }

        if self.options.parallel && plan.groups().len() > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(plan.groups().len())
                .build()
                .map_err(|e| PiperError::Pool(e.to_string()))?;

            pool.install(|| {
                plan.groups()
                    .par_iter()
                    .try_for_each(|group| self.run_group(group, root))
            })
        } else {
            plan.groups()
                .iter()
                .try_for_each(|group| self.run_group(group, root))
        }
    }

    fn run_group(&self, group: &EcosystemPlan, root: &Path) -> Result<()> {
        for step in &group.steps {
            self.runner.run(step, root).map_err(|e| {
                tracing::error!(ecosystem = %group.ecosystem, command = %step, error = %e, "Install step failed");
                e
            })?;
        }
        Ok(())
    }
}
