//! Install command implementation.

use crate::cli::InstallArgs;
use crate::config::Config;
use crate::detect::detect;
use crate::install::{DryRunRunner, Installer, SystemRunner};
use anyhow::{Context, Result};

/// Run the install command.
pub fn run(args: InstallArgs, config: &Config) -> Result<()> {
    let parallel = args.parallel || config.installer.parallel;

    let classification = detect(&args.root);

    if args.dry_run {
        let installer = Installer::new(&config.installer, DryRunRunner).with_parallel(false);
        let plan = installer.plan(&classification, &args.root);
        if plan.is_empty() {
            println!("Nothing to install.");
            return Ok(());
        }
        installer.execute(&plan, &args.root)?;
        return Ok(());
    }

    Installer::new(&config.installer, SystemRunner)
        .with_parallel(parallel)
        .install(&classification, &args.root)
        .with_context(|| format!("installing dependencies in {}", args.root.display()))?;

    Ok(())
}
