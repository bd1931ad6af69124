//! Scan command implementation

use crate::cli::ScanArgs;
use crate::config::Config;
use crate::detect::detect;
use crate::report::{format_json, format_table, write_report};
use anyhow::{Context, Result};

/// Run the scan command
pub fn run(args: ScanArgs, config: &Config) -> Result<()> {
    let report_path = args
        .report
        .unwrap_or_else(|| config.scan.report_path.clone());

    tracing::info!(root = %args.root.display(), "Scanning project");

    let classification = detect(&args.root);

    write_report(&classification, &report_path)
        .with_context(|| format!("writing report to {}", report_path.display()))?;

    let output = if args.json {
        format_json(&classification, true)?
    } else {
        format_table(&classification)
    };

    print!("{}", output);
    if args.json {
        println!();
    }

    Ok(())
}
