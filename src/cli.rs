use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Piper - Detect a project's stack and bootstrap its dependencies
#[derive(Parser, Debug)]
#[command(name = "piper")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, env = "PIPER_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Detect languages, framework and deploy target, and write a report
    Scan(ScanArgs),

    /// Detect the project and install its dependencies
    Install(InstallArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Root directory to scan
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// JSON report output path [default: .pipeline/detection.json]
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Root directory to scan and install dependencies for
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Show the commands that would run without running them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Install ecosystems concurrently
    #[arg(short, long)]
    pub parallel: bool,
}
