//! Shell completions.

use crate::cli::{Cli, CompletionsArgs};
use clap::CommandFactory;
use std::io;

/// Print completions for the requested shell to stdout.
pub fn run(args: CompletionsArgs) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(args.shell, &mut command, name, &mut io::stdout());
}
