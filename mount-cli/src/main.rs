//! mountcalc: command-line host for the mount geometry calculator.

mod args;
mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match &cli.command {
        Commands::Init { output } => commands::init(output.as_deref()),
        Commands::Compute { config, unit, json } => commands::compute(config, *unit, *json),
        Commands::Preview {
            config,
            output,
            px_per_mm,
            unit,
        } => commands::preview(config, output, *px_per_mm, *unit),
        Commands::Toggle { config, output } => commands::toggle(config, output.as_deref()),
        Commands::Suggest {
            config,
            response,
            output,
        } => commands::suggest(config, response, output.as_deref()),
        Commands::Papers { unit } => commands::papers(*unit),
    }
}

fn init_logger(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}
