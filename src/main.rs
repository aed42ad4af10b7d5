//! tfreduce CLI - Transfer Function Reduction
//!
//! Command-line interface for the tfreduce order-reduction library.

use clap::Parser;
use env_logger::Env;
use log::info;

use tfreduce::cli::{commands, Cli, Commands};
use tfreduce::reduction::Method;
use tfreduce::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    info!("tfreduce v{}", env!("CARGO_PKG_VERSION"));

    let output = handle_command(&cli)?;
    print!("{}", output);
    Ok(())
}

fn handle_command(cli: &Cli) -> Result<String> {
    let config = commands::load_config(cli.config.as_deref())?;
    let model = commands::build_model(
        cli.gain,
        cli.delay,
        cli.zeros.as_deref(),
        cli.poles.as_deref(),
    );

    match cli.command {
        Some(Commands::Show) => Ok(commands::show(&model, cli.latex)),
        Some(Commands::Fopdt { skogestad }) => {
            let method = if skogestad {
                Method::Skogestad
            } else {
                Method::General
            };
            commands::fopdt(&model, method, &config, cli.latex)
        }
        Some(Commands::Sopdt) => commands::sopdt(&model, &config, cli.latex),
        Some(Commands::All) | None => commands::all(&model, &config, cli.latex),
    }
}
