mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use commands::execute_command;
use linear_scans::Strategies;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let strategies = match &cli.config {
        Some(path) => Strategies::load(path)?,
        None => Strategies::default(),
    };
    execute_command(cli.command, strategies, &mut std::io::stdout().lock())
}
