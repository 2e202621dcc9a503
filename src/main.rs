use alien_order::cli::{Cli, Commands};
use alien_order::cli_handlers;
use clap::Parser;
use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Solve {
            words,
            file,
            tie_break,
            json,
            strict,
        } => cli_handlers::handle_solve(words, file.as_deref(), tie_break, json, strict),
        Commands::Demo => cli_handlers::handle_demo(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
