mod cli;
mod error;
mod fmt;
mod interpreter;
mod models;
mod report;
mod settings;
mod translator;

use clap::Parser;

use cli::{Cli, Commands, ConfigCommands};

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Interpret {
            file,
            json,
            breakdown,
            dust_threshold,
            fixed_wording,
        } => cli::interpret::run(
            &file,
            cli::interpret::Options {
                json,
                breakdown,
                dust_threshold,
                fixed_wording,
            },
        ),
        Commands::Stats { file } => cli::stats::run(&file),
        Commands::Config { command } => match command {
            ConfigCommands::Show => cli::config::show(),
            ConfigCommands::Set {
                dust_threshold,
                producer,
            } => cli::config::set(dust_threshold, producer),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
