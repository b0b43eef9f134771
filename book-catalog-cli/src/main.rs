//! book-catalog CLI
//!
//! Browse a personal book catalog from the terminal. Every run starts from a
//! fresh in-memory catalog seeded with sample books and any configured seed
//! file; the `shell` command keeps one catalog alive across edits.

mod cli_types;
mod commands;
mod error;
mod render;
mod settings;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;

use cli_types::{Cli, Commands, ConfigAction};
use commands::config::{run_config_path, run_config_show};
use commands::list::{run_genres, run_list, run_search, run_show, run_top};
use commands::shell::run_shell;
use commands::stats::run_stats;
use settings::{load_settings, settings_path};

pub(crate) use error::CliError;

/// Print an empty line through the logger so `--quiet` suppresses it too.
pub(crate) fn log_blank() {
    log::info!("");
}

fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();
    builder.target(env_logger::Target::Stdout);

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            log::Level::Error => writeln!(buf, "error: {}", record.args()),
            log::Level::Warn => writeln!(buf, "warning: {}", record.args()),
            _ => writeln!(buf, "{}", record.args()),
        });
    }
    builder.init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let path = cli.settings.clone().unwrap_or_else(settings_path);
    let settings = load_settings(&path)?.with_overrides(cli.columns, cli.seed, cli.no_samples);

    if !settings.display.color {
        owo_colors::set_override(false);
    }

    if let Commands::Config { action } = &cli.command {
        return match action {
            ConfigAction::Path => {
                run_config_path(&path);
                Ok(())
            }
            ConfigAction::Show => run_config_show(&path, &settings),
        };
    }

    let (mut service, owner_id) = commands::build_service(&settings)?;
    let display = &settings.display;

    match cli.command {
        Commands::List { filters } => run_list(&service, &filters, display),
        Commands::Search { keyword } => run_search(&service, &keyword, display),
        Commands::Show { id } => run_show(&service, &id)?,
        Commands::Genres => run_genres(&service),
        Commands::Stats => run_stats(&service),
        Commands::Top { limit } => run_top(&service, limit),
        Commands::Shell => {
            run_shell(&mut service, display, owner_id, std::io::stdin().lock())?;
        }
        Commands::Config { .. } => {}
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
