use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::settings::{settings_to_string, Settings};
use crate::CliError;

/// Print the settings file path.
pub(crate) fn run_config_path(path: &Path) {
    log::info!("{}", path.display());
}

/// Show the effective settings and where they came from.
pub(crate) fn run_config_show(path: &Path, settings: &Settings) -> Result<(), CliError> {
    log::info!("{}", "Settings".if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  File: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  File: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    for line in settings_to_string(settings)?.lines() {
        log::info!("  {line}");
    }
    Ok(())
}
