pub(crate) mod config;
pub(crate) mod list;
pub(crate) mod shell;
pub(crate) mod stats;

use book_catalog::{load_seed_dir, load_seed_file, Book};
use book_catalog_store::{CatalogService, InMemoryStore};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use uuid::Uuid;

use crate::render::render_grid;
use crate::settings::{DisplaySettings, Settings};
use crate::CliError;

/// Build the session's catalog: sample books (unless disabled) plus any
/// configured seed file or directory.
///
/// Also returns the owner for books added during the session. That is the
/// owner of the sample books, or a fresh id when samples are off; owners
/// named in seed files are never chosen.
pub(crate) fn build_service(settings: &Settings) -> Result<(CatalogService, Uuid), CliError> {
    let owner_id = Uuid::new_v4();
    let mut service = if settings.seed.samples {
        CatalogService::new(InMemoryStore::seeded_with_owner(owner_id))
    } else {
        CatalogService::new(InMemoryStore::new())
    };

    if let Some(path) = &settings.seed.file {
        let entries = if path.is_dir() {
            load_seed_dir(path)?
        } else {
            load_seed_file(path)?
        };
        let ids = service.seed(entries)?;
        log::debug!("Loaded {} books from {}", ids.len(), path.display());
    }

    Ok((service, owner_id))
}

/// Resolve a full id, or a unique prefix of one as shown on cards.
pub(crate) fn resolve_id(service: &CatalogService, input: &str) -> Result<Uuid, CliError> {
    let trimmed = input.trim().trim_start_matches('#');
    if trimmed.is_empty() {
        return Err(CliError::invalid_input("missing book id"));
    }

    if let Ok(id) = Uuid::parse_str(trimmed) {
        return match service.get(id) {
            Some(_) => Ok(id),
            None => Err(CliError::no_match(trimmed)),
        };
    }

    let needle = trimmed.to_lowercase().replace('-', "");
    let matches: Vec<Uuid> = service
        .get_all()
        .iter()
        .map(|b| b.id)
        .filter(|id| id.simple().to_string().starts_with(&needle))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(CliError::no_match(trimmed)),
        _ => Err(CliError::ambiguous(trimmed)),
    }
}

/// Print books as a card grid followed by a count.
pub(crate) fn print_grid(books: &[&Book], display: &DisplaySettings) {
    if books.is_empty() {
        log::info!(
            "{}",
            "No books found.".if_supports_color(Stdout, |t| t.dimmed())
        );
        return;
    }
    for line in render_grid(books, display.columns, display.card_width) {
        log::info!("{line}");
    }
    log::info!(
        "{}",
        format!("{} book(s)", books.len()).if_supports_color(Stdout, |t| t.dimmed())
    );
}
