use std::collections::{BTreeMap, HashSet};

use book_catalog::Book;
use book_catalog_store::{sorted_by_title, CatalogService};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use uuid::Uuid;

use crate::cli_types::ListFilterArgs;
use crate::render::{detail_lines, format_rating, short_id};
use crate::settings::DisplaySettings;
use crate::CliError;

use super::{print_grid, resolve_id};

/// Books matching every given filter.
pub(crate) fn filtered_books<'a>(
    service: &'a CatalogService,
    filters: &ListFilterArgs,
) -> Vec<&'a Book> {
    let mut books = match filters.owner {
        Some(owner) => service.list_by_owner(owner),
        None => service.get_all(),
    };
    if let Some(genre) = &filters.genre {
        retain_in(&mut books, &service.list_by_genre(genre));
    }
    if let Some(min) = filters.min_rating {
        retain_in(&mut books, &service.list_min_rating(min));
    }
    books
}

fn retain_in(books: &mut Vec<&Book>, allowed: &[&Book]) {
    let ids: HashSet<Uuid> = allowed.iter().map(|b| b.id).collect();
    books.retain(|b| ids.contains(&b.id));
}

pub(crate) fn run_list(
    service: &CatalogService,
    filters: &ListFilterArgs,
    display: &DisplaySettings,
) {
    let books = sorted_by_title(filtered_books(service, filters));
    print_grid(&books, display);
}

/// Search; a blank keyword shows the whole catalog.
pub(crate) fn run_search(service: &CatalogService, keyword: &str, display: &DisplaySettings) {
    let keyword = keyword.trim();
    let books = if keyword.is_empty() {
        service.get_all()
    } else {
        service.search(keyword)
    };
    print_grid(&sorted_by_title(books), display);
}

pub(crate) fn run_show(service: &CatalogService, id: &str) -> Result<(), CliError> {
    let id = resolve_id(service, id)?;
    let book = service.get(id).ok_or_else(|| CliError::no_match(id.to_string()))?;
    log::info!("{}", book.title.if_supports_color(Stdout, |t| t.bold()));
    for line in detail_lines(book) {
        log::info!("{line}");
    }
    Ok(())
}

pub(crate) fn run_genres(service: &CatalogService) {
    let mut counts: BTreeMap<String, usize> = service
        .list_genres()
        .into_iter()
        .map(|g| (g, 0))
        .collect();
    for book in service.get_all() {
        if let Some(count) = counts.get_mut(&book.genre) {
            *count += 1;
        }
    }

    if counts.is_empty() {
        log::info!("No genres yet.");
        return;
    }
    log::info!("{}", "Genres:".if_supports_color(Stdout, |t| t.bold()));
    for (genre, count) in counts {
        let label = if genre.is_empty() { "(none)" } else { genre.as_str() };
        log::info!(
            "  {} {}",
            label.if_supports_color(Stdout, |t| t.cyan()),
            format!("({count})").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

pub(crate) fn run_top(service: &CatalogService, limit: usize) {
    let books = service.top_rated(limit);
    if books.is_empty() {
        log::info!("No books to rank.");
        return;
    }
    for (rank, book) in books.iter().enumerate() {
        log::info!(
            "{:>3}. {}  {} by {} {}",
            rank + 1,
            format_rating(book.rating),
            book.title.if_supports_color(Stdout, |t| t.bold()),
            book.author,
            format!("#{}", short_id(book)).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}
