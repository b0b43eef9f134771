//! Interactive session over one in-memory catalog.
//!
//! Each process starts from a fresh seed, so adding and editing books only
//! makes sense while the session lasts.

use std::io::{BufRead, Lines, Write};
use std::str::FromStr;

use book_catalog::{BookUpdate, NewBook};
use book_catalog_store::CatalogService;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use uuid::Uuid;

use crate::cli_types::ListFilterArgs;
use crate::render::short_id;
use crate::settings::DisplaySettings;
use crate::CliError;

use super::list::{run_genres, run_list, run_search, run_show, run_top};
use super::resolve_id;
use super::stats::run_stats;

const DEFAULT_TOP: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ShellCommand {
    Help,
    Quit,
    List,
    Search(String),
    Genre(String),
    MinRating(f64),
    Show(String),
    Genres,
    Stats,
    Top(usize),
    Add,
    Edit(String),
    Cover { id: String, url: Option<String> },
    Delete(String),
}

/// Parse one input line. Blank lines yield `None`.
pub(crate) fn parse_shell_line(line: &str) -> Result<Option<ShellCommand>, CliError> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = parts.collect();
    let joined = rest.join(" ");

    let required = |what: &str| -> Result<String, CliError> {
        rest.first()
            .map(|s| s.to_string())
            .ok_or_else(|| CliError::invalid_input(format!("{command} needs {what}")))
    };

    let parsed = match command.to_lowercase().as_str() {
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        "list" | "ls" => ShellCommand::List,
        "search" | "find" => ShellCommand::Search(joined),
        "genre" => {
            if joined.is_empty() {
                return Err(CliError::invalid_input("genre needs a genre name"));
            }
            ShellCommand::Genre(joined)
        }
        "min" => {
            let value = required("a rating")?;
            let min = value
                .parse::<f64>()
                .map_err(|_| CliError::invalid_input(format!("'{value}' is not a rating")))?;
            ShellCommand::MinRating(min)
        }
        "show" => ShellCommand::Show(required("a book id")?),
        "genres" => ShellCommand::Genres,
        "stats" => ShellCommand::Stats,
        "top" => {
            let limit = match rest.first() {
                None => DEFAULT_TOP,
                Some(value) => {
                    let n = value.parse::<i64>().map_err(|_| {
                        CliError::invalid_input(format!("'{value}' is not a whole number"))
                    })?;
                    // Negative limits rank nothing
                    usize::try_from(n).unwrap_or(0)
                }
            };
            ShellCommand::Top(limit)
        }
        "add" | "new" => ShellCommand::Add,
        "edit" => ShellCommand::Edit(required("a book id")?),
        "cover" => ShellCommand::Cover {
            id: required("a book id")?,
            url: rest.get(1).map(|s| s.to_string()),
        },
        "delete" | "rm" => ShellCommand::Delete(required("a book id")?),
        other => {
            return Err(CliError::invalid_input(format!(
                "unknown command '{other}' (type 'help')"
            )));
        }
    };
    Ok(Some(parsed))
}

/// Reads answers from the same input the commands come from.
struct Prompter<R> {
    lines: Lines<R>,
}

impl<R: BufRead> Prompter<R> {
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        print!("{prompt}");
        std::io::stdout().flush()?;
        match self.lines.next() {
            Some(line) => Ok(Some(line?)),
            None => Ok(None),
        }
    }

    fn ask(&mut self, label: &str, current: Option<&str>) -> Result<String, CliError> {
        let prompt = match current {
            Some(value) => format!("  {label} [{value}]: "),
            None => format!("  {label}: "),
        };
        let line = self
            .next_line(&prompt)?
            .ok_or_else(|| CliError::invalid_input("input ended"))?;
        Ok(line.trim().to_string())
    }

    fn ask_required(&mut self, label: &str) -> Result<String, CliError> {
        loop {
            let value = self.ask(label, None)?;
            if !value.is_empty() {
                return Ok(value);
            }
            log::warn!(
                "    {}",
                "This field is required.".if_supports_color(Stdout, |t| t.yellow()),
            );
        }
    }

    /// Ask until `interpret` accepts the answer.
    ///
    /// Re-asking keeps the answers meant for later fields from being read
    /// as commands once this one fails.
    fn ask_with<T>(
        &mut self,
        label: &str,
        current: Option<&str>,
        interpret: impl Fn(&str) -> Result<T, CliError>,
    ) -> Result<T, CliError> {
        loop {
            let value = self.ask(label, current)?;
            match interpret(&value) {
                Ok(parsed) => return Ok(parsed),
                Err(e) => log::warn!(
                    "    {}",
                    e.to_string().if_supports_color(Stdout, |t| t.yellow()),
                ),
            }
        }
    }
}

fn parse_value<T: FromStr>(input: &str, label: &str) -> Result<T, CliError> {
    input
        .parse()
        .map_err(|_| CliError::invalid_input(format!("'{input}' is not a valid {label}")))
}

fn parse_optional<T: FromStr>(input: &str, label: &str) -> Result<Option<T>, CliError> {
    if input.is_empty() {
        Ok(None)
    } else {
        parse_value(input, label).map(Some)
    }
}

fn parse_rating(input: &str) -> Result<Option<f64>, CliError> {
    let rating = parse_optional::<f64>(input, "rating")?;
    match rating {
        Some(r) if !r.is_finite() => Err(CliError::invalid_input(format!(
            "'{input}' is not a valid rating"
        ))),
        _ => Ok(rating),
    }
}

/// Interpret an edit answer for a required text field. Blank keeps it.
fn edit_text(input: String, current: &str) -> Option<String> {
    if input.is_empty() || input == current {
        None
    } else {
        Some(input)
    }
}

/// Interpret an edit answer for an optional field. Blank keeps it, `-` clears it.
fn edit_optional<T: FromStr + PartialEq>(
    input: &str,
    current: Option<T>,
    label: &str,
) -> Result<Option<Option<T>>, CliError> {
    match input {
        "" => Ok(None),
        "-" => Ok(current.is_some().then_some(None)),
        value => {
            let parsed: T = parse_value(value, label)?;
            Ok((current.as_ref() != Some(&parsed)).then_some(Some(parsed)))
        }
    }
}

/// Run the interactive loop until `quit` or end of input.
///
/// New books are owned by `owner_id`.
pub(crate) fn run_shell<R: BufRead>(
    service: &mut CatalogService,
    display: &DisplaySettings,
    owner_id: Uuid,
    input: R,
) -> Result<(), CliError> {
    log::info!(
        "{} {}",
        "Book catalog shell.".if_supports_color(Stdout, |t| t.bold()),
        "Type 'help' for commands.".if_supports_color(Stdout, |t| t.dimmed()),
    );

    let mut prompter = Prompter {
        lines: input.lines(),
    };
    loop {
        let Some(line) = prompter.next_line("book-catalog> ")? else {
            break;
        };
        let command = match parse_shell_line(&line) {
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };
        if let Err(e) = execute(service, display, owner_id, command, &mut prompter) {
            log::warn!("{e}");
        }
    }
    Ok(())
}

fn execute<R: BufRead>(
    service: &mut CatalogService,
    display: &DisplaySettings,
    owner_id: Uuid,
    command: ShellCommand,
    prompter: &mut Prompter<R>,
) -> Result<(), CliError> {
    match command {
        ShellCommand::Help => print_help(),
        ShellCommand::Quit => {}
        ShellCommand::List => run_list(service, &ListFilterArgs::default(), display),
        ShellCommand::Search(keyword) => run_search(service, &keyword, display),
        ShellCommand::Genre(genre) => {
            let filters = ListFilterArgs {
                genre: Some(genre),
                ..Default::default()
            };
            run_list(service, &filters, display);
        }
        ShellCommand::MinRating(min) => {
            let filters = ListFilterArgs {
                min_rating: Some(min),
                ..Default::default()
            };
            run_list(service, &filters, display);
        }
        ShellCommand::Show(id) => run_show(service, &id)?,
        ShellCommand::Genres => run_genres(service),
        ShellCommand::Stats => run_stats(service),
        ShellCommand::Top(limit) => run_top(service, limit),
        ShellCommand::Add => add_book(service, owner_id, prompter)?,
        ShellCommand::Edit(id) => edit_book(service, &id, prompter)?,
        ShellCommand::Cover { id, url } => {
            let id = resolve_id(service, &id)?;
            let cleared = url.is_none();
            service.update_cover(id, url)?;
            if cleared {
                log::info!("Cover removed.");
            } else {
                log::info!("Cover updated.");
            }
        }
        ShellCommand::Delete(id) => delete_book(service, &id, prompter)?,
    }
    Ok(())
}

fn add_book<R: BufRead>(
    service: &mut CatalogService,
    owner_id: Uuid,
    prompter: &mut Prompter<R>,
) -> Result<(), CliError> {
    let title = prompter.ask_required("Title")?;
    let author = prompter.ask_required("Author")?;
    let genre = prompter.ask("Genre", None)?;
    let year = prompter.ask_with("Year", None, |s| parse_optional::<i32>(s, "year"))?;
    let rating = prompter.ask_with("Rating (0-5)", None, parse_rating)?;
    let description = parse_optional::<String>(&prompter.ask("Description", None)?, "text")?;
    let cover_url = parse_optional::<String>(&prompter.ask("Cover URL", None)?, "text")?;

    let book = service.create(NewBook {
        owner_id,
        title,
        author,
        genre,
        year,
        rating,
        description,
        cover_url,
    })?;
    log::info!(
        "Added {} {}",
        book.title.if_supports_color(Stdout, |t| t.bold()),
        format!("#{}", short_id(&book)).if_supports_color(Stdout, |t| t.dimmed()),
    );
    Ok(())
}

fn edit_book<R: BufRead>(
    service: &mut CatalogService,
    id: &str,
    prompter: &mut Prompter<R>,
) -> Result<(), CliError> {
    let id = resolve_id(service, id)?;
    let current = service
        .get(id)
        .cloned()
        .ok_or_else(|| CliError::no_match(id.to_string()))?;
    log::info!(
        "{}",
        "Press Enter to keep a value, '-' to clear it.".if_supports_color(Stdout, |t| t.dimmed()),
    );

    let year_text = current.year.map(|y| y.to_string());
    let rating_text = current.rating.map(|r| r.to_string());

    let update = BookUpdate {
        title: edit_text(prompter.ask("Title", Some(&current.title))?, &current.title),
        author: edit_text(prompter.ask("Author", Some(&current.author))?, &current.author),
        genre: edit_text(prompter.ask("Genre", Some(&current.genre))?, &current.genre),
        year: prompter.ask_with("Year", year_text.as_deref(), |s| {
            edit_optional(s, current.year, "year")
        })?,
        rating: prompter.ask_with("Rating (0-5)", rating_text.as_deref(), |s| {
            match edit_optional(s, current.rating, "rating")? {
                Some(Some(r)) if !r.is_finite() => Err(CliError::invalid_input(format!(
                    "'{s}' is not a valid rating"
                ))),
                edit => Ok(edit),
            }
        })?,
        description: edit_optional(
            &prompter.ask("Description", current.description.as_deref())?,
            current.description.clone(),
            "text",
        )?,
    };

    if update.is_empty() {
        log::info!("Nothing changed.");
        return Ok(());
    }
    service.update(id, update)?;
    log::info!("Book updated.");
    Ok(())
}

fn delete_book<R: BufRead>(
    service: &mut CatalogService,
    id: &str,
    prompter: &mut Prompter<R>,
) -> Result<(), CliError> {
    let id = resolve_id(service, id)?;
    let title = service
        .get(id)
        .map(|b| b.title.clone())
        .ok_or_else(|| CliError::no_match(id.to_string()))?;

    let answer = prompter.ask(&format!("Delete '{title}'? [y/N]"), None)?;
    if !answer.eq_ignore_ascii_case("y") && !answer.eq_ignore_ascii_case("yes") {
        log::info!("Kept.");
        return Ok(());
    }

    if service.delete(id) {
        log::info!("Book deleted.");
    } else {
        log::warn!("Failed to delete book.");
    }
    Ok(())
}

fn print_help() {
    let commands: &[(&str, &str)] = &[
        ("list", "show every book"),
        ("search <keyword>", "search titles, authors, and genres"),
        ("genre <name>", "books in one genre"),
        ("min <rating>", "books rated at least this high"),
        ("show <id>", "all fields of one book"),
        ("genres", "distinct genres"),
        ("stats", "catalog statistics"),
        ("top [n]", "highest-rated books"),
        ("add", "add a book"),
        ("edit <id>", "edit a book"),
        ("cover <id> [url]", "set or remove a cover URL"),
        ("delete <id>", "delete a book"),
        ("quit", "leave the shell"),
    ];
    for (usage, about) in commands {
        log::info!(
            "  {:<20} {}",
            usage.if_supports_color(Stdout, |t| t.bold()),
            about
        );
    }
    log::info!(
        "{}",
        "Ids can be shortened to the prefix shown on cards.".if_supports_color(Stdout, |t| t.dimmed()),
    );
}
