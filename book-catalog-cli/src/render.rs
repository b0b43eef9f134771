//! Text rendering of books: card grids and detail views.
//!
//! Functions here return lines instead of printing so the layout can be
//! checked without a terminal. Color is applied only when stdout supports it.

use book_catalog::Book;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Characters of the id shown on a card; enough to select it in the shell.
pub(crate) const SHORT_ID_LEN: usize = 8;

#[derive(Clone, Copy)]
enum Style {
    Title,
    Muted,
    Genre,
    Plain,
}

fn paint(style: Style, text: &str) -> String {
    match style {
        Style::Title => text.if_supports_color(Stdout, |t| t.bold()).to_string(),
        Style::Muted => text.if_supports_color(Stdout, |t| t.dimmed()).to_string(),
        Style::Genre => text.if_supports_color(Stdout, |t| t.cyan()).to_string(),
        Style::Plain => text.to_string(),
    }
}

/// Truncate a string to at most `max` characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max).collect()
    }
}

fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    format!("{s}{}", " ".repeat(width.saturating_sub(len)))
}

pub(crate) fn short_id(book: &Book) -> String {
    book.id.simple().to_string()[..SHORT_ID_LEN].to_string()
}

pub(crate) fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("\u{2605} {r:.1}"),
        None => "\u{2605} -".to_string(),
    }
}

fn card_content(book: &Book) -> Vec<(Style, String)> {
    vec![
        (Style::Title, book.title.clone()),
        (Style::Muted, format!("by {}", book.author)),
        (Style::Genre, book.genre.clone()),
        (Style::Plain, format_rating(book.rating)),
        (
            Style::Muted,
            match book.year {
                Some(year) => format!("Year: {year}"),
                None => "Year: unknown".to_string(),
            },
        ),
        (Style::Muted, format!("#{}", short_id(book))),
    ]
}

/// One card as bordered lines, each `width + 4` characters wide.
pub(crate) fn card_lines(book: &Book, width: usize) -> Vec<String> {
    let border = "\u{2500}".repeat(width + 2);
    let mut lines = Vec::new();
    lines.push(format!("\u{250C}{border}\u{2510}"));
    for (style, text) in card_content(book) {
        let cell = pad(&truncate_str(&text, width), width);
        lines.push(format!("\u{2502} {} \u{2502}", paint(style, &cell)));
    }
    lines.push(format!("\u{2514}{border}\u{2518}"));
    lines
}

/// Lay out cards left to right, `columns` per row.
pub(crate) fn render_grid(books: &[&Book], columns: usize, width: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut lines = Vec::new();
    for row in books.chunks(columns) {
        let cards: Vec<Vec<String>> = row.iter().map(|b| card_lines(b, width)).collect();
        let height = cards.first().map_or(0, Vec::len);
        for i in 0..height {
            let joined: Vec<&str> = cards.iter().map(|c| c[i].as_str()).collect();
            lines.push(joined.join(" "));
        }
    }
    lines
}

fn optional(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

/// Every field of one book as aligned `label: value` lines.
pub(crate) fn detail_lines(book: &Book) -> Vec<String> {
    let fields: Vec<(&str, String)> = vec![
        ("Title", book.title.clone()),
        ("Author", book.author.clone()),
        ("Genre", book.genre.clone()),
        ("Year", book.year.map_or("-".to_string(), |y| y.to_string())),
        ("Rating", book.rating.map_or("-".to_string(), |r| format!("{r:.1}"))),
        ("Description", optional(book.description.as_deref())),
        ("Cover", optional(book.cover_url.as_deref())),
        ("Id", book.id.to_string()),
        ("Owner", book.owner_id.to_string()),
        ("Created", book.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
        ("Updated", book.updated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
    ];
    fields
        .into_iter()
        .map(|(label, value)| {
            format!(
                "  {} {}",
                format!("{label}:").if_supports_color(Stdout, |t| t.bold()),
                value
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use book_catalog::NewBook;
    use uuid::Uuid;

    fn plain_output() {
        owo_colors::set_override(false);
    }

    fn hobbit() -> Book {
        Book::new(
            NewBook::new(Uuid::new_v4(), "The Hobbit", "J.R.R. Tolkien")
                .with_genre("Fantasy")
                .with_year(1937)
                .with_rating(4.7),
        )
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("The Lord of the Rings", 10), "The Lor...");
        assert_eq!(truncate_str("Éowyn of Rohan", 6), "Éow...");
        assert_eq!(truncate_str("abcdef", 2), "ab");
    }

    #[test]
    fn card_has_fixed_width_lines() {
        plain_output();
        let book = hobbit();
        let lines = card_lines(&book, 20);
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|l| l.chars().count() == 24));
        assert!(lines[1].contains("The Hobbit"));
        assert!(lines[2].contains("by J.R.R. Tolkien"));
        assert!(lines[4].contains("\u{2605} 4.7"));
        assert!(lines[5].contains("Year: 1937"));
        assert!(lines[6].contains(&short_id(&book)));
    }

    #[test]
    fn unrated_book_shows_dash() {
        plain_output();
        let mut book = hobbit();
        book.rating = None;
        book.year = None;
        let lines = card_lines(&book, 20);
        assert!(lines[4].contains("\u{2605} -"));
        assert!(lines[5].contains("Year: unknown"));
    }

    #[test]
    fn grid_wraps_after_column_count() {
        plain_output();
        let books = [hobbit(), hobbit(), hobbit(), hobbit()];
        let refs: Vec<&Book> = books.iter().collect();
        let lines = render_grid(&refs, 3, 16);
        // two rows of cards, eight lines each
        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0].chars().count(), 3 * 20 + 2);
        assert_eq!(lines[8].chars().count(), 20);
    }

    #[test]
    fn empty_grid_has_no_lines() {
        assert!(render_grid(&[], 3, 16).is_empty());
    }

    #[test]
    fn details_cover_every_field() {
        plain_output();
        let book = hobbit();
        let lines = detail_lines(&book);
        assert_eq!(lines.len(), 11);
        assert!(lines[0].ends_with("The Hobbit"));
        assert!(lines[5].ends_with("-"));
        assert!(lines[7].ends_with(&book.id.to_string()));
    }
}
