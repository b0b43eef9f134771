//! Fixed sample records used to seed a fresh catalog for demos and tests.

use uuid::Uuid;

use crate::types::{Book, NewBook};

/// The three sample entries, all owned by `owner_id`.
pub fn sample_new_books(owner_id: Uuid) -> Vec<NewBook> {
    vec![
        NewBook::new(owner_id, "Harry Potter", "J.K. Rowling")
            .with_genre("Fantasy")
            .with_year(2001)
            .with_rating(4.8)
            .with_description("A young wizard's adventures")
            .with_cover_url("https://example.com/hp.jpg"),
        NewBook::new(owner_id, "The Lord of the Rings", "J.R.R. Tolkien")
            .with_genre("Fantasy")
            .with_year(1954)
            .with_rating(4.9)
            .with_description("Epic fantasy adventure")
            .with_cover_url("https://example.com/lotr.jpg"),
        NewBook::new(owner_id, "To Kill a Mockingbird", "Harper Lee")
            .with_genre("Fiction")
            .with_year(1960)
            .with_rating(4.7)
            .with_description("A story of race and justice")
            .with_cover_url("https://example.com/mockingbird.jpg"),
    ]
}

/// The sample entries as fully built records with fresh ids.
pub fn sample_books(owner_id: Uuid) -> Vec<Book> {
    sample_new_books(owner_id).into_iter().map(Book::new).collect()
}
