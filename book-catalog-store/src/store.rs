//! Identity-keyed record storage.

use std::collections::HashMap;

use book_catalog::{sample_books, Book, BookUpdate, CatalogError};
use uuid::Uuid;

/// Storage for book records, keyed by id.
///
/// The store exclusively owns every record. Borrowed results are tied to a
/// shared borrow of the store, so they cannot outlive a later `delete`.
/// A failed mutation leaves the store exactly as it was.
pub trait BookStore: Send + Sync {
    /// Store `book` under its id, overwriting any record already there.
    fn insert(&mut self, book: Book) -> Result<(), CatalogError>;

    /// Look up a record by id.
    fn get(&self, id: Uuid) -> Option<&Book>;

    /// Every record, in no particular order.
    fn get_all(&self) -> Vec<&Book>;

    /// Overwrite the editable fields of an existing record.
    ///
    /// The stored `owner_id` and `created_at` are kept and `updated_at` is
    /// refreshed. Fails with `InvalidArgument` if `book` has a blank title
    /// or author or a non-finite rating, and with `NotFound` if `book.id` is
    /// not stored.
    fn replace(&mut self, book: Book) -> Result<(), CatalogError>;

    /// Apply a partial edit to an existing record and refresh `updated_at`.
    fn update(&mut self, id: Uuid, update: BookUpdate) -> Result<(), CatalogError>;

    /// Set (or clear) a record's cover URL and refresh `updated_at`.
    fn update_cover(&mut self, id: Uuid, cover_url: Option<String>) -> Result<(), CatalogError>;

    /// Remove a record. Returns whether anything was removed.
    fn delete(&mut self, id: Uuid) -> bool;

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }
}

/// A [`BookStore`] backed by a `HashMap`. Nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    books: HashMap<Uuid, Book>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the three sample records under a fresh owner id.
    pub fn seeded() -> Self {
        Self::seeded_with_owner(Uuid::new_v4())
    }

    /// A store holding the three sample records owned by `owner_id`.
    pub fn seeded_with_owner(owner_id: Uuid) -> Self {
        sample_books(owner_id).into_iter().collect()
    }
}

impl FromIterator<Book> for InMemoryStore {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().map(|b| (b.id, b)).collect(),
        }
    }
}

impl BookStore for InMemoryStore {
    fn insert(&mut self, book: Book) -> Result<(), CatalogError> {
        self.books.insert(book.id, book);
        Ok(())
    }

    fn get(&self, id: Uuid) -> Option<&Book> {
        self.books.get(&id)
    }

    fn get_all(&self) -> Vec<&Book> {
        self.books.values().collect()
    }

    fn replace(&mut self, book: Book) -> Result<(), CatalogError> {
        book.validate()?;
        let stored = self
            .books
            .get_mut(&book.id)
            .ok_or_else(|| CatalogError::not_found(book.id))?;
        stored.replace_fields(book);
        stored.touch();
        Ok(())
    }

    fn update(&mut self, id: Uuid, update: BookUpdate) -> Result<(), CatalogError> {
        update.validate()?;
        let stored = self
            .books
            .get_mut(&id)
            .ok_or_else(|| CatalogError::not_found(id))?;
        stored.apply(update);
        stored.touch();
        Ok(())
    }

    fn update_cover(&mut self, id: Uuid, cover_url: Option<String>) -> Result<(), CatalogError> {
        let stored = self
            .books
            .get_mut(&id)
            .ok_or_else(|| CatalogError::not_found(id))?;
        stored.cover_url = cover_url;
        stored.touch();
        Ok(())
    }

    fn delete(&mut self, id: Uuid) -> bool {
        self.books.remove(&id).is_some()
    }

    fn len(&self) -> usize {
        self.books.len()
    }
}
