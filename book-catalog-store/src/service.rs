//! The facade callers use to drive the catalog.
//!
//! `CatalogService` owns a [`BookStore`] and forwards to it and to the
//! [`queries`](crate::queries) functions. The only behavior it adds is
//! validation on create and logging around mutations.

use book_catalog::{Book, BookUpdate, CatalogError, NewBook};
use uuid::Uuid;

use crate::queries::{self, CatalogStats};
use crate::store::{BookStore, InMemoryStore};

pub struct CatalogService<S: BookStore = InMemoryStore> {
    store: S,
}

impl CatalogService<InMemoryStore> {
    /// A service over an in-memory store holding the sample records.
    pub fn seeded() -> Self {
        let store = InMemoryStore::seeded();
        log::debug!("Seeded catalog with {} sample books", store.len());
        Self::new(store)
    }
}

impl<S: BookStore> CatalogService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ── Mutations ───────────────────────────────────────────────────────────

    /// Validate `new`, build a record from it, and store it.
    pub fn create(&mut self, new: NewBook) -> Result<Book, CatalogError> {
        new.validate()?;
        let book = Book::new(new);
        self.store.insert(book.clone())?;
        log::debug!("Created book {} ({})", book.id, book.title);
        Ok(book)
    }

    /// Create one record per entry, stopping at the first invalid one.
    ///
    /// Entries before the invalid one stay stored. Returns the new ids.
    pub fn seed<I>(&mut self, entries: I) -> Result<Vec<Uuid>, CatalogError>
    where
        I: IntoIterator<Item = NewBook>,
    {
        let mut ids = Vec::new();
        for new in entries {
            ids.push(self.create(new)?.id);
        }
        log::debug!("Seeded {} books", ids.len());
        Ok(ids)
    }

    pub fn insert(&mut self, book: Book) -> Result<(), CatalogError> {
        let id = book.id;
        self.store.insert(book)?;
        log::debug!("Inserted book {id}");
        Ok(())
    }

    pub fn replace(&mut self, book: Book) -> Result<(), CatalogError> {
        let id = book.id;
        let result = self.store.replace(book);
        log_outcome("replace", id, result)
    }

    pub fn update(&mut self, id: Uuid, update: BookUpdate) -> Result<(), CatalogError> {
        let result = self.store.update(id, update);
        log_outcome("update", id, result)
    }

    pub fn update_cover(&mut self, id: Uuid, cover_url: Option<String>) -> Result<(), CatalogError> {
        let result = self.store.update_cover(id, cover_url);
        log_outcome("cover update", id, result)
    }

    pub fn delete(&mut self, id: Uuid) -> bool {
        let removed = self.store.delete(id);
        if removed {
            log::debug!("Deleted book {id}");
        } else {
            log::debug!("Cannot delete book {id}: not found");
        }
        removed
    }

    // ── Reads ───────────────────────────────────────────────────────────────

    pub fn get(&self, id: Uuid) -> Option<&Book> {
        self.store.get(id)
    }

    pub fn get_all(&self) -> Vec<&Book> {
        self.store.get_all()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn list_by_owner(&self, owner_id: Uuid) -> Vec<&Book> {
        queries::list_by_owner(&self.store, owner_id)
    }

    pub fn search(&self, keyword: &str) -> Vec<&Book> {
        queries::search(&self.store, keyword)
    }

    pub fn list_by_genre(&self, genre: &str) -> Vec<&Book> {
        queries::list_by_genre(&self.store, genre)
    }

    pub fn list_min_rating(&self, min: f64) -> Vec<&Book> {
        queries::list_min_rating(&self.store, min)
    }

    pub fn list_genres(&self) -> Vec<String> {
        queries::list_genres(&self.store)
    }

    pub fn average_rating(&self) -> f64 {
        queries::average_rating(&self.store)
    }

    pub fn top_rated(&self, limit: usize) -> Vec<&Book> {
        queries::top_rated(&self.store, limit)
    }

    pub fn stats(&self) -> CatalogStats {
        queries::catalog_stats(&self.store)
    }
}

fn log_outcome(
    action: &str,
    id: Uuid,
    result: Result<(), CatalogError>,
) -> Result<(), CatalogError> {
    match &result {
        Ok(()) => log::debug!("Applied {action} to book {id}"),
        Err(e) => log::debug!("Failed {action} of book {id}: {e}"),
    }
    result
}
