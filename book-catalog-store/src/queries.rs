//! Read queries over a book store.
//!
//! Every function recomputes from the store's current contents and never
//! mutates it. Results borrow from the store.

use std::cmp::Ordering;
use std::collections::HashSet;

use book_catalog::Book;
use uuid::Uuid;

use crate::store::BookStore;

// ── Filters ─────────────────────────────────────────────────────────────────

/// All records owned by `owner_id`.
pub fn list_by_owner<S: BookStore + ?Sized>(store: &S, owner_id: Uuid) -> Vec<&Book> {
    store
        .get_all()
        .into_iter()
        .filter(|b| b.owner_id == owner_id)
        .collect()
}

/// Case-insensitive substring search over title, author, and genre.
///
/// The match is literal, so an empty keyword matches every record.
pub fn search<'a, S: BookStore + ?Sized>(store: &'a S, keyword: &str) -> Vec<&'a Book> {
    let keyword = keyword.to_lowercase();
    store
        .get_all()
        .into_iter()
        .filter(|b| b.matches_keyword(&keyword))
        .collect()
}

/// Records whose genre equals `genre`, ignoring case.
pub fn list_by_genre<'a, S: BookStore + ?Sized>(store: &'a S, genre: &str) -> Vec<&'a Book> {
    let genre = genre.to_lowercase();
    store
        .get_all()
        .into_iter()
        .filter(|b| b.genre.to_lowercase() == genre)
        .collect()
}

/// Records rated at least `min`. Unrated records never qualify.
pub fn list_min_rating<S: BookStore + ?Sized>(store: &S, min: f64) -> Vec<&Book> {
    store
        .get_all()
        .into_iter()
        .filter(|b| rating_of(b).is_some_and(|r| r >= min))
        .collect()
}

/// A record's rating, with non-finite values read as unrated.
fn rating_of(book: &Book) -> Option<f64> {
    book.rating.filter(|r| r.is_finite())
}

// ── Aggregates ──────────────────────────────────────────────────────────────

/// Distinct genres, in the order they are first seen.
pub fn list_genres<S: BookStore + ?Sized>(store: &S) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut genres = Vec::new();
    for book in store.get_all() {
        if seen.insert(book.genre.as_str()) {
            genres.push(book.genre.clone());
        }
    }
    genres
}

/// Mean rating over the records that have a finite one; `0.0` when none do.
pub fn average_rating<S: BookStore + ?Sized>(store: &S) -> f64 {
    let (sum, count) = store
        .get_all()
        .into_iter()
        .filter_map(rating_of)
        .fold((0.0, 0usize), |(sum, count), r| (sum + r, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// The `limit` highest-rated records, best first.
///
/// Equal ratings fall back to creation time, then id, so the result is
/// deterministic. Unrated records, and records whose rating is not a finite
/// number, come after all rated ones.
pub fn top_rated<S: BookStore + ?Sized>(store: &S, limit: usize) -> Vec<&Book> {
    if limit == 0 {
        return Vec::new();
    }
    let mut books = store.get_all();
    books.sort_by(|a, b| by_rating_desc(a, b));
    books.truncate(limit);
    books
}

fn by_rating_desc(a: &Book, b: &Book) -> Ordering {
    match (rating_of(a), rating_of(b)) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.created_at.cmp(&b.created_at))
    .then_with(|| a.id.cmp(&b.id))
}

/// Sort records by title, ignoring case, for display.
pub fn sorted_by_title(mut books: Vec<&Book>) -> Vec<&Book> {
    books.sort_by_cached_key(|b| (b.title.to_lowercase(), b.id));
    books
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Get overall catalog statistics.
pub fn catalog_stats<S: BookStore + ?Sized>(store: &S) -> CatalogStats {
    let books = store.get_all();
    let owners: HashSet<Uuid> = books.iter().map(|b| b.owner_id).collect();
    let rated = books.iter().filter(|b| rating_of(b).is_some()).count();

    CatalogStats {
        books: books.len(),
        owners: owners.len(),
        genres: list_genres(store).len(),
        rated,
        average_rating: average_rating(store),
    }
}

/// Summary statistics for the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats {
    pub books: usize,
    pub owners: usize,
    pub genres: usize,
    pub rated: usize,
    pub average_rating: f64,
}
