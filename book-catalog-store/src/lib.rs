//! In-memory storage and query layer for the book catalog.
//!
//! Provides the identity-keyed record store, the stateless query functions
//! computed over it, and the service facade that callers drive.

pub mod queries;
pub mod service;
pub mod store;

pub use queries::{
    average_rating, catalog_stats, list_by_genre, list_by_owner, list_genres, list_min_rating,
    search, sorted_by_title, top_rated, CatalogStats,
};
pub use service::CatalogService;
pub use store::{BookStore, InMemoryStore};
