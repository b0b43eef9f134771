//! Book catalog data model, error types, sample data, and YAML seed loading.
//!
//! This crate defines the record types for the catalog without any storage
//! dependencies. `book-catalog-store` owns the records; the types here are
//! what callers construct, receive, and pass back.

pub mod error;
pub mod sample;
pub mod types;
pub mod yaml;

pub use error::CatalogError;
pub use sample::{sample_books, sample_new_books};
pub use types::*;
pub use yaml::{load_seed_dir, load_seed_file, SeedError};
