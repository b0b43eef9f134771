//! Data model types for the book catalog.
//!
//! A [`Book`] is the only stored entity. [`NewBook`] carries everything the
//! caller decides when creating a record, and [`BookUpdate`] carries a
//! partial edit of the caller-editable fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CatalogError;

// ── Book ────────────────────────────────────────────────────────────────────

/// A single book entry in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    /// The user who owns this record. Never changed by an edit.
    pub owner_id: Uuid,
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(default)]
    pub year: Option<i32>,
    /// Expected to fall in 0.0–5.0, but not enforced.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Build a record from caller-supplied fields, assigning a fresh id and
    /// setting both timestamps to now.
    pub fn new(new: NewBook) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id: new.owner_id,
            title: new.title,
            author: new.author,
            genre: new.genre,
            year: new.year,
            rating: new.rating,
            description: new.description,
            cover_url: new.cover_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`, never moving it backwards.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }

    /// Write every field present in `update`, leaving the rest untouched.
    ///
    /// Does not refresh `updated_at`; the store does that once the edit is
    /// committed.
    pub fn apply(&mut self, update: BookUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(author) = update.author {
            self.author = author;
        }
        if let Some(genre) = update.genre {
            self.genre = genre;
        }
        if let Some(year) = update.year {
            self.year = year;
        }
        if let Some(rating) = update.rating {
            self.rating = rating;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
    }

    /// Copy the caller-editable fields of `other` onto this record.
    ///
    /// `id`, `owner_id`, and `created_at` are kept from `self`.
    pub fn replace_fields(&mut self, other: Book) {
        self.title = other.title;
        self.author = other.author;
        self.genre = other.genre;
        self.year = other.year;
        self.rating = other.rating;
        self.description = other.description;
        self.cover_url = other.cover_url;
    }

    /// Reject a blank title or author, or a rating that is not a finite number.
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_fields(&self.title, &self.author, self.rating)
    }

    /// True if `keyword` (already lowercased) occurs in the title, author,
    /// or genre, ignoring case.
    pub fn matches_keyword(&self, lower_keyword: &str) -> bool {
        self.title.to_lowercase().contains(lower_keyword)
            || self.author.to_lowercase().contains(lower_keyword)
            || self.genre.to_lowercase().contains(lower_keyword)
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {} [{}]", self.title, self.author, self.genre)?;
        if let Some(year) = self.year {
            write!(f, " ({year})")?;
        }
        if let Some(rating) = self.rating {
            write!(f, " {rating:.1}")?;
        }
        Ok(())
    }
}

// ── New Book ────────────────────────────────────────────────────────────────

/// Fields supplied by the caller when creating a record.
///
/// The id and timestamps are assigned by [`Book::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    pub owner_id: Uuid,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
}

impl NewBook {
    pub fn new(owner_id: Uuid, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            owner_id,
            title: title.into(),
            author: author.into(),
            genre: String::new(),
            year: None,
            rating: None,
            description: None,
            cover_url: None,
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_cover_url(mut self, url: impl Into<String>) -> Self {
        self.cover_url = Some(url.into());
        self
    }

    /// Reject a blank title or author, or a rating that is not a finite number.
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_fields(&self.title, &self.author, self.rating)
    }
}

// ── Book Update ─────────────────────────────────────────────────────────────

/// A partial edit of a record's caller-editable fields.
///
/// Outer `None` leaves a field alone. For optional fields, `Some(None)`
/// clears the value. The cover has its own update path and is not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub year: Option<Option<i32>>,
    pub rating: Option<Option<f64>>,
    pub description: Option<Option<String>>,
}

impl BookUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Reject edits that would blank a required field or store a
    /// non-finite rating.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(CatalogError::invalid_argument("title must not be blank"));
        }
        if self.author.as_deref().is_some_and(|a| a.trim().is_empty()) {
            return Err(CatalogError::invalid_argument("author must not be blank"));
        }
        validate_rating(self.rating.flatten())
    }
}

fn validate_fields(title: &str, author: &str, rating: Option<f64>) -> Result<(), CatalogError> {
    if title.trim().is_empty() {
        return Err(CatalogError::invalid_argument("title must not be blank"));
    }
    if author.trim().is_empty() {
        return Err(CatalogError::invalid_argument("author must not be blank"));
    }
    validate_rating(rating)
}

fn validate_rating(rating: Option<f64>) -> Result<(), CatalogError> {
    match rating {
        Some(r) if !r.is_finite() => Err(CatalogError::invalid_argument(format!(
            "rating must be a finite number, got {r}"
        ))),
        _ => Ok(()),
    }
}
