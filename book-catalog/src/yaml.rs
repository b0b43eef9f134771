//! YAML loading for seed records.
//!
//! A seed file is a YAML sequence of [`NewBook`] entries. Seed files are
//! input only; the catalog never writes them back.

use std::path::Path;

use thiserror::Error;

use crate::error::CatalogError;
use crate::types::NewBook;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Invalid entry #{index} in {path}: {source}")]
    Invalid {
        path: String,
        index: usize,
        source: CatalogError,
    },
    #[error("Directory not found: {0}")]
    DirNotFound(String),
}

/// Load and validate every entry in a single seed file.
pub fn load_seed_file(path: &Path) -> Result<Vec<NewBook>, SeedError> {
    let contents = std::fs::read_to_string(path).map_err(|e| SeedError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let books = parse_seed(&contents, path)?;
    Ok(books)
}

/// Load every `.yaml`/`.yml` file in a directory, in file-name order.
///
/// A missing directory yields no entries.
pub fn load_seed_dir(dir: &Path) -> Result<Vec<NewBook>, SeedError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        return Err(SeedError::DirNotFound(dir.display().to_string()));
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| SeedError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    let mut all = Vec::new();
    for entry in entries {
        all.extend(load_seed_file(&entry.path())?);
    }
    Ok(all)
}

fn parse_seed(contents: &str, path: &Path) -> Result<Vec<NewBook>, SeedError> {
    // An empty file parses as null rather than an empty sequence
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    let books: Vec<NewBook> = serde_yml::from_str(contents).map_err(|e| SeedError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    for (index, book) in books.iter().enumerate() {
        book.validate().map_err(|source| SeedError::Invalid {
            path: path.display().to_string(),
            index,
            source,
        })?;
    }
    Ok(books)
}
