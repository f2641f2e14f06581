// Catalog source - the collaborator seam that supplies the raw catalog
// document. The cache reads it at most once per lifetime; absence or
// malformation is absorbed upstream into an empty catalog.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Raw catalog document: a sequence of categories, each with named groups,
/// each with item values. Mirrors the nesting of the reference file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogDoc {
    #[serde(default)]
    pub categories: Vec<CategoryDoc>,
}

/// One top-level category element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryDoc {
    pub name: String,
    #[serde(default)]
    pub groups: Vec<GroupDoc>,
}

/// One group element within a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupDoc {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Error types for catalog source reads
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogSourceError {
    /// Source file does not exist
    #[error("Catalog source not found: {0}")]
    NotFound(String),
    /// Source exists but could not be read
    #[error("Failed to read catalog source: {0}")]
    Io(String),
    /// Source was read but is not a valid catalog document
    #[error("Failed to parse catalog source: {0}")]
    Parse(String),
}

/// Provider of the raw catalog document.
///
/// Implementations may block; the cache performs the read once, on first
/// access, from a context that tolerates a small local read.
pub trait CatalogSource {
    fn read(&self) -> Result<CatalogDoc, CatalogSourceError>;
}

/// File-backed source reading a JSON catalog document.
#[derive(Debug)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Source reading from the default catalog location.
    pub fn with_default_path() -> Result<Self, CatalogSourceError> {
        let path = crate::paths::default_catalog_path().ok_or_else(|| {
            CatalogSourceError::Io("Could not determine data directory".to_string())
        })?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CatalogSource for FileCatalogSource {
    fn read(&self) -> Result<CatalogDoc, CatalogSourceError> {
        crate::debug!("Reading catalog document from {:?}", self.path);

        if !self.path.exists() {
            return Err(CatalogSourceError::NotFound(
                self.path.display().to_string(),
            ));
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| CatalogSourceError::Io(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| CatalogSourceError::Parse(e.to_string()))
    }
}

/// In-memory source for embedded hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    doc: CatalogDoc,
}

impl StaticCatalogSource {
    pub fn new(doc: CatalogDoc) -> Self {
        Self { doc }
    }
}

impl CatalogSource for StaticCatalogSource {
    fn read(&self) -> Result<CatalogDoc, CatalogSourceError> {
        Ok(self.doc.clone())
    }
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
