// Abbreviation table and file-backed store
// The engine only ever sees the read-only table; durable CRUD lives in
// AbbreviationStore with atomic-write persistence.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

/// Read-only key -> expansion mapping consumed by the expansion engine.
///
/// Keys are case-sensitive and carry no leading marker ("cd", not ":cd").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbbreviationTable {
    entries: HashMap<String, String>,
}

impl AbbreviationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AbbreviationTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A single stored abbreviation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbbreviationEntry {
    /// Lookup key without the marker, e.g. "htn"
    pub key: String,
    /// Replacement text, e.g. "hypertension"
    pub expansion: String,
}

/// Error types for abbreviation store operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AbbreviationStoreError {
    /// Key is empty after trimming
    #[error("Abbreviation key cannot be empty")]
    EmptyKey,
    /// An entry with this key already exists
    #[error("Abbreviation {0:?} already exists")]
    Duplicate(String),
    /// No entry with this key
    #[error("Abbreviation {0:?} not found")]
    NotFound(String),
    /// Failed to persist entries
    #[error("Failed to persist abbreviations: {0}")]
    Persistence(String),
    /// Failed to load entries
    #[error("Failed to load abbreviations: {0}")]
    Load(String),
}

/// Store for abbreviations with file-based persistence.
///
/// The host loads it at startup, edits through it, and hands the engine a
/// `table()` snapshot; the engine never mutates anything.
#[derive(Debug)]
pub struct AbbreviationStore {
    /// Expansions indexed by key
    entries: HashMap<String, String>,
    /// Path to persistence file
    config_path: PathBuf,
}

impl AbbreviationStore {
    /// Create a new store with the given config path
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            entries: HashMap::new(),
            config_path,
        }
    }

    /// Create a store using the default config path
    pub fn with_default_path() -> Result<Self, AbbreviationStoreError> {
        let config_path = crate::paths::default_abbreviations_path().ok_or_else(|| {
            AbbreviationStoreError::Load("Could not determine data directory".to_string())
        })?;
        Ok(Self::new(config_path))
    }

    /// Load entries from the persistence file.
    ///
    /// A missing file is not an error: the store starts empty and the first
    /// successful mutation creates it.
    pub fn load(&mut self) -> Result<(), AbbreviationStoreError> {
        crate::debug!("Loading abbreviations from {:?}", self.config_path);

        if !self.config_path.exists() {
            crate::debug!("No abbreviation file found, starting with empty store");
            return Ok(());
        }

        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| AbbreviationStoreError::Load(e.to_string()))?;

        let entries: Vec<AbbreviationEntry> = serde_json::from_str(&content)
            .map_err(|e| AbbreviationStoreError::Load(e.to_string()))?;

        self.entries.clear();
        for entry in entries {
            self.entries.insert(entry.key, entry.expansion);
        }

        crate::info!("Loaded {} abbreviations", self.entries.len());
        Ok(())
    }

    /// Persist entries to the file using atomic write (temp file + rename)
    fn save(&self) -> Result<(), AbbreviationStoreError> {
        crate::debug!(
            "Persisting {} abbreviations to {:?}",
            self.entries.len(),
            self.config_path
        );

        // Ensure parent directory exists
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AbbreviationStoreError::Persistence(e.to_string()))?;
        }

        // Stable key order keeps the file diff-friendly
        let mut entries: Vec<AbbreviationEntry> = self
            .entries
            .iter()
            .map(|(key, expansion)| AbbreviationEntry {
                key: key.clone(),
                expansion: expansion.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));

        let content = serde_json::to_string_pretty(&entries)
            .map_err(|e| AbbreviationStoreError::Persistence(e.to_string()))?;

        let temp_path = self.config_path.with_extension("tmp");

        // Write to temp file with explicit sync
        {
            let mut file = File::create(&temp_path).map_err(|e| {
                AbbreviationStoreError::Persistence(format!("Failed to create temp file: {}", e))
            })?;
            file.write_all(content.as_bytes()).map_err(|e| {
                AbbreviationStoreError::Persistence(format!("Failed to write: {}", e))
            })?;
            file.sync_all().map_err(|e| {
                AbbreviationStoreError::Persistence(format!("Failed to sync: {}", e))
            })?;
        } // File closed here

        // Atomic rename
        fs::rename(&temp_path, &self.config_path).map_err(|e| {
            // Clean up temp file on error
            let _ = fs::remove_file(&temp_path);
            AbbreviationStoreError::Persistence(format!("Failed to rename: {}", e))
        })?;

        crate::debug!("Abbreviations persisted successfully");
        Ok(())
    }

    /// Add a new abbreviation
    #[must_use = "this returns a Result that should be handled"]
    pub fn add(&mut self, key: &str, expansion: &str) -> Result<(), AbbreviationStoreError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(AbbreviationStoreError::EmptyKey);
        }
        if self.entries.contains_key(key) {
            return Err(AbbreviationStoreError::Duplicate(key.to_string()));
        }

        self.entries.insert(key.to_string(), expansion.to_string());
        self.save()?;
        Ok(())
    }

    /// Replace the expansion of an existing abbreviation
    #[must_use = "this returns a Result that should be handled"]
    pub fn update(&mut self, key: &str, expansion: &str) -> Result<(), AbbreviationStoreError> {
        if !self.entries.contains_key(key) {
            return Err(AbbreviationStoreError::NotFound(key.to_string()));
        }

        self.entries.insert(key.to_string(), expansion.to_string());
        self.save()?;
        Ok(())
    }

    /// Delete an abbreviation by key
    #[must_use = "this returns a Result that should be handled"]
    pub fn delete(&mut self, key: &str) -> Result<(), AbbreviationStoreError> {
        if self.entries.remove(key).is_none() {
            return Err(AbbreviationStoreError::NotFound(key.to_string()));
        }
        self.save()?;
        Ok(())
    }

    /// Get an expansion by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// List all entries in key order
    pub fn list(&self) -> Vec<AbbreviationEntry> {
        let mut entries: Vec<AbbreviationEntry> = self
            .entries
            .iter()
            .map(|(key, expansion)| AbbreviationEntry {
                key: key.clone(),
                expansion: expansion.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        entries
    }

    /// Snapshot the current entries as the read-only table the engine
    /// consumes. Later store edits do not show through the snapshot.
    pub fn table(&self) -> AbbreviationTable {
        AbbreviationTable {
            entries: self.entries.clone(),
        }
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
