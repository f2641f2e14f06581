// Default on-disk locations for hosts that don't supply their own paths

use std::path::PathBuf;

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "chartkit";

/// File name of the catalog document inside the data directory.
pub const CATALOG_FILE: &str = "catalog.json";

/// File name of the abbreviation store inside the data directory.
pub const ABBREVIATIONS_FILE: &str = "abbreviations.json";

/// Resolve the default data directory (`<config_dir>/chartkit`).
///
/// Returns None when the platform config directory cannot be determined
/// (e.g. no home directory in the environment).
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
}

/// Default location of the catalog document.
pub fn default_catalog_path() -> Option<PathBuf> {
    default_data_dir().map(|dir| dir.join(CATALOG_FILE))
}

/// Default location of the abbreviation store file.
pub fn default_abbreviations_path() -> Option<PathBuf> {
    default_data_dir().map(|dir| dir.join(ABBREVIATIONS_FILE))
}

#[cfg(test)]
#[path = "paths_test.rs"]
mod tests;
