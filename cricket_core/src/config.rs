//! # Catalog Configuration
//!
//! Paths used by the applications. Both are relative to the directory the
//! program is launched from unless overridden.

use std::path::PathBuf;

/// Default catalog file name.
pub const DEFAULT_DATA_FILE: &str = "crickets.json";

/// Default cover image shown in the entry panel.
pub const DEFAULT_COVER_IMAGE: &str = "cover.jpg";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// JSON file holding every record
    pub data_file: PathBuf,
    /// Image shown under the form, skipped when missing
    pub cover_image: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            cover_image: PathBuf::from(DEFAULT_COVER_IMAGE),
        }
    }
}

impl CatalogConfig {
    /// Use a different catalog file.
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_relative() {
        let config = CatalogConfig::default();
        assert_eq!(config.data_file, PathBuf::from("crickets.json"));
        assert_eq!(config.cover_image, PathBuf::from("cover.jpg"));
        assert!(config.data_file.is_relative());
    }

    #[test]
    fn test_with_data_file() {
        let config = CatalogConfig::default().with_data_file("other.json");
        assert_eq!(config.data_file, PathBuf::from("other.json"));
        assert_eq!(config.cover_image, PathBuf::from(DEFAULT_COVER_IMAGE));
    }
}
