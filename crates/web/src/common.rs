//! Shared display metadata for every template.
//!
//! The document is read from disk once at startup rather than per request;
//! a SIGHUP makes the process re-read it. A missing or unparseable file is
//! non-fatal at startup: routes answer 500 until a reload succeeds.

use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use catalog_core::views::CommonData;

#[derive(Debug, thiserror::Error)]
pub enum CommonDataError {
    #[error("Failed to read common data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse common data file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Common data has not been loaded")]
    NotLoaded,
}

/// File-backed holder of the current [`CommonData`].
pub struct CommonStore {
    path: PathBuf,
    current: RwLock<Option<Arc<CommonData>>>,
}

impl CommonStore {
    /// Create a store for the given document path. Nothing is read until
    /// [`CommonStore::load`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            current: RwLock::new(None),
        }
    }

    /// Read and parse the document, replacing the current data on success.
    /// On failure the previously loaded data (if any) is kept.
    pub fn load(&self) -> Result<(), CommonDataError> {
        let text = std::fs::read_to_string(&self.path)?;
        let data: CommonData = serde_json::from_str(&text)?;

        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Arc::new(data));
        Ok(())
    }

    /// The currently loaded data, or `NotLoaded` if no load has succeeded.
    pub fn get(&self) -> Result<Arc<CommonData>, CommonDataError> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(CommonDataError::NotLoaded)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use assert_matches::assert_matches;

    use super::*;

    const SAMPLE: &str = r#"{
        "site_name": "Sakila Video",
        "tagline": "Classic rentals",
        "nav": [{ "label": "Home", "href": "/" }],
        "footer": "Sakila Video",
        "currency": "EUR"
    }"#;

    #[test]
    fn get_before_load_reports_not_loaded() {
        let store = CommonStore::new("does/not/exist.json");
        assert_matches!(store.get(), Err(CommonDataError::NotLoaded));
    }

    #[test]
    fn load_from_missing_file_fails_and_keeps_store_empty() {
        let store = CommonStore::new("does/not/exist.json");
        assert_matches!(store.load(), Err(CommonDataError::Io(_)));
        assert_matches!(store.get(), Err(CommonDataError::NotLoaded));
    }

    #[test]
    fn load_parses_the_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let store = CommonStore::new(file.path());
        store.load().unwrap();

        let data = store.get().unwrap();
        assert_eq!(data.site_name, "Sakila Video");
        assert_eq!(data.nav.len(), 1);
    }

    #[test]
    fn failed_reload_keeps_previous_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let store = CommonStore::new(file.path());
        store.load().unwrap();

        std::fs::write(file.path(), b"not json").unwrap();

        assert_matches!(store.load(), Err(CommonDataError::Parse(_)));
        assert_eq!(store.get().unwrap().site_name, "Sakila Video");
    }
}
