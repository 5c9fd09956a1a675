//! Catalog loading error types.

use std::path::PathBuf;

/// Errors that can occur while loading station data from disk.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON of the expected shape
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        CatalogError::Json {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::io(
            "data/catalog.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(
            err.to_string(),
            "failed to read data/catalog.json: no such file"
        );

        let source = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = CatalogError::json("feed.json", source);
        assert!(err.to_string().starts_with("invalid JSON in feed.json: "));
    }
}
