//! Writes the dataset to disk as pretty-printed JSON.

use crate::domain::Dataset;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error writing '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize dataset: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Serialize `dataset` to `path`, creating parent directories and replacing
/// any existing file.
pub fn write_dataset(dataset: &Dataset, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(dataset)?;
    std::fs::write(path, json).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), series = dataset.series.len(), "wrote dataset");
    Ok(())
}

/// Read a dataset back from disk.
pub fn read_dataset(path: &Path) -> Result<Dataset, OutputError> {
    let content = std::fs::read_to_string(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}
