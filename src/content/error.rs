//! Content errors

use std::path::PathBuf;
use thiserror::Error;

/// Failures that escape the retrieval functions
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid blog post id: {0}")]
    InvalidPostId(String),
}

impl ContentError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
