//! Content module - markdown files under the data directory and the records
//! parsed from them

pub mod biography;
pub mod blog;
pub mod career;
mod error;
pub mod landmark;
mod models;
pub mod scanner;

pub use error::ContentError;
pub use landmark::{Landmark, LandmarkInfo, MarkerStyle};
pub use models::{iso_millis, Biography, BlogPost, BlogPostSummary, CareerLocation};

use std::path::Path;

/// Read a markdown file as text. Bytes that are not valid UTF-8 become
/// U+FFFD instead of failing the read.
pub(crate) fn read_text(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
