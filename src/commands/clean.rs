//! Clean exported files

use anyhow::Result;
use std::fs;

use super::generate::export_dir;
use crate::Portfolio;

/// Remove the exported API directory, leaving the rest of the public folder
pub fn run(portfolio: &Portfolio) -> Result<()> {
    let api_dir = export_dir(portfolio);
    if api_dir.exists() {
        fs::remove_dir_all(&api_dir)?;
        tracing::info!("Deleted: {:?}", api_dir);
    }

    Ok(())
}
