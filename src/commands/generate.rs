//! Export the JSON API as static files

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::content::{BlogPostSummary, Landmark, LandmarkInfo};
use crate::Portfolio;

/// Directory the API files are written to
pub fn export_dir(portfolio: &Portfolio) -> PathBuf {
    portfolio.public_dir.join("api")
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)?;
    tracing::debug!("Wrote {:?}", path);
    Ok(())
}

/// Write every endpoint's response under `<public_dir>/api/`
pub fn run(portfolio: &Portfolio) -> Result<()> {
    let start = std::time::Instant::now();

    let api_dir = export_dir(portfolio);
    let post_dir = api_dir.join("blog");

    // Posts deleted from the data directory must disappear from the export
    if post_dir.exists() {
        fs::remove_dir_all(&post_dir)?;
    }
    fs::create_dir_all(&post_dir)?;

    let posts = portfolio.blog_posts()?;
    let summaries: Vec<BlogPostSummary> = posts.iter().map(BlogPostSummary::from).collect();
    let locations = portfolio.career_locations();
    let landmarks: Vec<LandmarkInfo> = Landmark::ALL.into_iter().map(Landmark::info).collect();

    write_json(&api_dir.join("biography.json"), &portfolio.biography())?;
    write_json(&api_dir.join("blog-posts.json"), &summaries)?;
    write_json(&api_dir.join("blog.json"), &summaries)?;
    write_json(&api_dir.join("career-locations.json"), &locations)?;
    write_json(&api_dir.join("landmarks.json"), &landmarks)?;

    for post in &posts {
        write_json(&post_dir.join(format!("{}.json", post.id)), post)?;
    }

    tracing::info!(
        "Exported {} posts and {} locations in {:.2}s",
        posts.len(),
        locations.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Watch the data directory and config file, re-exporting on change
pub async fn watch(portfolio: &Portfolio) -> Result<()> {
    let portfolio = portfolio.clone();
    tokio::task::spawn_blocking(move || watch_blocking(&portfolio)).await?
}

fn watch_blocking(portfolio: &Portfolio) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();

    // Create debouncer to avoid multiple rapid rebuilds
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    if portfolio.data_dir.exists() {
        debouncer
            .watcher()
            .watch(&portfolio.data_dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", portfolio.data_dir);
    }

    let config_path = portfolio.config_path();
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant = events.iter().any(|e| {
                    let path_str = e.path.to_string_lossy();
                    !path_str.contains(".DS_Store") && !path_str.ends_with('~')
                });
                if !relevant {
                    continue;
                }

                tracing::info!("Content changed, exporting...");
                if let Err(e) = run(portfolio) {
                    tracing::error!("Export failed: {}", e);
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}
