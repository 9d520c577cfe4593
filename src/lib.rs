//! pm-hero: markdown-driven content service for a gamified portfolio map
//!
//! Biography, career locations and blog posts live as markdown files in a
//! data directory. This crate parses them into typed records, serves them as
//! JSON and can export the same JSON as static files.

pub mod commands;
pub mod config;
pub mod content;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{Biography, BlogPost, CareerLocation, ContentError};

/// The main application handle
#[derive(Debug, Clone)]
pub struct Portfolio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Markdown data directory
    pub data_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Portfolio {
    /// Create a new instance from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance with an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let data_dir = base_dir.join(&config.data_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            data_dir,
            public_dir,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join("_config.yml")
    }

    pub fn biography_path(&self) -> PathBuf {
        self.data_dir.join(&self.config.biography_file)
    }

    pub fn career_path(&self) -> PathBuf {
        self.data_dir.join(&self.config.career_file)
    }

    pub fn blog_dir(&self) -> PathBuf {
        self.data_dir.join(&self.config.blog_dir)
    }

    /// Biography text, or the built-in fallback
    pub fn biography(&self) -> Biography {
        content::biography::load_biography(&self.biography_path())
    }

    /// Career locations, or the built-in default set
    pub fn career_locations(&self) -> Vec<CareerLocation> {
        content::career::load_career_locations(
            &self.career_path(),
            &self.config.achievements_markers,
        )
    }

    /// All blog posts, newest first
    pub fn blog_posts(&self) -> Result<Vec<BlogPost>, ContentError> {
        content::blog::load_posts(&self.blog_dir())
    }

    /// A single blog post by id
    pub fn blog_post(&self, id: &str) -> Result<Option<BlogPost>, ContentError> {
        content::blog::load_post(&self.blog_dir(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_paths_follow_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "data_dir: content\nblog_dir: notes\n",
        )
        .unwrap();

        let portfolio = Portfolio::new(dir.path()).unwrap();
        assert_eq!(portfolio.data_dir, dir.path().join("content"));
        assert_eq!(portfolio.blog_dir(), dir.path().join("content/notes"));
        assert_eq!(
            portfolio.biography_path(),
            dir.path().join("content/biography.md")
        );
    }

    #[test]
    fn test_empty_site_uses_fallbacks() {
        let dir = tempfile::tempdir().unwrap();
        let portfolio = Portfolio::new(dir.path()).unwrap();

        assert_eq!(portfolio.biography(), Biography::fallback());
        assert_eq!(
            portfolio.career_locations(),
            content::career::default_locations()
        );
        assert!(portfolio.blog_posts().unwrap().is_empty());
        assert!(portfolio.blog_post("first-post").unwrap().is_none());
    }
}
