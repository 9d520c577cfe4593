//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,

    // URL
    /// Prefix every route and exported file is mounted under
    pub root: String,

    // Directory
    pub data_dir: String,
    pub public_dir: String,

    // Content
    pub biography_file: String,
    pub career_file: String,
    pub blog_dir: String,
    /// Level-4 heading texts that open the achievements list of a location
    pub achievements_markers: Vec<String>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "PM Hero".to_string(),
            author: "Сергей".to_string(),

            root: "/".to_string(),

            data_dir: "data".to_string(),
            public_dir: "public".to_string(),

            biography_file: "biography.md".to_string(),
            career_file: "career-locations.md".to_string(),
            blog_dir: "blog-posts".to_string(),
            achievements_markers: vec!["Достижения".to_string(), "Achievements".to_string()],

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Normalized URL prefix: always starts with '/', never ends with one
    /// (empty for the site root)
    pub fn route_prefix(&self) -> String {
        let trimmed = self.root.trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        }
    }
}
