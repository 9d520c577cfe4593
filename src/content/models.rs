//! Content records served to the map UI

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Biography page text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Biography {
    /// Raw markdown content
    pub content: String,
}

/// A career milestone placed on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerLocation {
    /// Landmark identifier (`startup-forest`, ...)
    pub id: String,

    /// Display name
    pub name: String,

    /// Horizontal position, percent of map width
    pub x: f64,

    /// Vertical position, percent of map height
    pub y: f64,

    pub description: String,

    pub achievements: Vec<String>,

    /// Free-form period, e.g. `2021-2023`
    pub years: String,
}

/// A blog post read from `<blog_dir>/<id>.md`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// File stem
    pub id: String,

    /// First H1 of the file, or the id
    pub title: String,

    /// First paragraph, best effort
    pub excerpt: String,

    /// Raw markdown content
    pub content: String,

    /// File modification time
    #[serde(serialize_with = "serialize_iso_millis")]
    pub date: DateTime<Utc>,
}

/// List view of a blog post (no content)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPostSummary {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub date: DateTime<Utc>,
}

impl From<&BlogPost> for BlogPostSummary {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            date: post.date,
        }
    }
}

/// Format a timestamp the way browsers print `Date.toISOString()`
pub fn iso_millis(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

fn serialize_iso_millis<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&iso_millis(date))
}
