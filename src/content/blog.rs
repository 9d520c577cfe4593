//! Blog posts - one markdown file per post in the blog directory

use chrono::{DateTime, Utc};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

use super::error::{ContentError, Result};
use super::scanner::{self, Line};
use super::{read_text, BlogPost};

/// Reject ids that could point outside the blog directory
pub fn validate_post_id(id: &str) -> Result<()> {
    let invalid = id.is_empty()
        || id.contains('/')
        || id.contains('\\')
        || id.contains('\0')
        || id.contains("..");
    if invalid {
        Err(ContentError::InvalidPostId(id.to_string()))
    } else {
        Ok(())
    }
}

/// First `# ` heading anywhere in the file
pub fn extract_title(content: &str) -> Option<&str> {
    scanner::scan(content).find_map(|line| line.heading(1))
}

/// First paragraph after an optional leading H1 and an optional H2.
///
/// The first remaining line is always taken; following lines are added until
/// a blank line or a `##`-prefixed line. Best effort: unusual layouts can
/// yield a heading or an empty string.
pub fn extract_excerpt(content: &str) -> String {
    let lines: Vec<Line<'_>> = scanner::scan(content).collect();
    let mut i = 0;

    for level in [1, 2] {
        if lines.get(i).and_then(|l| l.heading(level)).is_some() {
            i += 1;
            while lines.get(i).is_some_and(|l| l.is_blank()) {
                i += 1;
            }
        }
    }

    while lines.get(i).is_some_and(|l| l.is_blank()) {
        i += 1;
    }

    let Some(first) = lines.get(i) else {
        return String::new();
    };

    let mut paragraph = vec![first.raw];
    for line in &lines[i + 1..] {
        if line.is_blank() || line.raw.starts_with("##") {
            break;
        }
        paragraph.push(line.raw);
    }

    paragraph.join("\n").trim().to_string()
}

/// Build a post from its id, raw content and modification time
pub fn parse_post(id: &str, content: String, date: DateTime<Utc>) -> BlogPost {
    let title = extract_title(&content).unwrap_or(id).to_string();
    let excerpt = extract_excerpt(&content);
    BlogPost {
        id: id.to_string(),
        title,
        excerpt,
        content,
        date,
    }
}

fn read_post(path: &Path, id: &str) -> Result<BlogPost> {
    let content = read_text(path).map_err(|e| ContentError::io(path, e))?;
    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| ContentError::io(path, e))?;
    Ok(parse_post(id, content, DateTime::<Utc>::from(modified)))
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("md")
}

/// Load every `.md` file in `dir`, newest first.
///
/// A missing directory is an empty blog. Files that cannot be read are
/// skipped; failing to list the directory itself is an error.
pub fn load_posts(dir: &Path) -> Result<Vec<BlogPost>> {
    if !dir.exists() {
        tracing::info!("Blog directory {:?} not found, no posts", dir);
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        return Err(ContentError::io(dir, io::Error::other("not a directory")));
    }

    let mut posts = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("failed to list blog directory"));
                return Err(ContentError::io(dir, source));
            }
            Err(e) => {
                tracing::warn!("Skipping blog entry: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || !is_markdown_file(path) {
            continue;
        }
        let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
            tracing::warn!("Skipping blog post with non UTF-8 name {:?}", path);
            continue;
        };

        match read_post(path, id) {
            Ok(post) => posts.push(post),
            Err(e) => tracing::warn!("Failed to load post {:?}: {}", path, e),
        }
    }

    // Sort by date descending (newest first); stable, so ties keep file name order
    posts.sort_by(|a, b| b.date.cmp(&a.date));

    tracing::debug!("Loaded {} blog posts from {:?}", posts.len(), dir);
    Ok(posts)
}

/// Load `<dir>/<id>.md`. `Ok(None)` when there is no such post; an entry
/// that exists but cannot be read is an error.
pub fn load_post(dir: &Path, id: &str) -> Result<Option<BlogPost>> {
    if let Err(e) = validate_post_id(id) {
        tracing::debug!("{}", e);
        return Ok(None);
    }

    let path = dir.join(format!("{}.md", id));
    if !path.exists() {
        return Ok(None);
    }

    read_post(&path, id).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_first_h1() {
        assert_eq!(extract_title("intro\n## Sub\n# Real Title\n# Other"), Some("Real Title"));
        assert_eq!(extract_title("no headings"), None);
    }

    #[test]
    fn test_excerpt_after_h1_and_h2() {
        let content = "# Title\n\n## Subtitle\n\nFirst paragraph\ncontinues here.\n\nSecond paragraph.";
        assert_eq!(extract_excerpt(content), "First paragraph\ncontinues here.");
    }

    #[test]
    fn test_excerpt_without_headers() {
        assert_eq!(extract_excerpt("Just text.\n\nMore."), "Just text.");
        assert_eq!(extract_excerpt("\n\nAfter blanks\n"), "After blanks");
    }

    #[test]
    fn test_excerpt_stops_at_subheading() {
        let content = "# T\nLine one\n### Section\nbody";
        assert_eq!(extract_excerpt(content), "Line one");
    }

    #[test]
    fn test_excerpt_heading_only_file() {
        assert_eq!(extract_excerpt("# Only a title\n"), "");
        assert_eq!(extract_excerpt(""), "");
    }

    #[test]
    fn test_excerpt_takes_first_line_unconditionally() {
        // A third-level heading right after the title becomes the excerpt
        assert_eq!(extract_excerpt("# T\n\n### Intro\n\ntext"), "### Intro");
    }

    #[test]
    fn test_validate_post_id() {
        assert!(validate_post_id("first-post").is_ok());
        assert!(validate_post_id("").is_err());
        assert!(validate_post_id("../secret").is_err());
        assert!(validate_post_id("a/b").is_err());
        assert!(validate_post_id("a\\b").is_err());
    }

    #[test]
    fn test_parse_post_title_defaults_to_id() {
        let post = parse_post("untitled-note", "Body only".to_string(), Utc::now());
        assert_eq!(post.title, "untitled-note");
        assert_eq!(post.excerpt, "Body only");
        assert_eq!(post.content, "Body only");
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let posts = load_posts(&dir.path().join("blog-posts")).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_load_post_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("secret.md"), "# Secret").unwrap();
        let blog = dir.path().join("blog-posts");
        fs::create_dir(&blog).unwrap();
        assert!(load_post(&blog, "../secret").unwrap().is_none());
    }
}
