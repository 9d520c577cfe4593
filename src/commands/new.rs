//! Create a new blog post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::blog::validate_post_id;
use crate::Portfolio;

/// Create `<blog_dir>/<id>.md` starting with the title heading
pub fn create_post(portfolio: &Portfolio, title: &str, id: Option<&str>) -> Result<PathBuf> {
    let id = match id {
        Some(id) => id.to_string(),
        None => slug::slugify(title),
    };
    validate_post_id(&id)?;

    let blog_dir = portfolio.blog_dir();
    fs::create_dir_all(&blog_dir)?;

    let file_path = blog_dir.join(format!("{}.md", id));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::write(&file_path, format!("# {}\n\n", title))?;
    tracing::info!("Created post {}", id);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_post_slugifies_title() {
        let dir = tempfile::tempdir().unwrap();
        let portfolio = Portfolio::new(dir.path()).unwrap();

        let path = create_post(&portfolio, "Hello World", None).unwrap();
        assert_eq!(path, portfolio.blog_dir().join("hello-world.md"));

        let post = portfolio.blog_post("hello-world").unwrap().unwrap();
        assert_eq!(post.title, "Hello World");
    }

    #[test]
    fn test_create_post_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let portfolio = Portfolio::new(dir.path()).unwrap();

        create_post(&portfolio, "Once", Some("once")).unwrap();
        assert!(create_post(&portfolio, "Twice", Some("once")).is_err());
    }

    #[test]
    fn test_create_post_rejects_bad_id() {
        let dir = tempfile::tempdir().unwrap();
        let portfolio = Portfolio::new(dir.path()).unwrap();
        assert!(create_post(&portfolio, "Escape", Some("../escape")).is_err());
    }
}
