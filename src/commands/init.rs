//! Initialize a new portfolio site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::content::biography::FALLBACK_BIOGRAPHY;
use crate::content::career;

const CONFIG_TEMPLATE: &str = r#"# pm-hero configuration

# Site
title: PM Hero
author: Сергей

# URL prefix the site is published under, e.g. /product-manager-portfolio/
root: /

# Directory
data_dir: data
public_dir: public

# Content
biography_file: biography.md
career_file: career-locations.md
blog_dir: blog-posts
achievements_markers:
  - Достижения
  - Achievements
"#;

const SAMPLE_POST: &str = r#"# Первый пост

Добро пожаловать в блог! Это первая запись, созданная командой `init`.

## Что дальше

Создайте новую запись командой `pm-hero new "Заголовок"`.
"#;

/// Write `content` to `path` unless the file already exists
fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::info!("Keeping existing {:?}", path);
        return Ok(());
    }
    fs::write(path, content)?;
    tracing::info!("Created {:?}", path);
    Ok(())
}

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config = SiteConfig::default();
    let data_dir = target_dir.join(&config.data_dir);
    let blog_dir = data_dir.join(&config.blog_dir);

    // Create directory structure
    fs::create_dir_all(&blog_dir)?;
    fs::create_dir_all(target_dir.join(&config.public_dir))?;

    write_if_missing(&target_dir.join("_config.yml"), CONFIG_TEMPLATE)?;
    write_if_missing(
        &data_dir.join(&config.biography_file),
        &format!("{}\n", FALLBACK_BIOGRAPHY),
    )?;

    let marker = config
        .achievements_markers
        .first()
        .map(String::as_str)
        .unwrap_or("Достижения");
    write_if_missing(
        &data_dir.join(&config.career_file),
        &career::to_markdown(&career::default_locations(), marker),
    )?;

    write_if_missing(&blog_dir.join("first-post.md"), SAMPLE_POST)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Portfolio;

    #[test]
    fn test_init_creates_loadable_site() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        let portfolio = Portfolio::new(dir.path()).unwrap();
        assert!(portfolio.biography().content.starts_with("# Сергей"));
        assert_eq!(portfolio.career_locations(), career::default_locations());

        let posts = portfolio.blog_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "first-post");
        assert_eq!(posts[0].title, "Первый пост");
        assert!(posts[0].excerpt.starts_with("Добро пожаловать"));
    }

    #[test]
    fn test_init_keeps_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(dir.path().join("data/biography.md"), "# Mine").unwrap();

        init_site(dir.path()).unwrap();

        let bio = fs::read_to_string(dir.path().join("data/biography.md")).unwrap();
        assert_eq!(bio, "# Mine");
    }
}
