//! Biography retrieval

use std::path::Path;

use super::{read_text, Biography};

/// Served when `biography.md` is missing or unreadable
pub const FALLBACK_BIOGRAPHY: &str = "# Сергей\n\nПродуктовый менеджер с опытом работы в технологической сфере.\n\nСпециализация: управление продуктом, аналитика, стратегическое планирование.";

impl Biography {
    pub fn fallback() -> Self {
        Self {
            content: FALLBACK_BIOGRAPHY.to_string(),
        }
    }
}

/// Read the biography file verbatim, or the fallback text. Never fails.
///
/// Invalid UTF-8 is decoded lossily; only I/O errors fall back.
pub fn load_biography(path: &Path) -> Biography {
    if !path.is_file() {
        tracing::info!("Biography not found at {:?}, using default", path);
        return Biography::fallback();
    }

    match read_text(path) {
        Ok(content) => Biography { content },
        Err(e) => {
            tracing::warn!("Failed to read biography {:?}: {}", path, e);
            Biography::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let bio = load_biography(&dir.path().join("biography.md"));
        assert!(bio.content.starts_with("# Сергей"));
        assert_eq!(bio.content, FALLBACK_BIOGRAPHY);
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("biography.md");
        fs::create_dir(&path).unwrap();
        assert_eq!(load_biography(&path), Biography::fallback());
    }

    #[test]
    fn test_exact_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("biography.md");
        let text = "# Anna\r\n\nTrailing spaces   \n\n";
        fs::write(&path, text).unwrap();
        assert_eq!(load_biography(&path).content, text);
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("biography.md");
        fs::write(&path, b"# Caf\xe9\n\nBody").unwrap();
        let bio = load_biography(&path);
        assert_eq!(bio.content, "# Caf\u{FFFD}\n\nBody");
        assert_ne!(bio, Biography::fallback());
    }
}
