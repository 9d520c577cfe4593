//! Line scanner - classifies markdown lines for the content parsers

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEADING_RE: Regex = Regex::new(r"^(#{1,6}) (.+)$").unwrap();
    static ref LIST_ITEM_RE: Regex = Regex::new(r"^- (.+)$").unwrap();
}

/// What a single markdown line is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `#`..`######` followed by a space and non-empty text
    Heading { level: u8, text: &'a str },
    /// `- text`
    ListItem(&'a str),
    /// Empty or whitespace-only
    Blank,
    /// Anything else
    Text(&'a str),
}

/// A classified line together with its original text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub raw: &'a str,
    pub kind: LineKind<'a>,
}

impl<'a> Line<'a> {
    pub fn classify(raw: &'a str) -> Self {
        let raw = raw.trim_end_matches('\r');

        let kind = if raw.trim().is_empty() {
            LineKind::Blank
        } else if let Some(caps) = HEADING_RE.captures(raw) {
            let level = caps.get(1).map_or(1, |m| m.as_str().len()) as u8;
            let text = caps.get(2).map_or("", |m| m.as_str());
            LineKind::Heading { level, text }
        } else if let Some(caps) = LIST_ITEM_RE.captures(raw) {
            LineKind::ListItem(caps.get(1).map_or("", |m| m.as_str()))
        } else {
            LineKind::Text(raw)
        };

        Self { raw, kind }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self.kind, LineKind::Blank)
    }

    /// Heading text if this line is a heading of exactly `level`
    pub fn heading(&self, level: u8) -> Option<&'a str> {
        match self.kind {
            LineKind::Heading { level: l, text } if l == level => Some(text),
            _ => None,
        }
    }
}

/// Classify every line of `text`
pub fn scan(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.lines().map(Line::classify)
}

/// Split `text` into sections separated by lines consisting of `---`
pub fn sections(text: &str) -> Vec<Vec<Line<'_>>> {
    let mut sections = vec![Vec::new()];
    for line in text.lines() {
        if line.trim() == "---" {
            sections.push(Vec::new());
        } else if let Some(current) = sections.last_mut() {
            current.push(Line::classify(line));
        }
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_headings() {
        assert_eq!(
            Line::classify("## product-ocean").kind,
            LineKind::Heading {
                level: 2,
                text: "product-ocean"
            }
        );
        assert_eq!(Line::classify("#### Достижения").heading(4), Some("Достижения"));
        // No space after the hashes
        assert_eq!(Line::classify("#tag").kind, LineKind::Text("#tag"));
        // Empty heading text is not a heading
        assert_eq!(Line::classify("# ").kind, LineKind::Text("# "));
    }

    #[test]
    fn test_classify_list_and_blank() {
        assert_eq!(Line::classify("- Запуск MVP").kind, LineKind::ListItem("Запуск MVP"));
        assert!(Line::classify("   ").is_blank());
        assert_eq!(Line::classify("-no space").kind, LineKind::Text("-no space"));
    }

    #[test]
    fn test_crlf_is_stripped() {
        let line = Line::classify("### 2019-2021\r");
        assert_eq!(line.raw, "### 2019-2021");
        assert_eq!(line.heading(3), Some("2019-2021"));
    }

    #[test]
    fn test_sections_split_on_rule_lines_only() {
        let text = "# A\ntext --- inline\n---\n# B\n  ---  \n";
        let sections = sections(text);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].len(), 2);
        assert_eq!(sections[0][1].raw, "text --- inline");
        assert_eq!(sections[1][0].heading(1), Some("B"));
        assert!(sections[2].is_empty());
    }
}
