//! Career locations - parses `career-locations.md` into map locations
//!
//! The file is a list of sections separated by `---` lines:
//!
//! ```text
//! # Name
//! ## startup-forest
//! ### 2021-2023
//! Free text description.
//! #### Достижения
//! - First achievement
//! - Second achievement
//! ---
//! ```
//!
//! Each section is folded through a small state machine. Sections that never
//! get past the three header lines, or whose id is not a known [`Landmark`],
//! are dropped.

use std::path::Path;

use super::landmark::Landmark;
use super::scanner::{self, Line, LineKind};
use super::{read_text, CareerLocation};

/// Parse position within a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Start,
    Name,
    Id,
    Years,
    Description,
    Achievements,
    Done,
}

#[derive(Debug, Default)]
struct Draft<'a> {
    name: &'a str,
    id: &'a str,
    years: &'a str,
    description: Vec<&'a str>,
    achievements: Vec<&'a str>,
}

impl Draft<'_> {
    fn into_location(self, landmark: Landmark) -> CareerLocation {
        let (x, y) = landmark.coordinates();
        CareerLocation {
            id: self.id.to_string(),
            name: self.name.to_string(),
            x,
            y,
            description: self.description.join(" ").trim().to_string(),
            achievements: self.achievements.iter().map(|a| a.to_string()).collect(),
            years: self.years.to_string(),
        }
    }
}

fn is_achievements_marker(line: &Line<'_>, markers: &[String]) -> bool {
    line.heading(4)
        .is_some_and(|text| markers.iter().any(|m| text.starts_with(m.as_str())))
}

/// Advance the state machine by one line. `None` rejects the section.
fn step<'a>(stage: Stage, line: &Line<'a>, draft: &mut Draft<'a>, markers: &[String]) -> Option<Stage> {
    let next = match stage {
        Stage::Start => {
            draft.name = line.heading(1)?.trim();
            Stage::Name
        }
        Stage::Name => {
            draft.id = line.heading(2)?.trim();
            Stage::Id
        }
        Stage::Id => {
            draft.years = line.heading(3)?.trim();
            Stage::Years
        }
        Stage::Years | Stage::Description => {
            if is_achievements_marker(line, markers) {
                Stage::Achievements
            } else {
                if !line.is_blank() {
                    draft.description.push(line.raw.trim());
                }
                Stage::Description
            }
        }
        Stage::Achievements => {
            if let LineKind::ListItem(text) = line.kind {
                draft.achievements.push(text);
            }
            Stage::Achievements
        }
        Stage::Done => Stage::Done,
    };
    Some(next)
}

fn finish(stage: Stage) -> Option<Stage> {
    match stage {
        Stage::Years | Stage::Description | Stage::Achievements | Stage::Done => Some(Stage::Done),
        Stage::Start | Stage::Name | Stage::Id => None,
    }
}

fn parse_section(lines: &[Line<'_>], markers: &[String]) -> Option<CareerLocation> {
    let start = lines.iter().position(|l| !l.is_blank())?;
    let end = lines.iter().rposition(|l| !l.is_blank())?;

    let mut draft = Draft::default();
    let mut stage = Stage::Start;
    for line in &lines[start..=end] {
        stage = step(stage, line, &mut draft, markers)?;
    }
    finish(stage)?;

    match Landmark::from_id(draft.id) {
        Some(landmark) => Some(draft.into_location(landmark)),
        None => {
            tracing::debug!("Skipping location with unknown id {:?}", draft.id);
            None
        }
    }
}

/// Parse every well-formed section with a known id, in file order
pub fn parse_career_locations(text: &str, markers: &[String]) -> Vec<CareerLocation> {
    scanner::sections(text)
        .iter()
        .filter_map(|section| parse_section(section, markers))
        .collect()
}

/// Load locations from disk. Missing, unreadable or empty input yields the
/// complete default set, never a mix of parsed and default entries. Invalid
/// UTF-8 is decoded lossily rather than treated as unreadable.
pub fn load_career_locations(path: &Path, markers: &[String]) -> Vec<CareerLocation> {
    if !path.exists() {
        tracing::info!("Career locations not found at {:?}, using defaults", path);
        return default_locations();
    }

    let text = match read_text(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Failed to read career locations {:?}: {}", path, e);
            return default_locations();
        }
    };

    let locations = parse_career_locations(&text, markers);
    if locations.is_empty() {
        tracing::warn!("No valid locations in {:?}, using defaults", path);
        return default_locations();
    }

    tracing::debug!("Loaded {} career locations", locations.len());
    locations
}

fn default_location(
    landmark: Landmark,
    name: &str,
    description: &str,
    achievements: &[&str],
    years: &str,
) -> CareerLocation {
    let (x, y) = landmark.coordinates();
    CareerLocation {
        id: landmark.id().to_string(),
        name: name.to_string(),
        x,
        y,
        description: description.to_string(),
        achievements: achievements.iter().map(|a| a.to_string()).collect(),
        years: years.to_string(),
    }
}

/// Built-in locations used when the markdown file gives nothing usable
pub fn default_locations() -> Vec<CareerLocation> {
    vec![
        default_location(
            Landmark::StartupForest,
            "Ингосстрах",
            "Реализация нового сайта в качестве CPO/PM. 5 продуктовых команд + 1 платформенная команда, работа по SAFe, в SCRUM.",
            &[
                "Запуск нового сайта",
                "Реализация страховых продуктов общим MAU 70 тыс",
                "Увеличение конверсии в онбординг на 50%",
                "Увеличение конверсии в оплату на 15%",
            ],
            "2021-2023",
        ),
        default_location(
            Landmark::CorporateCastle,
            "Безопасная крепость",
            "Управление двумя продуктами для безопасной разработки. 5+ команд - стратегия и тактика.",
            &[
                "Пересборка продуктовой стратегии в сложнейшем домене",
                "Обновление и перезепуск облачного сканера уязвимостей",
                "Внедрение культуры принятия решений на основе данных",
            ],
            "2023-настоящее время",
        ),
        default_location(
            Landmark::ProductOcean,
            "Цифровая энергетика",
            "Управление продуктом в динамичной среде с постоянно меняющимися требованиями рынка. Разработка продуктовой стратегии и дорожной карты. Глубокое погружение в аналитику и метрики продукта.",
            &[
                "Увеличение удержания пользователей на 35%",
                "Запуск 3 успешных фич",
                "Разработка системы метрик продукта",
                "Создание процесса приоритизации задач",
            ],
            "2019-2021",
        ),
        default_location(
            Landmark::InnovationMountains,
            "Горы продуктовых задач",
            "Исследование новых технологий и подходов к созданию продуктов. Экспериментирование с инновационными решениями и методологиями. Работа на передовой технологических трендов.",
            &[
                "Внедрение AI в продукт",
                "Проведение 5+ технологических исследований",
                "Разработка концепции продукта следующего поколения",
            ],
            "2023-настоящее время",
        ),
    ]
}

/// Render locations back into the markdown layout `parse_career_locations` reads
pub fn to_markdown(locations: &[CareerLocation], marker: &str) -> String {
    let sections: Vec<String> = locations
        .iter()
        .map(|loc| {
            let mut section = format!(
                "# {}\n## {}\n### {}\n{}\n#### {}\n",
                loc.name, loc.id, loc.years, loc.description, marker
            );
            for achievement in &loc.achievements {
                section.push_str(&format!("- {}\n", achievement));
            }
            section
        })
        .collect();
    sections.join("---\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> Vec<String> {
        vec!["Достижения".to_string(), "Achievements".to_string()]
    }

    #[test]
    fn test_parse_single_section() {
        let text = "# X\n## startup-forest\n### Y\nD\n#### Достижения\n- A1\n- A2\n";
        let locations = parse_career_locations(text, &markers());
        assert_eq!(
            locations,
            vec![CareerLocation {
                id: "startup-forest".to_string(),
                name: "X".to_string(),
                x: 20.0,
                y: 70.0,
                description: "D".to_string(),
                achievements: vec!["A1".to_string(), "A2".to_string()],
                years: "Y".to_string(),
            }]
        );
    }

    #[test]
    fn test_multiline_description_joined() {
        let text = "# Castle\n## corporate-castle\n### 2023\n\nFirst line.\n\nSecond line.\n#### Achievements\n- Won\n";
        let loc = &parse_career_locations(text, &markers())[0];
        assert_eq!(loc.description, "First line. Second line.");
        assert_eq!(loc.achievements, vec!["Won"]);
        assert_eq!((loc.x, loc.y), (40.0, 40.0));
    }

    #[test]
    fn test_missing_years_skips_section() {
        let text = "# X\n## startup-forest\nD\n#### Достижения\n- A\n---\n# Ocean\n## product-ocean\n### 2019\n";
        let locations = parse_career_locations(text, &markers());
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].id, "product-ocean");
        assert!(locations[0].description.is_empty());
        assert!(locations[0].achievements.is_empty());
    }

    #[test]
    fn test_blank_line_between_headers_rejects() {
        let text = "# X\n\n## startup-forest\n### Y\n";
        assert!(parse_career_locations(text, &markers()).is_empty());
    }

    #[test]
    fn test_unknown_id_dropped() {
        let text = "# Lab\n## secret-lab\n### 2020\n---\n# Village\n## community-village\n### 2024\n";
        let locations = parse_career_locations(text, &markers());
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].id, "community-village");
    }

    #[test]
    fn test_achievements_ignore_non_list_lines() {
        let text = "# X\n## product-ocean\n### Y\n#### Достижения\n- A1\nnot an item\n\n- A2\n---\n";
        let loc = &parse_career_locations(text, &markers())[0];
        assert_eq!(loc.achievements, vec!["A1", "A2"]);
        assert!(loc.description.is_empty());
    }

    #[test]
    fn test_list_before_marker_is_description() {
        let text = "# X\n## product-ocean\n### Y\n- looks like a list\n";
        let loc = &parse_career_locations(text, &markers())[0];
        assert_eq!(loc.description, "- looks like a list");
        assert!(loc.achievements.is_empty());
    }

    #[test]
    fn test_custom_marker() {
        let text = "# X\n## product-ocean\n### Y\n#### Wins\n- A\n";
        let custom = vec!["Wins".to_string()];
        assert_eq!(parse_career_locations(text, &custom)[0].achievements, vec!["A"]);
        // Without the marker the heading is part of the description
        assert!(parse_career_locations(text, &markers())[0].achievements.is_empty());
    }

    #[test]
    fn test_defaults_round_trip_through_markdown() {
        let defaults = default_locations();
        let text = to_markdown(&defaults, "Достижения");
        assert_eq!(parse_career_locations(&text, &markers()), defaults);
    }

    #[test]
    fn test_step_rejects_wrong_header_order() {
        let mut draft = Draft::default();
        let line = Line::classify("## startup-forest");
        assert_eq!(step(Stage::Start, &line, &mut draft, &markers()), None);
        assert_eq!(finish(Stage::Id), None);
        assert_eq!(finish(Stage::Years), Some(Stage::Done));
    }
}
