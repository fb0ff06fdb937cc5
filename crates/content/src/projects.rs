use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One portfolio item.
///
/// `category` keeps the casing it was authored with; the frontend treats
/// lowercase as the canonical form for both comparison and display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub year: u16,
    pub description: String,
    pub image: String,
}

impl ProjectRecord {
    fn new(
        slug: &str,
        title: &str,
        category: &str,
        year: u16,
        description: &str,
        image: &str,
    ) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            year,
            description: description.to_string(),
            image: image.to_string(),
        }
    }
}

static PROJECTS: Lazy<Vec<ProjectRecord>> = Lazy::new(|| {
    vec![
        ProjectRecord::new(
            "aurora-analytics",
            "Aurora Analytics",
            "Web",
            2025,
            "Marketing site and interactive product tour for a data analytics startup.",
            "assets/work/aurora-analytics.webp",
        ),
        ProjectRecord::new(
            "fernwood-roasters",
            "Fernwood Roasters",
            "Branding",
            2025,
            "Full identity system for a specialty coffee roaster: wordmark, packaging, signage.",
            "assets/work/fernwood-roasters.webp",
        ),
        ProjectRecord::new(
            "tidepool",
            "Tidepool",
            "Mobile",
            2024,
            "iOS and Android companion app for a network of coastal weather stations.",
            "assets/work/tidepool.webp",
        ),
        ProjectRecord::new(
            "harbor-collective",
            "Harbor Collective",
            "web",
            2024,
            "Editorial platform and membership portal for an independent journalism co-op.",
            "assets/work/harbor-collective.webp",
        ),
        ProjectRecord::new(
            "meridian-supply",
            "Meridian Supply",
            "Branding",
            2023,
            "Rebrand of a heritage outdoor-gear manufacturer, from logotype to catalog.",
            "assets/work/meridian-supply.webp",
        ),
        ProjectRecord::new(
            "lumen-field-guide",
            "Lumen Field Guide",
            "Mobile",
            2023,
            "Offline-first field guide app for amateur astronomers, with dark-sky maps.",
            "assets/work/lumen-field-guide.webp",
        ),
    ]
});

/// All portfolio projects, newest first.
pub fn all() -> &'static [ProjectRecord] {
    &PROJECTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_projects_non_empty() {
        assert!(!all().is_empty());
    }

    #[test]
    fn test_slugs_unique() {
        let slugs: HashSet<&str> = all().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs.len(), all().len());
    }

    #[test]
    fn test_categories_non_empty() {
        for project in all() {
            assert!(!project.category.trim().is_empty(), "{}", project.slug);
        }
    }
}
