//! Category derivation and filtering for the work gallery.
//!
//! Lowercase is the canonical form of a category, used both as the filter
//! key and as the visible label. Records keep their authored casing; it is
//! normalized here at the boundary.

use content::ProjectRecord;

/// Pseudo-category matching every project.
pub const ALL_CATEGORY: &str = "all";

/// Visible label for [`ALL_CATEGORY`].
pub const ALL_CATEGORY_LABEL: &str = "All Projects";

/// Distinct lowercase category labels, `"all"` first, then first-seen order.
///
/// Deduplication is an explicit membership check on the output vec rather
/// than a hash set, so the order is deterministic across runs.
pub fn category_labels(projects: &[ProjectRecord]) -> Vec<String> {
    let mut labels = vec![ALL_CATEGORY.to_string()];
    for project in projects {
        let label = project.category.to_lowercase();
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

/// Display text for a category label.
pub fn display_label(label: &str) -> &str {
    if label == ALL_CATEGORY {
        ALL_CATEGORY_LABEL
    } else {
        label
    }
}

/// True when `selected` names a label produced by [`category_labels`].
pub fn is_known_category(projects: &[ProjectRecord], selected: &str) -> bool {
    category_labels(projects).iter().any(|l| l == selected)
}

/// Case-insensitive match of one record against the selected category.
pub fn matches_category(project: &ProjectRecord, selected: &str) -> bool {
    selected == ALL_CATEGORY || project.category.to_lowercase() == selected
}

/// Projects visible under the selected category, in input order.
pub fn filter_projects<'a>(
    projects: &'a [ProjectRecord],
    selected: &str,
) -> Vec<&'a ProjectRecord> {
    projects
        .iter()
        .filter(|p| matches_category(p, selected))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(slug: &str, category: &str) -> ProjectRecord {
        ProjectRecord {
            slug: slug.to_string(),
            title: slug.to_string(),
            category: category.to_string(),
            year: 2025,
            description: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_labels_start_with_all() {
        let projects = vec![project("a", "Web")];
        assert_eq!(category_labels(&projects)[0], "all");
    }

    #[test]
    fn test_labels_empty_input() {
        assert_eq!(category_labels(&[]), vec!["all"]);
    }

    #[test]
    fn test_labels_dedup_case_insensitive_first_seen_order() {
        let projects = vec![
            project("a", "Web"),
            project("b", "Branding"),
            project("c", "web"),
        ];
        assert_eq!(category_labels(&projects), vec!["all", "web", "branding"]);
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("all"), "All Projects");
        assert_eq!(display_label("web"), "web");
    }

    #[test]
    fn test_is_known_category() {
        let projects = vec![project("a", "Web")];
        assert!(is_known_category(&projects, "all"));
        assert!(is_known_category(&projects, "web"));
        assert!(!is_known_category(&projects, "Web"));
        assert!(!is_known_category(&projects, "branding"));
    }

    #[test]
    fn test_all_matches_everything() {
        let projects = vec![project("a", "Web"), project("b", "Branding")];
        assert_eq!(filter_projects(&projects, "all").len(), 2);
    }

    #[test]
    fn test_filter_case_insensitive() {
        let projects = vec![project("a", "Web"), project("b", "web"), project("c", "Branding")];
        let visible = filter_projects(&projects, "web");
        let slugs: Vec<&str> = visible.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b"]);
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let projects = vec![project("b", "Branding"), project("a", "Branding")];
        let slugs: Vec<&str> = filter_projects(&projects, "branding")
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["b", "a"]);
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        let projects = vec![project("a", "Web")];
        assert!(filter_projects(&projects, "print").is_empty());
    }
}
