use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{project::UnknownCategory, Category, Project};

/// Label of the sentinel that disables category filtering.
pub const ALL_LABEL: &str = "All";

/// The category selection of the project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parses "All" (any case) or a category label. Blank input means "All".
    pub fn parse(label: &str) -> Result<Self, UnknownCategory> {
        let label = label.trim();
        if label.is_empty() || label.eq_ignore_ascii_case(ALL_LABEL) {
            return Ok(CategoryFilter::All);
        }
        label.parse().map(CategoryFilter::Only)
    }

    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Only(c) => c.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectQuery {
    pub category: CategoryFilter,
    pub search: String,
}

impl ProjectQuery {
    /// The lowercased search needle, or `None` when the query is blank.
    ///
    /// Only the blank check trims; the needle keeps any surrounding whitespace
    /// the visitor typed.
    fn needle(&self) -> Option<String> {
        if self.search.trim().is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        }
    }
}

/// Filters by category and search text, then orders featured-first and by
/// descending start date within each group.
pub fn filter_projects<'a>(projects: &'a [Project], query: &ProjectQuery) -> Vec<&'a Project> {
    let needle = query.needle();

    let mut filtered: Vec<&Project> = projects
        .iter()
        .filter(|p| query.category.admits(p.category))
        .filter(|p| needle.as_deref().map_or(true, |n| p.matches(n)))
        .collect();

    filtered.sort_by(|a, b| {
        b.featured
            .cmp(&a.featured)
            .then_with(|| b.dates.start.cmp(&a.dates.start))
    });
    filtered
}

/// Distinct categories in order of first appearance.
pub fn categories(projects: &[Project]) -> Vec<Category> {
    let mut seen = Vec::new();
    for project in projects {
        if !seen.contains(&project.category) {
            seen.push(project.category);
        }
    }
    seen
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Per-category project counts for the filter buttons. The "All" count is the list length.
pub fn category_counts(projects: &[Project]) -> Vec<CategoryCount> {
    categories(projects)
        .into_iter()
        .map(|category| CategoryCount {
            category,
            count: projects.iter().filter(|p| p.category == category).count(),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogStats {
    pub total_projects: usize,
    pub specializations: usize,
    pub featured_projects: usize,
}

impl CatalogStats {
    pub fn from_projects(projects: &[Project]) -> Self {
        Self {
            total_projects: projects.len(),
            specializations: categories(projects).len(),
            featured_projects: projects.iter().filter(|p| p.featured).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DateRange;

    fn project(id: &str, category: Category, start: &str, featured: bool) -> Project {
        Project {
            id: id.to_string(),
            title: format!("{id} title"),
            summary: format!("Summary for {id}"),
            role: "Engineer".to_string(),
            dates: DateRange::parse(start).unwrap(),
            category,
            tags: vec![format!("{id}-tag")],
            tech: vec!["Python".to_string()],
            github_url: None,
            download_url: None,
            cover_image: None,
            detail_file: None,
            featured,
        }
    }

    fn fixture() -> Vec<Project> {
        let mut siem = project("siem", Category::Cybersecurity, "2023-01-01", false);
        siem.tech = vec!["Splunk".to_string()];
        let mut backup = project("backup", Category::SysAdmin, "2024-02-01", false);
        backup.tags = vec!["Disaster Recovery".to_string()];
        backup.tech = vec!["Bash".to_string()];
        vec![
            siem,
            project("agent", Category::PromptEng, "2024-06-01", true),
            backup,
            project("phish", Category::Cybersecurity, "2024-03-01", true),
            project("rag", Category::PromptEng, "2022-09-01", false),
        ]
    }

    fn ids(list: &[&Project]) -> Vec<String> {
        list.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_parse_category_filter() {
        assert_eq!(CategoryFilter::parse("All").unwrap(), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("all").unwrap(), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("").unwrap(), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Prompt Eng").unwrap(),
            CategoryFilter::Only(Category::PromptEng)
        );
        assert!(CategoryFilter::parse("Robotics").is_err());
    }

    #[test]
    fn test_all_and_empty_query_keeps_everything_sorted() {
        let projects = fixture();
        let result = filter_projects(&projects, &ProjectQuery::default());
        assert_eq!(ids(&result), vec!["agent", "phish", "backup", "siem", "rag"]);
    }

    #[test]
    fn test_category_filter_only_admits_selected_category() {
        let projects = fixture();
        for category in Category::ALL {
            let query = ProjectQuery {
                category: CategoryFilter::Only(category),
                search: String::new(),
            };
            let result = filter_projects(&projects, &query);
            assert!(!result.is_empty());
            assert!(result.iter().all(|p| p.category == category));
        }
    }

    #[test]
    fn test_search_matches_any_field_case_insensitively() {
        let projects = fixture();
        let by_tech = ProjectQuery {
            category: CategoryFilter::All,
            search: "SPLUNK".to_string(),
        };
        assert_eq!(ids(&filter_projects(&projects, &by_tech)), vec!["siem"]);

        let by_tag = ProjectQuery {
            category: CategoryFilter::All,
            search: "disaster".to_string(),
        };
        assert_eq!(ids(&filter_projects(&projects, &by_tag)), vec!["backup"]);

        let by_summary = ProjectQuery {
            category: CategoryFilter::All,
            search: "summary for ph".to_string(),
        };
        assert_eq!(ids(&filter_projects(&projects, &by_summary)), vec!["phish"]);
    }

    #[test]
    fn test_every_result_contains_the_query() {
        let projects = fixture();
        for search in ["python", "title", "tag", "a"] {
            let query = ProjectQuery {
                category: CategoryFilter::All,
                search: search.to_string(),
            };
            for p in filter_projects(&projects, &query) {
                assert!(p.matches(search), "{} does not contain {search}", p.id);
            }
        }
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let projects = fixture();
        let query = ProjectQuery {
            category: CategoryFilter::Only(Category::PromptEng),
            search: "   ".to_string(),
        };
        assert_eq!(ids(&filter_projects(&projects, &query)), vec!["agent", "rag"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let projects = fixture();
        let query = ProjectQuery {
            category: CategoryFilter::Only(Category::SysAdmin),
            search: "splunk".to_string(),
        };
        assert!(filter_projects(&projects, &query).is_empty());
    }

    #[test]
    fn test_featured_precede_and_dates_descend() {
        let projects = fixture();
        let result = filter_projects(&projects, &ProjectQuery::default());
        let first_plain = result.iter().position(|p| !p.featured).unwrap();
        assert!(result[..first_plain].iter().all(|p| p.featured));
        assert!(result[first_plain..].iter().all(|p| !p.featured));
        for group in [&result[..first_plain], &result[first_plain..]] {
            assert!(group.windows(2).all(|w| w[0].dates.start >= w[1].dates.start));
        }
    }

    #[test]
    fn test_counts_and_stats() {
        let projects = fixture();
        let counts = category_counts(&projects);
        assert_eq!(
            counts,
            vec![
                CategoryCount { category: Category::Cybersecurity, count: 2 },
                CategoryCount { category: Category::PromptEng, count: 2 },
                CategoryCount { category: Category::SysAdmin, count: 1 },
            ]
        );
        let stats = CatalogStats::from_projects(&projects);
        assert_eq!(stats.total_projects, 5);
        assert_eq!(stats.specializations, 3);
        assert_eq!(stats.featured_projects, 2);
    }
}
