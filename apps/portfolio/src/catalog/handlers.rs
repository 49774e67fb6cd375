use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{
    category_counts, filter_projects, CatalogStats, CategoryCount, CategoryFilter, ProjectQuery,
};
use crate::errors::AppError;
use crate::models::Project;
use crate::state::AppState;

/// Query string of the project list, shared with the HTML route.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub category: Option<String>,
    pub q: Option<String>,
}

impl ProjectListParams {
    /// Builds params from decoded query pairs; the first value of a repeated key wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "category" => params.category.get_or_insert(value),
                "q" => params.q.get_or_insert(value),
                _ => continue,
            };
        }
        params
    }

    /// Strict parse: an unknown category is an error.
    pub fn to_query(&self) -> Result<ProjectQuery, AppError> {
        let category = CategoryFilter::parse(self.category.as_deref().unwrap_or_default())
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(ProjectQuery {
            category,
            search: self.q.clone().unwrap_or_default(),
        })
    }

    /// Lenient parse for pages: an unknown category falls back to "All".
    pub fn to_query_lenient(&self) -> ProjectQuery {
        ProjectQuery {
            category: CategoryFilter::parse(self.category.as_deref().unwrap_or_default())
                .unwrap_or_default(),
            search: self.q.clone().unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
    /// Counts over the whole catalog, independent of the active filter.
    pub counts: Vec<CategoryCount>,
    pub stats: CatalogStats,
}

/// GET /api/v1/projects
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> Result<Json<ProjectListResponse>, AppError> {
    let query = params.to_query()?;
    let all = state.content.projects();
    let projects = filter_projects(all, &query).into_iter().cloned().collect();

    Ok(Json(ProjectListResponse {
        projects,
        counts: category_counts(all),
        stats: CatalogStats::from_projects(all),
    }))
}

/// GET /api/v1/projects/:id
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, AppError> {
    state
        .content
        .project(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn params(category: Option<&str>, q: Option<&str>) -> ProjectListParams {
        ProjectListParams {
            category: category.map(str::to_string),
            q: q.map(str::to_string),
        }
    }

    #[test]
    fn test_strict_parse_rejects_unknown_category() {
        let err = params(Some("Robotics"), None).to_query().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_lenient_parse_falls_back_to_all() {
        let query = params(Some("Robotics"), Some("log")).to_query_lenient();
        assert_eq!(query.category, CategoryFilter::All);
        assert_eq!(query.search, "log");

        let query = params(Some("sysadmin"), None).to_query_lenient();
        assert_eq!(query.category, CategoryFilter::Only(Category::SysAdmin));
    }

    #[test]
    fn test_from_pairs_keeps_first_value() {
        let pairs = vec![
            ("q".to_string(), "log".to_string()),
            ("category".to_string(), "Cybersecurity".to_string()),
            ("q".to_string(), "ignored".to_string()),
        ];
        let params = ProjectListParams::from_pairs(pairs);
        assert_eq!(params.category.as_deref(), Some("Cybersecurity"));
        assert_eq!(params.q.as_deref(), Some("log"));
    }
}
