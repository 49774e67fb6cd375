use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::debug;

use crate::catalog::handlers::ProjectListParams;
use crate::pages::{about, home, projects, render_not_found, resumes};
use crate::state::AppState;

/// GET /
pub async fn handle_home(State(state): State<AppState>) -> Html<String> {
    Html(home::render(
        &state.config,
        &state.content.featured_projects(),
        state.content.resumes(),
    ))
}

/// GET /about
pub async fn handle_about(State(state): State<AppState>) -> Html<String> {
    Html(about::render(&state.config, state.content.experience()))
}

/// GET /projects?category=&q=
pub async fn handle_projects(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Html<String> {
    let pairs = pairs.map(|Query(pairs)| pairs).unwrap_or_default();
    let query = ProjectListParams::from_pairs(pairs).to_query_lenient();
    Html(projects::render_list(
        &state.config,
        state.content.projects(),
        &query,
    ))
}

/// GET /projects/:id
pub async fn handle_project_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let Some(project) = state.content.project(&id) else {
        debug!("Unknown project id '{id}'");
        return (
            StatusCode::NOT_FOUND,
            Html(projects::render_not_found(&state.config)),
        )
            .into_response();
    };

    let detail = state.content.detail(project).await;
    Html(projects::render_detail(&state.config, project, &detail)).into_response()
}

/// GET /resumes
pub async fn handle_resumes(State(state): State<AppState>) -> Html<String> {
    Html(resumes::render(&state.config, state.content.resumes()))
}

/// Fallback for unrouted paths.
pub async fn handle_not_found(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(render_not_found(&state.config)))
}
