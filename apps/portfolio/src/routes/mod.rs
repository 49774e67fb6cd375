pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::catalog::handlers as catalog;
use crate::contact::handlers as contact;
use crate::og::handlers as og;
use crate::pages::handlers as pages;
use crate::state::AppState;

const RESUME_DIR: &str = "resume";
const IMAGES_DIR: &str = "images";

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(pages::handle_home))
        .route("/about", get(pages::handle_about))
        .route("/projects", get(pages::handle_projects))
        .route("/projects/:id", get(pages::handle_project_detail))
        .route("/resumes", get(pages::handle_resumes))
        .route(
            "/contact",
            get(contact::handle_contact_page).post(contact::handle_contact_submit),
        )
        // Social preview image
        .route("/api/og", get(og::handle_og_image))
        // JSON API
        .route("/api/v1/projects", get(catalog::handle_list_projects))
        .route("/api/v1/projects/:id", get(catalog::handle_get_project))
        .route("/api/v1/contact", post(contact::handle_contact_api))
        // Static downloads
        .nest_service("/resume", ServeDir::new(static_dir.join(RESUME_DIR)))
        .nest_service("/images", ServeDir::new(static_dir.join(IMAGES_DIR)))
        .fallback(pages::handle_not_found)
        .with_state(state)
}
