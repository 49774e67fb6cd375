//! Server-rendered HTML pages.

pub mod about;
pub mod contact;
pub mod handlers;
pub mod home;
pub mod layout;
pub mod markdown;
pub mod projects;
pub mod resumes;

use crate::config::Config;

use layout::PageMeta;

/// Any path without a route.
pub fn render_not_found(config: &Config) -> String {
    let body = "<section class=\"card not-found\">\n<h1>Page Not Found</h1>\n\
                <p>The page you're looking for doesn't exist.</p>\n\
                <p><a href=\"/\">Go Home</a> <a href=\"/projects\">View Projects</a></p>\n\
                </section>\n";
    let meta = PageMeta::new(
        format!("Not Found | {}", config.site_owner),
        "The requested page does not exist.",
        "",
    );
    layout::render(config, &meta, body)
}
