use crate::config::Config;
use crate::models::{Project, ResumeVariant};

use super::layout::{self, escape, PageMeta, TAGLINE};
use super::projects::project_card;

const FOCUS_AREAS: [&str; 4] = [
    "Network Security",
    "Cloud Infrastructure",
    "AI Automation",
    "Incident Response",
];

/// GET /
pub fn render(
    config: &Config,
    featured: &[&Project],
    resumes: &[ResumeVariant],
) -> String {
    let focus: String = FOCUS_AREAS
        .iter()
        .map(|area| format!("<span class=\"badge\">{area}</span> "))
        .collect();

    let booking = config
        .booking_url
        .as_deref()
        .map(|url| {
            format!(
                "<a class=\"button\" href=\"{}\" target=\"_blank\" rel=\"noreferrer\">Book 15-min Call</a>\n",
                escape(url)
            )
        })
        .unwrap_or_default();

    // A native disclosure stands in for the dropdown; it closes on navigation.
    let resume_items: String = resumes
        .iter()
        .map(|r| {
            format!(
                "<li><a href=\"{href}\" target=\"_blank\" rel=\"noreferrer\">\
                 <strong>{title}</strong><br><small>{description}</small></a></li>\n",
                href = escape(&r.download_url),
                title = escape(&r.title),
                description = escape(&r.description),
            )
        })
        .collect();

    let featured_section = if featured.is_empty() {
        String::new()
    } else {
        let cards: String = featured.iter().map(|p| project_card(p)).collect();
        format!(
            "<section class=\"featured\">\n<h2>Featured Projects</h2>\n\
             <div class=\"grid\">\n{cards}</div>\n\
             <p><a href=\"/projects\">View All Projects</a></p>\n</section>\n"
        )
    };

    let body = format!(
        "<section class=\"hero\">\n<h1>{owner}</h1>\n<p class=\"tagline\">{TAGLINE}</p>\n\
         <p>Securing digital infrastructure through innovative cybersecurity solutions, robust system \
         administration, and cutting-edge AI integration.</p>\n\
         <div class=\"focus\">{focus}</div>\n\
         <div class=\"actions\">\n<a class=\"button\" href=\"/projects\">View Projects</a>\n{booking}\
         <details class=\"resume-menu\">\n<summary>Download Resume</summary>\n<ul>\n{resume_items}</ul>\n</details>\n\
         </div>\n</section>\n{featured_section}",
        owner = escape(&config.site_owner),
    );

    let meta = PageMeta::new(
        format!("{} | Portfolio", config.site_owner),
        format!("Personal portfolio of {}", config.site_owner),
        "/",
    );
    layout::render(config, &meta, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;

    #[test]
    fn test_home_lists_featured_projects_and_resumes() {
        let store = ContentStore::builtin();
        let html = render(&Config::for_tests(), &store.featured_projects(), store.resumes());
        assert!(html.contains("<title>Sirisha Ganji | Portfolio</title>"));
        assert!(html.contains("Featured Projects"));
        assert!(html.contains("/projects/ai-research-assistant"));
        assert!(html.contains("href=\"/resume/sysadmin.pdf\""));
        assert!(!html.contains("Book 15-min Call"));
    }

    #[test]
    fn test_booking_link_when_configured() {
        let mut config = Config::for_tests();
        config.booking_url = Some("https://calendly.com/someone/15min".to_string());
        let html = render(&config, &[], &[]);
        assert!(html.contains("href=\"https://calendly.com/someone/15min\""));
        assert!(html.contains("Book 15-min Call"));
        assert!(!html.contains("Featured Projects"));
    }
}
