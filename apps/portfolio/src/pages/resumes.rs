use chrono::Utc;

use crate::config::Config;
use crate::models::ResumeVariant;

use super::layout::{self, escape, PageMeta};

const SELECTION_GUIDE: [(&str, [&str; 3]); 3] = [
    (
        "Choose Cybersecurity Resume for:",
        [
            "Security analyst or engineer positions",
            "Compliance and risk management roles",
            "Incident response team positions",
        ],
    ),
    (
        "Choose System Admin Resume for:",
        [
            "Infrastructure and DevOps roles",
            "Cloud architecture positions",
            "Automation and scripting jobs",
        ],
    ),
    (
        "Choose Prompt Engineer Resume for:",
        [
            "AI/ML engineering positions",
            "Conversational AI development",
            "AI integration and automation roles",
        ],
    ),
];

fn resume_card(resume: &ResumeVariant) -> String {
    let recommended = if resume.featured {
        "<span class=\"badge featured\">Recommended</span>\n"
    } else {
        ""
    };
    let highlights: String = resume
        .highlights
        .iter()
        .map(|h| format!("<li>{}</li>\n", escape(h)))
        .collect();
    let certifications: String = resume
        .certifications
        .iter()
        .map(|c| format!("<span class=\"badge outline\">{}</span> ", escape(c)))
        .collect();

    format!(
        "<article class=\"card resume\" id=\"{id}\">\n{recommended}\
         <h3>{title}</h3>\n<p>{description}</p>\n\
         <h4>Key Highlights:</h4>\n<ul>\n{highlights}</ul>\n\
         <h4>Certifications:</h4>\n<div>{certifications}</div>\n\
         <a class=\"button\" href=\"{href}\" target=\"_blank\">Download Resume</a>\n\
         </article>\n",
        id = escape(&resume.id),
        title = escape(&resume.title),
        description = escape(&resume.description),
        href = escape(&resume.download_url),
    )
}

/// GET /resumes
pub fn render(config: &Config, resumes: &[ResumeVariant]) -> String {
    let cards: String = resumes.iter().map(resume_card).collect();
    let guide: String = SELECTION_GUIDE
        .iter()
        .map(|(heading, items)| {
            let items: String = items.iter().map(|i| format!("<li>{i}</li>")).collect();
            format!("<h4>{heading}</h4>\n<ul>{items}</ul>\n")
        })
        .collect();

    let body = format!(
        "<section class=\"intro\">\n<h1>Resume Downloads</h1>\n\
         <p>Choose the resume that best matches your needs. Each version is tailored to highlight \
         specific expertise and achievements in cybersecurity, system administration, or prompt engineering.</p>\n\
         <span class=\"badge\">PDF Format &bull; Updated {updated}</span>\n</section>\n\
         <section class=\"grid\">\n{cards}</section>\n\
         <section class=\"grid\">\n\
         <div class=\"card\">\n<h3>Resume Selection Guide</h3>\n{guide}</div>\n\
         <div class=\"card\">\n<h3>Need a Custom Resume?</h3>\n\
         <p>Looking for a resume tailored to a specific role or industry? I can create a customized \
         version that highlights the most relevant experience and skills for your opportunity.</p>\n\
         <p><a href=\"/contact\">Request Custom Resume</a> <a href=\"/projects\">View Portfolio Projects</a></p>\n\
         </div>\n</section>\n",
        updated = Utc::now().format("%B %Y"),
    );

    let meta = PageMeta::new(
        format!("Resumes | {}", config.site_owner),
        "Download a resume tailored to cybersecurity, system administration or prompt engineering.",
        "/resumes",
    );
    layout::render(config, &meta, &body)
}
