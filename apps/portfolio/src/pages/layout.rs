//! Shared page shell: document head with social meta tags, header navigation
//! and footer.

use chrono::{Datelike, Utc};

use crate::config::Config;

pub const TAGLINE: &str = "Cybersecurity Analyst · System Administrator · Prompt Engineer";

const NAVIGATION: [(&str, &str); 5] = [
    ("Home", "/"),
    ("About", "/about"),
    ("Projects", "/projects"),
    ("Resumes", "/resumes"),
    ("Contact", "/contact"),
];

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("GitHub", "https://github.com/sirishaganji"),
    ("LinkedIn", "https://linkedin.com/in/sirishaganji"),
    ("Twitter", "https://twitter.com/sirishaganji"),
];

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;color:#1e293b;background:#fff}\
a{color:#0891b2}\
.container{max-width:72rem;margin:0 auto;padding:0 1rem}\
header.site{position:sticky;top:0;background:#ffffffee;border-bottom:1px solid #e2e8f0}\
header.site .container{display:flex;align-items:center;justify-content:space-between;height:4rem}\
nav a{margin-right:1.5rem;text-decoration:none;color:#64748b}\
nav a.active{color:#0891b2;font-weight:600}\
main{padding:4rem 0}\
.badge{display:inline-block;padding:.1rem .6rem;border-radius:999px;font-size:.8rem;background:#f1f5f9}\
.cat-cyber{background:#06b6d4;color:#fff}\
.cat-sysadmin{background:#10b981;color:#fff}\
.cat-prompt{background:#a855f7;color:#fff}\
.card{border:1px solid #e2e8f0;border-radius:.75rem;padding:1.5rem;margin-bottom:1.5rem}\
.grid{display:grid;gap:2rem;grid-template-columns:repeat(auto-fill,minmax(18rem,1fr))}\
.notice{padding:1rem;border-radius:.5rem}\
.notice.success{background:#ecfdf5;color:#047857}\
.notice.error{background:#fef2f2;color:#b91c1c}\
footer.site{border-top:1px solid #e2e8f0;padding:2rem 0;color:#64748b}";

/// Head metadata of one page.
#[derive(Debug, Clone)]
pub struct PageMeta {
    /// Full document title.
    pub title: String,
    pub description: String,
    /// Navigation entry to highlight, e.g. `/projects`.
    pub active: &'static str,
    /// Social preview image path; pages without one get a summary card.
    pub og_image: Option<String>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>, active: &'static str) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            active,
            og_image: None,
        }
    }

    pub fn with_og_image(mut self, path: String) -> Self {
        self.og_image = Some(path);
        self
    }
}

/// Escapes text for element content and double-quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wraps `body` in the full document.
pub fn render(config: &Config, meta: &PageMeta, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n{head}</head>\n<body>\n{header}<main>\n<div class=\"container\">\n{body}</div>\n</main>\n{footer}</body>\n</html>\n",
        head = head(meta),
        header = header(config, meta.active),
        footer = footer(config),
    )
}

fn head(meta: &PageMeta) -> String {
    let title = escape(&meta.title);
    let description = escape(&meta.description);
    let mut head = format!(
        "<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <meta name=\"description\" content=\"{description}\">\n\
         <meta property=\"og:title\" content=\"{title}\">\n\
         <meta property=\"og:description\" content=\"{description}\">\n\
         <meta property=\"og:type\" content=\"website\">\n\
         <meta name=\"twitter:title\" content=\"{title}\">\n\
         <meta name=\"twitter:description\" content=\"{description}\">\n"
    );

    match &meta.og_image {
        Some(image) => {
            let image = escape(image);
            head.push_str(&format!(
                "<meta property=\"og:image\" content=\"{image}\">\n\
                 <meta property=\"og:image:width\" content=\"1200\">\n\
                 <meta property=\"og:image:height\" content=\"630\">\n\
                 <meta name=\"twitter:card\" content=\"summary_large_image\">\n\
                 <meta name=\"twitter:image\" content=\"{image}\">\n"
            ));
        }
        None => head.push_str("<meta name=\"twitter:card\" content=\"summary\">\n"),
    }

    head.push_str(&format!("<style>{STYLE}</style>\n"));
    head
}

fn header(config: &Config, active: &str) -> String {
    let nav: String = NAVIGATION
        .iter()
        .map(|(name, href)| {
            let class = if *href == active { " class=\"active\"" } else { "" };
            format!("<a href=\"{href}\"{class}>{name}</a>")
        })
        .collect();

    format!(
        "<header class=\"site\">\n<div class=\"container\">\n\
         <a href=\"/\" class=\"brand\"><strong>{owner}</strong></a>\n\
         <nav>{nav}</nav>\n\
         <a href=\"/contact\" class=\"button\">Get In Touch</a>\n\
         </div>\n</header>\n",
        owner = escape(&config.site_owner),
    )
}

fn footer(config: &Config) -> String {
    let owner = escape(&config.site_owner);
    let mut social: String = SOCIAL_LINKS
        .iter()
        .map(|(label, href)| format!("<a href=\"{href}\" aria-label=\"{label}\">{label}</a> "))
        .collect();
    social.push_str(&format!(
        "<a href=\"mailto:{email}\" aria-label=\"Email\">Email</a>",
        email = escape(&config.contact_email),
    ));

    format!(
        "<footer class=\"site\">\n<div class=\"container\">\n\
         <h3>{owner}</h3>\n<p>{TAGLINE}</p>\n<p class=\"social\">{social}</p>\n\
         <p>&copy; {year} {owner}. All rights reserved.</p>\n\
         </div>\n</footer>\n",
        year = Utc::now().year(),
    )
}
