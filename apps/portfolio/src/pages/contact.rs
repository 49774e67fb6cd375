use crate::config::Config;
use crate::contact::{ContactDraft, SubmitStatus};

use super::layout::{self, escape, PageMeta};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again or email me directly.";

const HELP_AREAS: [(&str, [&str; 3]); 3] = [
    (
        "Cybersecurity",
        [
            "Security architecture and design",
            "Incident response and forensics",
            "Compliance and risk assessment",
        ],
    ),
    (
        "System Administration",
        [
            "Cloud infrastructure setup",
            "DevOps and automation",
            "Performance optimization",
        ],
    ),
    (
        "AI Integration",
        [
            "Prompt engineering and optimization",
            "AI system security",
            "Intelligent automation",
        ],
    ),
];

/// State of the contact form for one render.
#[derive(Debug, Clone, Default)]
pub struct ContactView {
    pub draft: ContactDraft,
    pub status: SubmitStatus,
    /// Validation message shown above the form.
    pub notice: Option<String>,
}

fn status_message(view: &ContactView) -> String {
    if let Some(notice) = &view.notice {
        return format!("<div class=\"notice error\">{}</div>\n", escape(notice));
    }
    match view.status {
        SubmitStatus::Idle => String::new(),
        SubmitStatus::Success => format!("<div class=\"notice success\">{SUCCESS_MESSAGE}</div>\n"),
        SubmitStatus::Error => format!("<div class=\"notice error\">{FAILURE_MESSAGE}</div>\n"),
    }
}

/// GET and POST /contact
pub fn render(config: &Config, view: &ContactView) -> String {
    let help: String = HELP_AREAS
        .iter()
        .map(|(area, items)| {
            let items: String = items.iter().map(|i| format!("<li>{i}</li>")).collect();
            format!("<div><span class=\"badge\">{area}</span>\n<ul>{items}</ul></div>\n")
        })
        .collect();

    let body = format!(
        "<section class=\"intro\">\n<h1>Get In Touch</h1>\n\
         <p>Ready to discuss your cybersecurity, infrastructure, or AI projects? I'd love to hear \
         from you and explore how we can work together.</p>\n</section>\n\
         <div class=\"grid\">\n\
         <section class=\"card\">\n<h2>Send a Message</h2>\n\
         <p>Fill out the form below and I'll get back to you within 24 hours.</p>\n\
         <form method=\"post\" action=\"/contact\">\n\
         <label for=\"name\">Name *</label>\n\
         <input id=\"name\" name=\"name\" type=\"text\" required value=\"{name}\" placeholder=\"Your full name\">\n\
         <label for=\"email\">Email *</label>\n\
         <input id=\"email\" name=\"email\" type=\"email\" required value=\"{email}\" placeholder=\"your.email@example.com\">\n\
         <label for=\"message\">Message *</label>\n\
         <textarea id=\"message\" name=\"message\" required rows=\"6\" placeholder=\"Tell me about your project or how I can help...\">{message}</textarea>\n\
         <div aria-live=\"polite\" aria-atomic=\"true\">\n{status}</div>\n\
         <button type=\"submit\">Send Message</button>\n</form>\n</section>\n\
         <aside>\n<section class=\"card\">\n<h3>Contact Information</h3>\n\
         <p>Prefer to reach out directly? Here are my contact details.</p>\n\
         <p><strong>Email</strong><br><a href=\"mailto:{recipient}\">{recipient}</a></p>\n</section>\n\
         <section class=\"card\">\n<h3>How I Can Help</h3>\n{help}</section>\n\
         <section class=\"card\">\n<h3>Quick Response</h3>\n\
         <p>I typically respond to messages within 24 hours during business days. For urgent matters, \
         please mention it in your message.</p>\n</section>\n</aside>\n</div>\n",
        name = escape(&view.draft.name),
        email = escape(&view.draft.email),
        message = escape(&view.draft.message),
        status = status_message(view),
        recipient = escape(&config.contact_email),
    );

    let meta = PageMeta::new(
        format!("Contact | {}", config.site_owner),
        format!("Get in touch with {}", config.site_owner),
        "/contact",
    );
    layout::render(config, &meta, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_form_is_empty() {
        let html = render(&Config::for_tests(), &ContactView::default());
        assert!(html.contains("value=\"\" placeholder=\"Your full name\""));
        assert!(!html.contains("class=\"notice"));
    }

    #[test]
    fn test_error_keeps_draft_escaped() {
        let view = ContactView {
            draft: ContactDraft {
                name: "Ada <Lovelace>".to_string(),
                email: "ada@example.com".to_string(),
                message: "</textarea><b>hi</b>".to_string(),
            },
            status: SubmitStatus::Error,
            notice: None,
        };
        let html = render(&Config::for_tests(), &view);
        assert!(html.contains("value=\"Ada &lt;Lovelace&gt;\""));
        assert!(html.contains("&lt;/textarea&gt;&lt;b&gt;hi&lt;/b&gt;</textarea>"));
        assert!(html.contains("Failed to send message. Please try again or email me directly."));
    }

    #[test]
    fn test_success_message() {
        let view = ContactView {
            status: SubmitStatus::Success,
            ..ContactView::default()
        };
        let html = render(&Config::for_tests(), &view);
        assert!(html.contains("Message sent successfully!"));
    }
}
