use crate::config::Config;
use crate::models::Experience;

use super::layout::{self, escape, PageMeta, TAGLINE};

const BIO: [&str; 3] = [
    "With over 4 years of experience in cybersecurity and system administration, I specialize in \
     building secure, scalable infrastructure solutions while leveraging cutting-edge AI technologies \
     to enhance operational efficiency.",
    "My journey began in IT support, where I developed a deep understanding of system fundamentals. \
     This foundation led me to specialize in cybersecurity, where I now lead incident response teams \
     and design security architectures for enterprise environments.",
    "Recently, I've expanded into prompt engineering and AI integration, developing intelligent \
     automation solutions that bridge the gap between traditional security practices and modern AI \
     capabilities.",
];

const SPECIALTIES: [&str; 5] = [
    "Security Architecture",
    "Cloud Security",
    "DevSecOps",
    "AI Automation",
    "Incident Response",
];

const SKILLS: [(&str, &str); 6] = [
    ("Network Security", "Expert"),
    ("Cloud Infrastructure", "Advanced"),
    ("AI Integration", "Advanced"),
    ("Incident Response", "Expert"),
    ("Team Leadership", "Advanced"),
    ("Compliance", "Expert"),
];

const CERTIFICATIONS: [&str; 5] = [
    "CISSP - Certified Information Systems Security Professional",
    "AWS Solutions Architect - Professional",
    "CompTIA Security+",
    "Certified Ethical Hacker (CEH)",
    "ITIL Foundation",
];

fn timeline_entry(entry: &Experience) -> String {
    let badge = if entry.is_current() { "Current" } else { "Previous" };
    let achievements = if entry.achievements.is_empty() {
        String::new()
    } else {
        let items: String = entry
            .achievements
            .iter()
            .map(|a| format!("<li>{}</li>\n", escape(a)))
            .collect();
        format!("<h4>Key Achievements:</h4>\n<ul>\n{items}</ul>\n")
    };

    format!(
        "<article class=\"card timeline-entry\">\n\
         <span class=\"badge\">{badge}</span>\n\
         <h3>{title}</h3>\n<p class=\"company\">{company}</p>\n\
         <p class=\"location\">{location}</p>\n<p class=\"period\">{period}</p>\n\
         <p>{description}</p>\n{achievements}</article>\n",
        title = escape(&entry.title),
        company = escape(&entry.company),
        location = escape(&entry.location),
        period = escape(&entry.period_label()),
        description = escape(&entry.description),
    )
}

/// GET /about
pub fn render(config: &Config, experience: &[Experience]) -> String {
    let owner = escape(&config.site_owner);
    let bio: String = BIO.iter().map(|p| format!("<p>{p}</p>\n")).collect();
    let specialties: String = SPECIALTIES
        .iter()
        .map(|s| format!("<span class=\"badge\">{s}</span> "))
        .collect();
    let skills: String = SKILLS
        .iter()
        .map(|(name, level)| {
            format!("<div class=\"card skill\"><h3>{name}</h3><p>{level}</p></div>\n")
        })
        .collect();
    let certifications: String = CERTIFICATIONS
        .iter()
        .map(|c| format!("<li>{c}</li>\n"))
        .collect();

    let timeline = if experience.is_empty() {
        "<p class=\"empty\">Experience details coming soon.</p>\n".to_string()
    } else {
        experience.iter().map(timeline_entry).collect()
    };

    let body = format!(
        "<section class=\"about\">\n<h1>About {owner}</h1>\n<p class=\"tagline\">{TAGLINE}</p>\n\
         {bio}<div>{specialties}</div>\n</section>\n\
         <section>\n<h2>Core Competencies</h2>\n<div class=\"grid\">\n{skills}</div>\n</section>\n\
         <section>\n<h2>Certifications</h2>\n<ul class=\"card\">\n{certifications}</ul>\n</section>\n\
         <section>\n<h2>Professional Experience</h2>\n<div class=\"timeline\">\n{timeline}</div>\n</section>\n"
    );

    let meta = PageMeta::new(
        format!("About | {}", config.site_owner),
        format!("Background, skills and experience of {}", config.site_owner),
        "/about",
    );
    layout::render(config, &meta, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(end: Option<NaiveDate>) -> Experience {
        Experience {
            id: "soc".to_string(),
            title: "Security Analyst".to_string(),
            company: "Acme <Corp>".to_string(),
            location: "Remote".to_string(),
            start_date: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
            end_date: end,
            description: "Monitored the SIEM.".to_string(),
            achievements: vec!["Cut triage time by 40%".to_string()],
        }
    }

    #[test]
    fn test_empty_experience_shows_placeholder() {
        let html = render(&Config::for_tests(), &[]);
        assert!(html.contains("Experience details coming soon."));
        assert!(html.contains("CompTIA Security+"));
    }

    #[test]
    fn test_timeline_entries() {
        let html = render(
            &Config::for_tests(),
            &[entry(None), entry(NaiveDate::from_ymd_opt(2023, 1, 31))],
        );
        assert!(html.contains("June 2022 – Present"));
        assert!(html.contains("June 2022 – January 2023"));
        assert!(html.contains("<span class=\"badge\">Current</span>"));
        assert!(html.contains("<span class=\"badge\">Previous</span>"));
        assert!(html.contains("Acme &lt;Corp&gt;"));
        assert!(html.contains("Key Achievements:"));
        assert!(!html.contains("coming soon"));
    }
}
