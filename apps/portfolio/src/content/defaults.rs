//! Built-in dataset used when the content directory does not provide its own files.

use crate::models::{Category, DateRange, Project, ResumeVariant};

fn range(raw: &str) -> DateRange {
    // Literals below are checked by `test_builtin_dataset_is_valid`.
    DateRange::parse(raw).unwrap_or_else(|e| panic!("built-in date range: {e}"))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "threat-log-analyzer".to_string(),
            title: "Threat Log Analyzer (AI‑Powered Tagging)".to_string(),
            summary: "Python tool that classifies security logs using lightweight AI tagging to surface potential threats and patterns.".to_string(),
            role: "Cybersecurity Engineer".to_string(),
            dates: range("2024-05-01 to 2024-07-30"),
            category: Category::Cybersecurity,
            tags: strings(&["Log Analysis", "Threat Intelligence", "Automation"]),
            tech: strings(&["Python", "Pandas", "LLM", "Regex"]),
            github_url: Some("https://github.com/SirishaGanji/sentiment-project".to_string()),
            download_url: None,
            cover_image: Some("/images/projects/threat-log-analyzer.png".to_string()),
            detail_file: Some("threat-log-analyzer.md".to_string()),
            featured: true,
        },
        Project {
            id: "sentiment-analyzer-app".to_string(),
            title: "Sentiment Analyzer App".to_string(),
            summary: "Flask app using VADER to analyze CSV text, generate charts, and present insights with simple dashboards.".to_string(),
            role: "Python Developer".to_string(),
            dates: range("2024-03-10 to 2024-04-20"),
            category: Category::PromptEng,
            tags: strings(&["NLP", "Visualization", "CSV"]),
            tech: strings(&["Flask", "Python", "VADER", "Matplotlib"]),
            github_url: Some("https://github.com/SirishaGanji/sentiment-analyzer".to_string()),
            download_url: None,
            cover_image: Some("/images/projects/sentiment-analyzer.png".to_string()),
            detail_file: Some("sentiment-analyzer.md".to_string()),
            featured: true,
        },
        Project {
            id: "ai-research-assistant".to_string(),
            title: "AI Research Assistant".to_string(),
            summary: "Agent-style assistant to help research topics, summarize sources, and suggest next actions.".to_string(),
            role: "Prompt Engineer".to_string(),
            dates: range("2024-06-01 to 2024-08-15"),
            category: Category::PromptEng,
            tags: strings(&["Agents", "Summarization", "Automation"]),
            tech: strings(&["Python", "LangChain", "OpenAI"]),
            github_url: Some("https://github.com/SirishaGanji/ai-agent-simulator".to_string()),
            download_url: None,
            cover_image: Some("/images/projects/ai-research-assistant.png".to_string()),
            detail_file: Some("ai-research-assistant.md".to_string()),
            featured: true,
        },
    ]
}

pub fn resumes() -> Vec<ResumeVariant> {
    vec![
        ResumeVariant {
            id: "cybersecurity".to_string(),
            title: "Cybersecurity Analyst Resume".to_string(),
            description: "Specialized resume highlighting security expertise, incident response experience, and compliance knowledge.".to_string(),
            download_url: "/resume/cybersecurity.pdf".to_string(),
            highlights: strings(&[
                "Security Architecture & Design",
                "Incident Response & Forensics",
                "Vulnerability Assessment",
                "Compliance (SOC 2, ISO 27001)",
                "Risk Management",
            ]),
            certifications: strings(&["CISSP", "CompTIA Security+", "CEH"]),
            featured: true,
        },
        ResumeVariant {
            id: "sysadmin".to_string(),
            title: "System Administrator Resume".to_string(),
            description: "Comprehensive resume showcasing infrastructure management, automation, and DevOps capabilities.".to_string(),
            download_url: "/resume/sysadmin.pdf".to_string(),
            highlights: strings(&[
                "Cloud Infrastructure (AWS)",
                "Infrastructure as Code",
                "Automation & Scripting",
                "Container Orchestration",
                "Monitoring & Logging",
            ]),
            certifications: strings(&["AWS Solutions Architect", "ITIL Foundation"]),
            featured: false,
        },
        ResumeVariant {
            id: "prompt-engineer".to_string(),
            title: "Prompt Engineer Resume".to_string(),
            description: "Cutting-edge resume focusing on AI integration, prompt engineering, and intelligent automation solutions.".to_string(),
            download_url: "/resume/prompt-engineer.pdf".to_string(),
            highlights: strings(&[
                "Large Language Models",
                "Prompt Design & Optimization",
                "AI Integration & APIs",
                "Conversational AI Systems",
                "Machine Learning Workflows",
            ]),
            certifications: strings(&["AI/ML Specialization", "OpenAI API Certified"]),
            featured: false,
        },
    ]
}
