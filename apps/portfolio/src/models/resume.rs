use serde::{Deserialize, Serialize};

/// A downloadable resume tailored to one specialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeVariant {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(alias = "downloadUrl")]
    pub download_url: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}
