//! Static site content: projects, experience and resume variants.
//!
//! Loaded once at startup from `CONTENT_DIR` and shared read-only behind an `Arc`.
//! Each list falls back to the built-in dataset when its file is absent.

pub mod defaults;
pub mod detail;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{Experience, Project, ResumeVariant};

pub use detail::DetailContent;

const PROJECTS_FILE: &str = "projects.json";
const EXPERIENCE_FILE: &str = "experience.json";
const RESUMES_FILE: &str = "resumes.json";
/// Subdirectory holding per-project detail documents.
const DETAIL_DIR: &str = "projects";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("experience '{id}' ends before it starts")]
    InvertedExperience { id: String },
}

#[derive(Debug, Clone)]
pub struct ContentStore {
    projects: Vec<Project>,
    experience: Vec<Experience>,
    resumes: Vec<ResumeVariant>,
    content_dir: PathBuf,
}

impl ContentStore {
    /// Reads the content directory. Missing files fall back to built-in data;
    /// present-but-broken files are errors.
    pub async fn load(content_dir: &Path) -> Result<Self, ContentError> {
        let projects = load_list(content_dir, PROJECTS_FILE, defaults::projects).await?;
        let experience = load_list(content_dir, EXPERIENCE_FILE, Vec::new).await?;
        let resumes = load_list(content_dir, RESUMES_FILE, defaults::resumes).await?;

        let store = Self::from_parts(projects, experience, resumes, content_dir.to_path_buf())?;
        info!(
            "Content loaded: {} projects, {} experience entries, {} resumes",
            store.projects.len(),
            store.experience.len(),
            store.resumes.len()
        );
        Ok(store)
    }

    /// Builds a store from in-memory lists, enforcing unique ids per list and
    /// experience that does not end before it starts.
    pub fn from_parts(
        projects: Vec<Project>,
        experience: Vec<Experience>,
        resumes: Vec<ResumeVariant>,
        content_dir: PathBuf,
    ) -> Result<Self, ContentError> {
        ensure_unique("project", projects.iter().map(|p| p.id.as_str()))?;
        ensure_unique("experience", experience.iter().map(|e| e.id.as_str()))?;
        ensure_unique("resume", resumes.iter().map(|r| r.id.as_str()))?;
        if let Some(inverted) = experience
            .iter()
            .find(|e| e.end_date.is_some_and(|end| end < e.start_date))
        {
            return Err(ContentError::InvertedExperience {
                id: inverted.id.clone(),
            });
        }

        Ok(Self {
            projects,
            experience,
            resumes,
            content_dir,
        })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Featured projects in authored order.
    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    pub fn experience(&self) -> &[Experience] {
        &self.experience
    }

    pub fn resumes(&self) -> &[ResumeVariant] {
        &self.resumes
    }

    /// Detail document for a project; never fails, falls back to a placeholder.
    pub async fn detail(&self, project: &Project) -> DetailContent {
        let Some(file) = project.detail_file.as_deref() else {
            return DetailContent::placeholder(project);
        };
        if !detail::is_safe_file_name(file) {
            warn!(project = %project.id, "Rejected detail file name '{file}'");
            return DetailContent::placeholder(project);
        }

        let path = self.content_dir.join(DETAIL_DIR).join(file);
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => DetailContent::parse(&raw),
            Err(e) => {
                warn!(project = %project.id, "Detail file {} unavailable: {e}", path.display());
                DetailContent::placeholder(project)
            }
        }
    }
}

async fn load_list<T, F>(dir: &Path, file: &str, fallback: F) -> Result<Vec<T>, ContentError>
where
    T: DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    let path = dir.join(file);
    let raw = match tokio::fs::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("{} not found, using built-in content", path.display());
            return Ok(fallback());
        }
        Err(source) => return Err(ContentError::Io { path, source }),
    };
    serde_json::from_str(&raw).map_err(|source| ContentError::Parse { path, source })
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
impl ContentStore {
    pub fn builtin() -> Self {
        Self::from_parts(
            defaults::projects(),
            Vec::new(),
            defaults::resumes(),
            PathBuf::from("does-not-exist"),
        )
        .expect("built-in content is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECTS_JSON: &str = r#"[
        {
            "id": "hardening",
            "title": "Linux Hardening Playbooks",
            "summary": "Ansible roles for CIS benchmarks.",
            "role": "SysAdmin",
            "dates": "2023-01-01 to 2023-03-01",
            "category": "SysAdmin",
            "tags": ["Ansible"],
            "tech": ["Bash"],
            "detailFile": "hardening.md"
        }
    ]"#;

    #[test]
    fn test_builtin_dataset_is_valid() {
        let store = ContentStore::builtin();
        assert_eq!(store.projects().len(), 3);
        assert_eq!(store.resumes().len(), 3);
        assert!(store.experience().is_empty());
        assert_eq!(store.featured_projects().len(), 3);
    }

    #[tokio::test]
    async fn test_load_falls_back_when_files_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::load(dir.path()).await.unwrap();
        assert_eq!(store.projects().len(), defaults::projects().len());
        assert_eq!(store.resumes().len(), defaults::resumes().len());
    }

    #[tokio::test]
    async fn test_load_reads_project_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PROJECTS_FILE), PROJECTS_JSON).unwrap();

        let store = ContentStore::load(dir.path()).await.unwrap();
        assert_eq!(store.projects().len(), 1);
        let project = store.project("hardening").unwrap();
        assert_eq!(project.detail_file.as_deref(), Some("hardening.md"));
        assert!(!project.featured);
        assert!(store.project("missing").is_none());
    }

    #[tokio::test]
    async fn test_load_rejects_unknown_category() {
        let dir = tempfile::tempdir().unwrap();
        let broken = PROJECTS_JSON.replace("\"category\": \"SysAdmin\"", "\"category\": \"Gardening\"");
        std::fs::write(dir.path().join(PROJECTS_FILE), broken).unwrap();

        let err = ContentStore::load(dir.path()).await.unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut projects = defaults::projects();
        projects.push(projects[0].clone());
        let err = ContentStore::from_parts(projects, Vec::new(), Vec::new(), PathBuf::new())
            .unwrap_err();
        match err {
            ContentError::DuplicateId { kind, id } => {
                assert_eq!(kind, "project");
                assert_eq!(id, "threat-log-analyzer");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_rejects_inverted_experience() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(EXPERIENCE_FILE),
            r#"[{
                "id": "helpdesk",
                "title": "IT Support",
                "company": "Initech",
                "start_date": "2021-05-01",
                "end_date": "2019-02-01"
            }]"#,
        )
        .unwrap();

        let err = ContentStore::load(dir.path()).await.unwrap_err();
        match err {
            ContentError::InvertedExperience { id } => assert_eq!(id, "helpdesk"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_detail_reads_file_and_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PROJECTS_FILE), PROJECTS_JSON).unwrap();
        std::fs::create_dir(dir.path().join(DETAIL_DIR)).unwrap();
        std::fs::write(
            dir.path().join(DETAIL_DIR).join("hardening.md"),
            "---\nrepo: https://example.com/repo\n---\n# Overview\n\nRoles for every host.\n",
        )
        .unwrap();

        let store = ContentStore::load(dir.path()).await.unwrap();
        let project = store.project("hardening").unwrap().clone();
        let detail = store.detail(&project).await;
        assert_eq!(detail.front_matter.repo.as_deref(), Some("https://example.com/repo"));
        assert!(detail.body.contains("Roles for every host."));

        let mut missing = project.clone();
        missing.detail_file = Some("nope.md".to_string());
        let fallback = store.detail(&missing).await;
        assert!(fallback.body.starts_with("# Linux Hardening Playbooks"));
        assert_eq!(fallback.reading_time, "5 min read");
    }

    #[tokio::test]
    async fn test_detail_rejects_path_traversal() {
        let store = ContentStore::builtin();
        let mut project = store.projects()[0].clone();
        project.detail_file = Some("../../etc/passwd".to_string());
        let detail = store.detail(&project).await;
        assert!(detail.body.contains(&project.summary));
    }
}
