//! Project detail documents: optional front matter followed by a markdown body.

use serde::Deserialize;
use tracing::warn;

use crate::models::Project;

const WORDS_PER_MINUTE: usize = 200;
const DEFAULT_READING_TIME: &str = "5 min read";

/// Link overrides a detail document may declare in its front matter. Other
/// keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub repo: Option<String>,
    pub download: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailContent {
    pub front_matter: FrontMatter,
    /// Markdown source, rendered by `pages::markdown`.
    pub body: String,
    pub reading_time: String,
}

impl DetailContent {
    /// Splits `---` delimited front matter off the document and estimates reading time.
    pub fn parse(raw: &str) -> Self {
        let (front_matter, body) = split_front_matter(raw);
        Self {
            front_matter,
            reading_time: reading_time(body),
            body: body.to_string(),
        }
    }

    /// Stand-in used when a project has no readable detail document.
    pub fn placeholder(project: &Project) -> Self {
        Self {
            front_matter: FrontMatter::default(),
            body: format!("# {}\n\n{}", project.title, project.summary),
            reading_time: DEFAULT_READING_TIME.to_string(),
        }
    }
}

/// Plain file names only: no separators, no parent references, no hidden files.
pub fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\'])
        && !name.contains("..")
}

/// `---` on the first line opens the block and the next line that is exactly
/// `---` closes it. Without a closing fence the whole document is body.
fn split_front_matter(raw: &str) -> (FrontMatter, &str) {
    let Some(rest) = raw.strip_prefix("---").and_then(strip_line_break) else {
        return (FrontMatter::default(), raw);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let body = rest[offset + line.len()..].trim_start_matches(['\r', '\n']);
            return (parse_front_matter(&rest[..offset]), body);
        }
        offset += line.len();
    }
    (FrontMatter::default(), raw)
}

fn strip_line_break(s: &str) -> Option<&str> {
    s.strip_prefix("\r\n").or_else(|| s.strip_prefix('\n'))
}

fn parse_front_matter(yaml: &str) -> FrontMatter {
    if yaml.trim().is_empty() {
        return FrontMatter::default();
    }
    match serde_yaml::from_str::<Option<FrontMatter>>(yaml) {
        Ok(front_matter) => {
            let front_matter = front_matter.unwrap_or_default();
            FrontMatter {
                repo: non_blank(front_matter.repo),
                download: non_blank(front_matter.download),
            }
        }
        Err(e) => {
            warn!("Ignoring malformed front matter: {e}");
            FrontMatter::default()
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn reading_time(body: &str) -> String {
    let words = body.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}
