use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Project categories shown as filter buttons, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Cybersecurity,
    SysAdmin,
    #[serde(rename = "Prompt Eng")]
    PromptEng,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Cybersecurity, Category::SysAdmin, Category::PromptEng];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Cybersecurity => "Cybersecurity",
            Category::SysAdmin => "SysAdmin",
            Category::PromptEng => "Prompt Eng",
        }
    }

    /// CSS modifier used by the badge styles.
    pub fn css_class(&self) -> &'static str {
        match self {
            Category::Cybersecurity => "cat-cyber",
            Category::SysAdmin => "cat-sysadmin",
            Category::PromptEng => "cat-prompt",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown project category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(trimmed.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Date range
// ────────────────────────────────────────────────────────────────────────────

/// A project's active period, serialized as `"YYYY-MM-DD to YYYY-MM-DD"`.
///
/// `end = None` means ongoing: written as `"YYYY-MM-DD to present"`, and a
/// bare `"YYYY-MM-DD"` parses the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date range '{input}': {reason}")]
pub struct DateRangeError {
    pub input: String,
    pub reason: String,
}

const RANGE_SEPARATOR: &str = " to ";
const DATE_FORMAT: &str = "%Y-%m-%d";

impl DateRange {
    pub fn parse(input: &str) -> Result<Self, DateRangeError> {
        let err = |reason: String| DateRangeError {
            input: input.to_string(),
            reason,
        };
        let (start_raw, end_raw) = match input.split_once(RANGE_SEPARATOR) {
            Some((s, e)) => (s.trim(), Some(e.trim())),
            None => (input.trim(), None),
        };

        let start = NaiveDate::parse_from_str(start_raw, DATE_FORMAT)
            .map_err(|e| err(format!("start date: {e}")))?;

        let end = match end_raw {
            None => None,
            Some(e) if e.eq_ignore_ascii_case("present") => None,
            Some(e) => Some(
                NaiveDate::parse_from_str(e, DATE_FORMAT)
                    .map_err(|x| err(format!("end date: {x}")))?,
            ),
        };

        if let Some(end) = end {
            if end < start {
                return Err(err("end date precedes start date".to_string()));
            }
        }

        Ok(DateRange { start, end })
    }

    /// "May 2024 - July 2024", or "May 2024 - Present" when ongoing.
    pub fn display_long(&self) -> String {
        self.display_with("%B %Y")
    }

    /// "May 2024 - Jul 2024", as shown on project cards.
    pub fn display_short(&self) -> String {
        self.display_with("%b %Y")
    }

    fn display_with(&self, month_format: &str) -> String {
        let end = self
            .end
            .map(|d| d.format(month_format).to_string())
            .unwrap_or_else(|| "Present".to_string());
        format!("{} - {}", self.start.format(month_format), end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(
                f,
                "{}{}{}",
                self.start.format(DATE_FORMAT),
                RANGE_SEPARATOR,
                end.format(DATE_FORMAT)
            ),
            None => write!(f, "{}{}present", self.start.format(DATE_FORMAT), RANGE_SEPARATOR),
        }
    }
}

impl TryFrom<String> for DateRange {
    type Error = DateRangeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DateRange::parse(&value)
    }
}

impl From<DateRange> for String {
    fn from(value: DateRange) -> Self {
        value.to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Project record
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub role: String,
    pub dates: DateRange,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default, alias = "githubUrl", skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, alias = "downloadUrl", skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default, alias = "coverImage", skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, alias = "detailFile", skip_serializing_if = "Option::is_none")]
    pub detail_file: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Path of the generated social preview for this project.
    pub fn og_image_path(&self) -> String {
        format!(
            "/api/og?title={}&tags={}&category={}",
            urlencoding::encode(&self.title),
            urlencoding::encode(&self.tags.join(", ")),
            urlencoding::encode(self.category.label()),
        )
    }

    /// Case-insensitive substring match against title, summary, tags and tech.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.summary.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
            || self.tech.iter().any(|t| t.to_lowercase().contains(needle))
    }
}
