use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One position on the About page timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    /// Role title.
    pub title: String,
    #[serde(alias = "organization")]
    pub company: String,
    #[serde(default)]
    pub location: String,
    pub start_date: NaiveDate,
    /// `None` while the position is ongoing.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl Experience {
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }

    /// "June 2021 – Present"
    pub fn period_label(&self) -> String {
        let end = self
            .end_date
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| "Present".to_string());
        format!("{} – {}", self.start_date.format("%B %Y"), end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ongoing_position() {
        let exp: Experience = serde_json::from_str(
            r#"{
                "id": "soc",
                "title": "Security Analyst",
                "organization": "Acme",
                "start_date": "2022-06-01"
            }"#,
        )
        .unwrap();
        assert!(exp.is_current());
        assert_eq!(exp.company, "Acme");
        assert_eq!(exp.period_label(), "June 2022 – Present");
        assert!(exp.achievements.is_empty());
    }

    #[test]
    fn test_closed_position_label() {
        let exp: Experience = serde_json::from_str(
            r#"{
                "id": "helpdesk",
                "title": "IT Support",
                "company": "Initech",
                "location": "Austin, TX",
                "start_date": "2019-02-01",
                "end_date": "2021-05-31",
                "description": "Tier 2 support",
                "achievements": ["Cut ticket backlog by 40%"]
            }"#,
        )
        .unwrap();
        assert!(!exp.is_current());
        assert_eq!(exp.period_label(), "February 2019 – May 2021");
    }
}
