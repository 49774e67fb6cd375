//! Contact form submission: relay to the configured endpoint, or hand off to
//! the visitor's mail client when no endpoint is configured.

pub mod handlers;
pub mod relay;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub use relay::{ContactRelay, HttpContactRelay, RelayError};

/// The visitor's unsent message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Outcome indicator of the most recent submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed,
    /// No endpoint configured: the visitor's mail client takes over with this link.
    MailHandoff(String),
}

impl SubmitOutcome {
    pub fn status(&self) -> SubmitStatus {
        match self {
            SubmitOutcome::Delivered => SubmitStatus::Success,
            SubmitOutcome::Failed => SubmitStatus::Error,
            SubmitOutcome::MailHandoff(_) => SubmitStatus::Idle,
        }
    }
}

impl ContactDraft {
    /// Every field is required; the email must look like `local@domain`.
    pub fn validate(&self) -> Result<(), String> {
        let missing: Vec<&str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(format!("Required field(s) missing: {}", missing.join(", ")));
        }
        if !looks_like_email(self.email.trim()) {
            return Err("Please enter a valid email address".to_string());
        }
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// `mailto:` link pre-filled with subject and body, both percent-encoded.
pub fn mailto_link(recipient: &str, draft: &ContactDraft) -> String {
    let subject = format!("Contact from {}", draft.name);
    let body = format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        draft.name, draft.email, draft.message
    );
    format!(
        "mailto:{recipient}?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

/// Submission entry point shared by the form and JSON routes.
#[derive(Clone)]
pub struct ContactService {
    relay: Option<Arc<dyn ContactRelay>>,
    recipient: String,
}

impl ContactService {
    pub fn new(relay: Option<Arc<dyn ContactRelay>>, recipient: String) -> Self {
        Self { relay, recipient }
    }

    /// One attempt, no retry. Expects a validated draft.
    pub async fn submit(&self, draft: &ContactDraft) -> SubmitOutcome {
        let Some(relay) = &self.relay else {
            info!("No contact endpoint configured, handing off to mail client");
            return SubmitOutcome::MailHandoff(mailto_link(&self.recipient, draft));
        };

        match relay.deliver(draft).await {
            Ok(()) => {
                info!("Contact message delivered");
                SubmitOutcome::Delivered
            }
            Err(e) => {
                warn!("Contact message delivery failed: {e}");
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn draft() -> ContactDraft {
        ContactDraft {
            name: "Grace Hopper".to_string(),
            email: "grace@navy.mil".to_string(),
            message: "Found a bug & fixed it?".to_string(),
        }
    }

    struct CountingRelay(AtomicUsize);

    #[async_trait]
    impl ContactRelay for CountingRelay {
        async fn deliver(&self, _draft: &ContactDraft) -> Result<(), RelayError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_validate_requires_all_fields() {
        let empty = ContactDraft::default();
        let err = empty.validate().unwrap_err();
        assert!(err.contains("name, email, message"), "{err}");

        let mut blank_message = draft();
        blank_message.message = "  \n".to_string();
        assert!(blank_message.validate().unwrap_err().contains("message"));

        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed_email() {
        for email in ["grace", "@navy.mil", "grace@", "a@b@c", "gr ace@navy.mil"] {
            let mut d = draft();
            d.email = email.to_string();
            assert!(d.validate().is_err(), "{email} should be rejected");
        }
    }

    #[test]
    fn test_mailto_link_encodes_fields() {
        let link = mailto_link("owner@example.com", &draft());
        assert_eq!(
            link,
            "mailto:owner@example.com?subject=Contact%20from%20Grace%20Hopper\
             &body=Name%3A%20Grace%20Hopper%0AEmail%3A%20grace%40navy.mil%0A%0A\
             Message%3A%0AFound%20a%20bug%20%26%20fixed%20it%3F"
        );
    }

    #[tokio::test]
    async fn test_without_endpoint_hands_off_to_mail_client() {
        let service = ContactService::new(None, "owner@example.com".to_string());
        let outcome = service.submit(&draft()).await;

        let SubmitOutcome::MailHandoff(link) = &outcome else {
            panic!("expected mail handoff, got {outcome:?}");
        };
        assert!(link.contains("Grace%20Hopper"));
        assert!(link.contains("grace%40navy.mil"));
        assert!(link.contains("Found%20a%20bug%20%26%20fixed%20it%3F"));
        assert_eq!(outcome.status(), SubmitStatus::Idle);
    }

    #[tokio::test]
    async fn test_endpoint_success_and_failure() {
        let ok_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&ok_server)
            .await;
        let relay: Arc<dyn ContactRelay> =
            Arc::new(HttpContactRelay::new(ok_server.uri(), Duration::from_secs(5)).unwrap());
        let service = ContactService::new(Some(relay), "owner@example.com".into());
        assert_eq!(service.submit(&draft()).await, SubmitOutcome::Delivered);

        let bad_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&bad_server)
            .await;
        let relay: Arc<dyn ContactRelay> =
            Arc::new(HttpContactRelay::new(bad_server.uri(), Duration::from_secs(5)).unwrap());
        let service = ContactService::new(Some(relay), "owner@example.com".into());
        let outcome = service.submit(&draft()).await;
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(outcome.status(), SubmitStatus::Error);
    }

    #[tokio::test]
    async fn test_single_attempt_per_submission() {
        let relay = Arc::new(CountingRelay(AtomicUsize::new(0)));
        let shared: Arc<dyn ContactRelay> = relay.clone();
        let service = ContactService::new(Some(shared), "owner@example.com".into());
        service.submit(&draft()).await;
        assert_eq!(relay.0.load(Ordering::SeqCst), 1);
    }
}
