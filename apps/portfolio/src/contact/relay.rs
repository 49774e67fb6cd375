//! Outbound delivery of contact messages to the configured submission endpoint.
//!
//! `ContactService` holds an `Arc<dyn ContactRelay>` so tests and alternative
//! transports can be swapped in without touching the handlers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use super::ContactDraft;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint rejected the message (status {status})")]
    Rejected { status: u16 },
}

#[async_trait]
pub trait ContactRelay: Send + Sync {
    /// Delivers one message. A single attempt; callers never retry.
    async fn deliver(&self, draft: &ContactDraft) -> Result<(), RelayError>;
}

/// Posts `{name, email, message}` as JSON; any 2xx status counts as delivered.
#[derive(Clone)]
pub struct HttpContactRelay {
    client: Client,
    endpoint: String,
}

impl HttpContactRelay {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, RelayError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactRelay for HttpContactRelay {
    async fn deliver(&self, draft: &ContactDraft) -> Result<(), RelayError> {
        let response = self.client.post(&self.endpoint).json(draft).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Rejected {
                status: status.as_u16(),
            });
        }

        debug!("Contact endpoint accepted message (status {})", status.as_u16());
        Ok(())
    }
}
