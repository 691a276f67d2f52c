//! Best-Effort Project Forwarding
//!
//! After a project is committed to the local registry it is replicated to a
//! remote system of record. The remote call is advisory: it is attempted
//! once, with a fixed timeout, and a failure is reported back as text rather
//! than raised. [`ProjectForwarder`] is the seam that lets the intake
//! service run against the real HTTP client or an in-process stand-in.

use crate::project::Project;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;

/// Why a forwarding attempt did not land.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    /// The remote answered, but with something other than 201 Created.
    #[error("the external API returned status {status}: {body}")]
    Rejected { status: u16, body: String },
    /// The remote could not be reached (connect failure, timeout, etc.).
    #[error("could not reach the external API: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Delivers a committed project record to the remote system of record.
#[async_trait]
pub trait ProjectForwarder: Send + Sync {
    /// Attempts the delivery once. `Ok(())` means the remote acknowledged
    /// the record with 201 Created.
    async fn forward(&self, project: &Project) -> Result<(), ForwardError>;
}

/// The production forwarder: one HTTP POST of the full record as JSON.
pub struct HttpForwarder {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpForwarder {
    /// Builds a forwarder for the given endpoint URL. The timeout applies to
    /// the whole request; an expired timeout surfaces as
    /// [`ForwardError::Transport`].
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl ProjectForwarder for HttpForwarder {
    async fn forward(&self, project: &Project) -> Result<(), ForwardError> {
        debug!(endpoint = %self.endpoint, project_id = %project.id, "Forwarding project");
        let response = self.client.post(&self.endpoint).json(project).send().await?;

        if response.status() == StatusCode::CREATED {
            Ok(())
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(ForwardError::Rejected { status, body })
        }
    }
}

/// A `ProjectForwarder` for development and integration testing.
///
/// Records every project it is handed and either acknowledges it or rejects
/// it with a configured status, without touching the network.
pub struct MockForwarder {
    reject_status: Option<u16>,
    forwarded: Mutex<Vec<Project>>,
}

impl MockForwarder {
    /// A forwarder that acknowledges everything.
    pub fn accepting() -> Self {
        Self {
            reject_status: None,
            forwarded: Mutex::new(Vec::new()),
        }
    }

    /// A forwarder that rejects everything with the given HTTP status.
    pub fn rejecting(status: u16) -> Self {
        Self {
            reject_status: Some(status),
            forwarded: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of every record handed to this forwarder so far.
    pub async fn forwarded(&self) -> Vec<Project> {
        self.forwarded.lock().await.clone()
    }
}

#[async_trait]
impl ProjectForwarder for MockForwarder {
    async fn forward(&self, project: &Project) -> Result<(), ForwardError> {
        self.forwarded.lock().await.push(project.clone());
        match self.reject_status {
            Some(status) => Err(ForwardError::Rejected {
                status,
                body: "mock rejection".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{ProjectDraft, ProjectStatus};

    fn sample_project(id: &str) -> Project {
        ProjectDraft {
            product_owner_id: 1,
            category_id: 5,
            title: "Platform".to_string(),
            short_description: "short".to_string(),
            description: "long".to_string(),
            submission_date: "2024-11-15".to_string(),
            delivery_date: "2024-12-01".to_string(),
            expiration_date: "2025-01-01".to_string(),
            development_time: "2 weeks".to_string(),
            bounty: 250.0,
            urls: vec![],
            difficulty: None,
        }
        .into_project(id.to_string())
    }

    #[tokio::test]
    async fn test_accepting_mock_records_and_acknowledges() {
        let forwarder = MockForwarder::accepting();
        forwarder.forward(&sample_project("1")).await.unwrap();
        forwarder.forward(&sample_project("2")).await.unwrap();

        let seen = forwarder.forwarded().await;
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].id, "1");
        assert_eq!(seen[1].status, ProjectStatus::New);
    }

    #[tokio::test]
    async fn test_rejecting_mock_reports_status() {
        let forwarder = MockForwarder::rejecting(500);
        let err = forwarder.forward(&sample_project("1")).await.unwrap_err();
        match err {
            ForwardError::Rejected { status, .. } => assert_eq!(status, 500),
            other => panic!("expected Rejected, got {other:?}"),
        }
        // The record is still captured even when the mock rejects it.
        assert_eq!(forwarder.forwarded().await.len(), 1);
    }

    #[test]
    fn test_forward_error_display() {
        let err = ForwardError::Rejected {
            status: 503,
            body: "maintenance".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "the external API returned status 503: maintenance"
        );
    }
}
