//! Project/Learner Intake Service
//!
//! This module implements the creation pipeline: validate the draft, commit
//! it to the registry under one lock, then forward it best-effort to the
//! remote system of record. The local write is never rolled back when
//! forwarding fails; the registry is the durable record and the remote call
//! only degrades the outcome message.

use crate::forward::{ForwardError, ProjectForwarder};
use crate::learner::Learner;
use crate::project::{CATEGORIES, ProjectDraft, is_valid_category};
use crate::registry::SharedRegistry;
use crate::synth::random_project;
use std::sync::Arc;
use tracing::{info, warn};

/// Pre-commit validation failures. Nothing is written, locally or remotely,
/// when one of these is produced.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid category ID {0}; valid category IDs are 1 through {max}", max = CATEGORIES.len())]
    InvalidCategory(u32),
}

/// Outcome of a project creation attempt.
///
/// Validation failures are values, not errors: the caller always receives an
/// outcome it can render, and nothing here crosses the HTTP boundary as an
/// exception.
#[derive(Debug)]
pub enum ProjectCreation {
    /// Committed locally and acknowledged by the remote with 201 Created.
    Forwarded { id: String },
    /// Committed locally; the remote call failed. The record stays put.
    ForwardFailed { id: String, error: ForwardError },
    /// Rejected before any mutation.
    Invalid(ValidationError),
}

impl ProjectCreation {
    /// Renders the human-readable outcome string handed to API callers and
    /// the conversational agent.
    pub fn message(&self) -> String {
        match self {
            ProjectCreation::Forwarded { id } => format!(
                "Project created successfully with ID: {id} and delivered to the external API."
            ),
            ProjectCreation::ForwardFailed { id, error } => format!(
                "Project created locally with ID: {id}, but delivering it to the external API failed: {error}"
            ),
            ProjectCreation::Invalid(error) => format!("Error: {error}."),
        }
    }

    /// The id assigned to the committed record, if any was committed.
    pub fn id(&self) -> Option<&str> {
        match self {
            ProjectCreation::Forwarded { id } | ProjectCreation::ForwardFailed { id, .. } => {
                Some(id)
            }
            ProjectCreation::Invalid(_) => None,
        }
    }
}

/// The creation service for both entity kinds. Holds the shared registry and
/// the forwarding seam; constructed once at startup.
pub struct IntakeService {
    registry: SharedRegistry,
    forwarder: Arc<dyn ProjectForwarder>,
}

impl IntakeService {
    pub fn new(registry: SharedRegistry, forwarder: Arc<dyn ProjectForwarder>) -> Self {
        Self {
            registry,
            forwarder,
        }
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// Validates the draft, commits it with a freshly assigned sequential
    /// id, and forwards it. The registry lock is held across id assignment
    /// and insert so ids stay unique under concurrent callers; it is
    /// released before the network call.
    pub async fn create_project(&self, draft: ProjectDraft) -> ProjectCreation {
        if !is_valid_category(draft.category_id) {
            warn!(
                category_id = draft.category_id,
                "Rejected project draft with invalid category"
            );
            return ProjectCreation::Invalid(ValidationError::InvalidCategory(draft.category_id));
        }

        let project = {
            let mut registry = self.registry.lock().await;
            let id = registry.next_project_id();
            let project = draft.into_project(id.clone());
            registry.insert_project(id, project.clone());
            project
        };
        info!(project_id = %project.id, title = %project.title, "Project committed to registry");

        match self.forwarder.forward(&project).await {
            Ok(()) => {
                info!(project_id = %project.id, "Project acknowledged by the external API");
                ProjectCreation::Forwarded { id: project.id }
            }
            Err(error) => {
                warn!(project_id = %project.id, %error, "Forwarding failed; keeping local record");
                ProjectCreation::ForwardFailed {
                    id: project.id,
                    error,
                }
            }
        }
    }

    /// Synthesizes a draft and runs it through the normal creation path.
    /// The synthesized category is always valid, so this never produces
    /// `ProjectCreation::Invalid`.
    pub async fn create_random_project(&self) -> ProjectCreation {
        self.create_project(random_project()).await
    }

    /// Stores the learner, replacing any record under the same `person_id`.
    /// Always succeeds; learners are never forwarded.
    pub async fn add_learner(&self, learner: Learner) -> String {
        let person_id = learner.person_id.clone();
        self.registry.lock().await.insert_learner(learner);
        info!(%person_id, "Learner stored");
        format!("Learner {person_id} added successfully.")
    }
}
