//! Axum Handlers for the REST API
//!
//! This module contains the logic for handling HTTP requests for project and
//! learner intake. It uses `utoipa` doc comments to generate OpenAPI
//! documentation.
//!
//! Every POST endpoint answers HTTP 200 with a `{"message": ...}` body, even
//! when validation fails — the outcome rides in the message text. Malformed
//! bodies never reach these handlers; the `Json` extractor rejects them
//! first.

use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use std::collections::HashMap;
use std::sync::Arc;

use atelier_core::{learner::Learner, project::Project};

use crate::{
    models::{CreateProjectPayload, LearnerPayload, MessageResponse},
    state::AppState,
};

/// Create a project and forward it to the external API.
#[utoipa::path(
    post,
    path = "/projects",
    request_body = CreateProjectPayload,
    responses(
        (status = 200, description = "Outcome of the creation attempt, including validation failures", body = MessageResponse),
        (status = 422, description = "Malformed request body")
    )
)]
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateProjectPayload>,
) -> impl IntoResponse {
    let outcome = state.intake.create_project(payload.into()).await;
    Json(MessageResponse {
        message: outcome.message(),
    })
}

/// Create a project with synthesized placeholder content. Any request body
/// is ignored.
#[utoipa::path(
    post,
    path = "/projects/random",
    responses(
        (status = 200, description = "Outcome of the creation attempt", body = MessageResponse)
    )
)]
pub async fn create_random_project(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let outcome = state.intake.create_random_project().await;
    Json(MessageResponse {
        message: outcome.message(),
    })
}

/// Add a learner, replacing any record with the same person id.
#[utoipa::path(
    post,
    path = "/learners",
    request_body = LearnerPayload,
    responses(
        (status = 200, description = "Confirmation message", body = MessageResponse),
        (status = 422, description = "Malformed request body")
    )
)]
pub async fn add_learner(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LearnerPayload>,
) -> impl IntoResponse {
    let message = state.intake.add_learner(payload.into()).await;
    Json(MessageResponse { message })
}

/// List all stored projects, keyed by assigned id.
#[utoipa::path(
    get,
    path = "/projects",
    responses(
        (status = 200, description = "Map of project ID to project record")
    )
)]
pub async fn list_projects(State(state): State<Arc<AppState>>) -> Json<HashMap<String, Project>> {
    let registry = state.registry.lock().await;
    Json(registry.projects().clone())
}

/// List all stored learners, keyed by person id.
#[utoipa::path(
    get,
    path = "/learners",
    responses(
        (status = 200, description = "Map of person ID to learner record")
    )
)]
pub async fn list_learners(State(state): State<Arc<AppState>>) -> Json<HashMap<String, Learner>> {
    let registry = state.registry.lock().await;
    Json(registry.learners().clone())
}
