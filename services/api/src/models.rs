//! API Request/Response Models
//!
//! This module defines the payload shapes accepted by the HTTP surface and
//! the uniform message envelope it answers with, annotated for OpenAPI
//! generation with `utoipa`. Payloads convert into the core domain types at
//! the handler boundary.

use atelier_core::learner::Learner;
use atelier_core::project::{Difficulty, ProjectDraft};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for `POST /projects`: every project attribute except the assigned
/// id and the initial status.
#[derive(Deserialize, ToSchema)]
pub struct CreateProjectPayload {
    #[schema(example = 1)]
    pub product_owner_id: u32,
    #[schema(example = 5, minimum = 1, maximum = 10)]
    pub category_id: u32,
    #[schema(example = "Platform")]
    pub title: String,
    pub short_description: String,
    pub description: String,
    #[schema(example = "2024-11-15")]
    pub submission_date: String,
    #[schema(example = "2024-12-01")]
    pub delivery_date: String,
    #[schema(example = "2025-01-01")]
    pub expiration_date: String,
    #[schema(example = "2 weeks")]
    pub development_time: String,
    #[schema(example = 250.0)]
    pub bounty: f64,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Medium")]
    pub difficulty: Option<Difficulty>,
}

impl From<CreateProjectPayload> for ProjectDraft {
    fn from(payload: CreateProjectPayload) -> Self {
        ProjectDraft {
            product_owner_id: payload.product_owner_id,
            category_id: payload.category_id,
            title: payload.title,
            short_description: payload.short_description,
            description: payload.description,
            submission_date: payload.submission_date,
            delivery_date: payload.delivery_date,
            expiration_date: payload.expiration_date,
            development_time: payload.development_time,
            bounty: payload.bounty,
            urls: payload.urls,
            difficulty: payload.difficulty,
        }
    }
}

/// Body for `POST /learners`.
#[derive(Deserialize, ToSchema)]
pub struct LearnerPayload {
    #[schema(example = "p-1024")]
    pub person_id: String,
    #[schema(example = "Junior")]
    pub experience_level: String,
    pub education: String,
    pub biography: String,
    #[schema(example = "Web Development")]
    pub interest: String,
    pub country: String,
}

impl From<LearnerPayload> for Learner {
    fn from(payload: LearnerPayload) -> Self {
        Learner {
            person_id: payload.person_id,
            experience_level: payload.experience_level,
            education: payload.education,
            biography: payload.biography,
            interest: payload.interest,
            country: payload.country,
        }
    }
}

/// The single response shape every POST endpoint answers with. Validation
/// failures ride in `message` too; the HTTP status stays 200.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct MessageResponse {
    pub message: String,
}
