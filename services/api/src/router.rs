//! Axum Router Configuration
//!
//! This module defines the complete HTTP routing for the application,
//! including the REST API and OpenAPI documentation.

use crate::{
    handlers,
    models::{CreateProjectPayload, LearnerPayload, MessageResponse},
    state::AppState,
};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::create_project,
        handlers::create_random_project,
        handlers::add_learner,
        handlers::list_projects,
        handlers::list_learners,
    ),
    components(
        schemas(CreateProjectPayload, LearnerPayload, MessageResponse)
    ),
    tags(
        (name = "Atelier API", description = "Project and learner intake with best-effort forwarding to the remote registry")
    )
)]
pub struct ApiDoc;

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Group all routes that require AppState into their own router.
    let api_router = Router::new()
        .route(
            "/projects",
            get(handlers::list_projects).post(handlers::create_project),
        )
        .route("/projects/random", post(handlers::create_random_project))
        .route(
            "/learners",
            get(handlers::list_learners).post(handlers::add_learner),
        )
        // Apply the state ONLY to this group of routes.
        .with_state(app_state);

    // Create the final router that merges the stateful routes
    // with the stateless routes (like Swagger UI).
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_router)
}
