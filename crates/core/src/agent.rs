//! Agent Tool Bindings
//!
//! This module exposes the intake service to an external conversational
//! agent runtime as MCP tools. The runtime owns the natural-language
//! instructions and intent extraction; the contract here is a stable set of
//! tool signatures that each return a display-ready string.

use crate::intake::IntakeService;
use crate::learner::Learner;
use crate::project::{Difficulty, ProjectDraft};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Arguments for the `create_project` tool.
#[derive(Deserialize, JsonSchema, Debug)]
pub struct CreateProjectArgs {
    /// Identifier of the product owner submitting the project.
    pub product_owner_id: u32,
    /// Category id between 1 and 10. When omitted, the service's configured
    /// default category is used.
    #[schemars(description = "Category ID from 1 to 10; omit to use the configured default")]
    pub category_id: Option<u32>,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub submission_date: String,
    pub delivery_date: String,
    pub expiration_date: String,
    pub development_time: String,
    pub bounty: f64,
    /// Optional reference URLs attached to the project.
    pub urls: Option<Vec<String>>,
    /// Optional difficulty label: Easy, Medium, or Hard.
    pub difficulty: Option<Difficulty>,
}

/// Arguments for the `add_learner` tool.
#[derive(Deserialize, JsonSchema, Debug)]
pub struct AddLearnerArgs {
    pub person_id: String,
    pub experience_level: String,
    pub education: String,
    pub biography: String,
    pub interest: String,
    pub country: String,
}

/// MCP tool server wrapping the intake service.
///
/// The default category id stands in for the prompt-level convention the
/// agent instructions used to carry; it only applies when a tool call omits
/// `category_id`.
pub struct IntakeTools {
    service: Arc<IntakeService>,
    default_category_id: u32,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for IntakeTools {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[tool_router]
impl IntakeTools {
    pub fn new(service: Arc<IntakeService>, default_category_id: u32) -> Self {
        Self {
            service,
            default_category_id,
            tool_router: Self::tool_router(),
        }
    }

    /// Creates a project from the provided details and reports the combined
    /// local/remote outcome.
    #[tool(
        description = "Create a new project from the provided details, store it, and deliver it to the external API."
    )]
    pub async fn create_project(
        &self,
        args: Parameters<CreateProjectArgs>,
    ) -> Result<String, String> {
        info!(title = %args.0.title, "Executing tool 'create_project'");
        let args = args.0;
        let draft = ProjectDraft {
            product_owner_id: args.product_owner_id,
            category_id: args.category_id.unwrap_or(self.default_category_id),
            title: args.title,
            short_description: args.short_description,
            description: args.description,
            submission_date: args.submission_date,
            delivery_date: args.delivery_date,
            expiration_date: args.expiration_date,
            development_time: args.development_time,
            bounty: args.bounty,
            urls: args.urls.unwrap_or_default(),
            difficulty: args.difficulty,
        };
        Ok(self.service.create_project(draft).await.message())
    }

    /// Creates a project with synthesized placeholder content.
    #[tool(description = "Create a randomly generated demo project; all fields are synthesized.")]
    pub async fn create_random_project(&self) -> Result<String, String> {
        info!("Executing tool 'create_random_project'");
        Ok(self.service.create_random_project().await.message())
    }

    /// Stores a learner profile, replacing any existing record with the same
    /// person id.
    #[tool(description = "Add a learner profile with the provided details.")]
    pub async fn add_learner(&self, args: Parameters<AddLearnerArgs>) -> Result<String, String> {
        info!(person_id = %args.0.person_id, "Executing tool 'add_learner'");
        let args = args.0;
        let learner = Learner {
            person_id: args.person_id,
            experience_level: args.experience_level,
            education: args.education,
            biography: args.biography,
            interest: args.interest,
            country: args.country,
        };
        Ok(self.service.add_learner(learner).await)
    }

    /// JSON snapshot of every stored project, so the agent can show the
    /// caller exactly what was sent to the external API.
    #[tool(description = "List all stored projects as JSON.")]
    pub async fn list_projects(&self) -> Result<String, String> {
        info!("Executing tool 'list_projects'");
        let registry = self.service.registry().lock().await;
        serde_json::to_string(registry.projects())
            .map_err(|e| format!("Failed to serialize projects: {}", e))
    }
}
