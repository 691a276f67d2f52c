//! MCP Entrypoint for the Conversational Agent
//!
//! Serves the intake tool bindings over stdio so an external agent runtime
//! can drive project and learner creation. The runtime supplies the model
//! and the natural-language instructions; this binary only provides the
//! tools.

use anyhow::Context;
use atelier_api::config::Config;
use atelier_core::{
    agent::IntakeTools, forward::HttpForwarder, intake::IntakeService, registry::Registry,
};
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // stdout carries the MCP protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    let registry = Registry::shared();
    let forwarder = Arc::new(
        HttpForwarder::new(config.forward_url.clone(), config.forward_timeout)
            .context("Failed to build the forwarding client")?,
    );
    let intake = Arc::new(IntakeService::new(registry, forwarder));
    let tools = IntakeTools::new(intake, config.default_category_id);

    info!(
        forward_url = %config.forward_url,
        default_category_id = config.default_category_id,
        "Serving intake tools over stdio..."
    );
    let service = tools.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
