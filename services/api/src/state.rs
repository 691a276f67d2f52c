//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds all shared,
//! clonable resources like the intake service and the record registry.

use crate::config::Config;
use atelier_core::{intake::IntakeService, registry::SharedRegistry};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
/// All fields are public to be accessible from other modules.
#[derive(Clone)]
pub struct AppState {
    pub intake: Arc<IntakeService>,
    pub registry: SharedRegistry,
    pub config: Arc<Config>,
}
