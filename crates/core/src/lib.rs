//! Atelier Core
//!
//! Domain logic for the atelier intake backend: the in-process record
//! registry, the project/learner creation pipeline with best-effort remote
//! forwarding, the random project synthesizer, and the MCP tool bindings
//! consumed by an external conversational agent runtime.

pub mod agent;
pub mod forward;
pub mod intake;
pub mod learner;
pub mod project;
pub mod registry;
pub mod synth;
