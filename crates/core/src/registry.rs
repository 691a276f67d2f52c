//! In-Process Record Registry
//!
//! The registry is the sole owner of the project and learner maps. It is a
//! plain value; shared access goes through [`SharedRegistry`], and callers
//! that pair `next_project_id` with `insert_project` must do so under a
//! single lock so that ids stay unique under concurrent use.

use crate::learner::Learner;
use crate::project::Project;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle to the registry, created once at startup and passed to every
/// component that reads or mutates records.
pub type SharedRegistry = Arc<Mutex<Registry>>;

/// Keyed container for the two entity kinds. Nothing is ever deleted; there
/// is no persistence across restarts.
#[derive(Debug, Default)]
pub struct Registry {
    projects: HashMap<String, Project>,
    learners: HashMap<String, Learner>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a fresh registry in the shared handle used across the service.
    pub fn shared() -> SharedRegistry {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Next sequential project id, computed as `count + 1` at call time. The
    /// id is not reserved: call this and `insert_project` under one lock.
    pub fn next_project_id(&self) -> String {
        (self.projects.len() + 1).to_string()
    }

    pub fn insert_project(&mut self, id: String, project: Project) {
        self.projects.insert(id, project);
    }

    /// Inserts or wholesale-replaces the learner stored under its
    /// `person_id`.
    pub fn insert_learner(&mut self, learner: Learner) {
        self.learners.insert(learner.person_id.clone(), learner);
    }

    pub fn projects(&self) -> &HashMap<String, Project> {
        &self.projects
    }

    pub fn learners(&self) -> &HashMap<String, Learner> {
        &self.learners
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn learner_count(&self) -> usize {
        self.learners.len()
    }
}
