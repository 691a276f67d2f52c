//! Atelier API Library Crate
//!
//! This library contains all the logic for the atelier web service: the
//! application state, configuration, API handlers, and routing. The binaries
//! under `bin/` are thin wrappers around this library.

pub mod config;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
