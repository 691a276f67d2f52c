//! Learner Domain Type

use serde::{Deserialize, Serialize};

/// A learner profile, keyed by the caller-supplied `person_id`.
///
/// The id is not validated for format or uniqueness; submitting the same id
/// again replaces the stored record wholesale. Learners are kept locally only
/// and are never forwarded to the remote system of record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Learner {
    pub person_id: String,
    pub experience_level: String,
    pub education: String,
    pub biography: String,
    pub interest: String,
    pub country: String,
}
