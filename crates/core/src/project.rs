//! Project Domain Types
//!
//! This module defines the canonical project record collected by the intake
//! pipeline, along with the bounded category taxonomy that project creation
//! validates against.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed category taxonomy. Category ids are 1-indexed into this table,
/// so the valid id range is `1..=10` — id 10 is a valid category.
pub const CATEGORIES: [&str; 10] = [
    "Innovation",
    "Sustainability",
    "Technology",
    "Education",
    "Health",
    "Infrastructure",
    "Entrepreneurship",
    "Social Impact",
    "Culture",
    "Digital Transformation",
];

/// Returns the display name for a category id, if the id is valid.
pub fn category_name(category_id: u32) -> Option<&'static str> {
    if is_valid_category(category_id) {
        Some(CATEGORIES[(category_id - 1) as usize])
    } else {
        None
    }
}

/// Checks whether a category id falls inside the accepted `1..=10` range.
pub fn is_valid_category(category_id: u32) -> bool {
    (1..=CATEGORIES.len() as u32).contains(&category_id)
}

/// Lifecycle status of a project. Only the initial state is defined in-core;
/// no transitions exist and records are never updated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProjectStatus {
    New,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectStatus::New => write!(f, "New"),
        }
    }
}

/// Difficulty label a project may carry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A fully-formed project record as stored in the registry and forwarded to
/// the remote system of record.
///
/// The `id` is assigned sequentially at creation and never changes. Dates are
/// stored as opaque strings; no temporal ordering is enforced between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub product_owner_id: u32,
    pub category_id: u32,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub submission_date: String,
    pub delivery_date: String,
    pub expiration_date: String,
    pub status: ProjectStatus,
    pub development_time: String,
    pub bounty: f64,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

/// Caller-supplied project fields: everything except the assigned `id` and
/// the initial `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub product_owner_id: u32,
    pub category_id: u32,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub submission_date: String,
    pub delivery_date: String,
    pub expiration_date: String,
    pub development_time: String,
    pub bounty: f64,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl ProjectDraft {
    /// Completes the draft into a stored record with an assigned id and the
    /// initial `New` status.
    pub fn into_project(self, id: String) -> Project {
        Project {
            id,
            product_owner_id: self.product_owner_id,
            category_id: self.category_id,
            title: self.title,
            short_description: self.short_description,
            description: self.description,
            submission_date: self.submission_date,
            delivery_date: self.delivery_date,
            expiration_date: self.expiration_date,
            status: ProjectStatus::New,
            development_time: self.development_time,
            bounty: self.bounty,
            urls: self.urls,
            difficulty: self.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> ProjectDraft {
        ProjectDraft {
            product_owner_id: 1,
            category_id: 5,
            title: "Platform".to_string(),
            short_description: "A learning platform".to_string(),
            description: "A platform for apprentices".to_string(),
            submission_date: "2024-11-15".to_string(),
            delivery_date: "2024-12-01".to_string(),
            expiration_date: "2025-01-01".to_string(),
            development_time: "2 weeks".to_string(),
            bounty: 250.0,
            urls: vec![],
            difficulty: None,
        }
    }

    #[test]
    fn test_category_bounds() {
        assert!(!is_valid_category(0));
        assert!(is_valid_category(1));
        assert!(is_valid_category(5));
        assert!(is_valid_category(10));
        assert!(!is_valid_category(11));
    }

    #[test]
    fn test_category_names() {
        assert_eq!(category_name(1), Some("Innovation"));
        assert_eq!(category_name(5), Some("Health"));
        assert_eq!(category_name(10), Some("Digital Transformation"));
        assert_eq!(category_name(0), None);
        assert_eq!(category_name(11), None);
    }

    #[test]
    fn test_draft_into_project_sets_id_and_status() {
        let project = sample_draft().into_project("1".to_string());
        assert_eq!(project.id, "1");
        assert_eq!(project.status, ProjectStatus::New);
        assert_eq!(project.title, "Platform");
        assert_eq!(project.bounty, 250.0);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ProjectStatus::New).unwrap();
        assert_eq!(json, "\"New\"");
        assert_eq!(format!("{}", ProjectStatus::New), "New");
    }

    #[test]
    fn test_difficulty_round_trip() {
        for (variant, text) in [
            (Difficulty::Easy, "\"Easy\""),
            (Difficulty::Medium, "\"Medium\""),
            (Difficulty::Hard, "\"Hard\""),
        ] {
            assert_eq!(serde_json::to_string(&variant).unwrap(), text);
            let parsed: Difficulty = serde_json::from_str(text).unwrap();
            assert_eq!(parsed, variant);
        }
    }

    #[test]
    fn test_draft_deserializes_without_optional_fields() {
        let json = r#"{
            "product_owner_id": 1,
            "category_id": 3,
            "title": "Docs portal",
            "short_description": "short",
            "description": "long",
            "submission_date": "2024-11-15",
            "delivery_date": "2024-12-01",
            "expiration_date": "2025-01-01",
            "development_time": "1 week",
            "bounty": 150.5
        }"#;
        let draft: ProjectDraft = serde_json::from_str(json).unwrap();
        assert!(draft.urls.is_empty());
        assert_eq!(draft.difficulty, None);
    }

    #[test]
    fn test_project_serialization_omits_missing_difficulty() {
        let project = sample_draft().into_project("7".to_string());
        let json = serde_json::to_string(&project).unwrap();
        assert!(json.contains("\"status\":\"New\""));
        assert!(!json.contains("difficulty"));
    }
}
