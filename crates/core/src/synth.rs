//! Random Project Synthesizer
//!
//! Produces a syntactically valid, semantically arbitrary project draft for
//! exercising the intake pipeline without full caller input. The shape is
//! deterministic; only the category, title suffix, difficulty, and bounty
//! vary between draws.

use crate::project::{CATEGORIES, Difficulty, ProjectDraft};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Fixed owner used for every synthesized project.
pub const SYNTH_OWNER_ID: u32 = 1;

const PLACEHOLDER_URL: &str = "http://example.com/project";

/// Builds a fully-populated draft with randomized category, title suffix,
/// difficulty, and bounty. The category is always drawn from the valid
/// range, so a synthesized draft can never fail category validation.
pub fn random_project() -> ProjectDraft {
    let mut rng = rand::rng();

    let category_id = rng.random_range(1..=CATEGORIES.len() as u32);
    let suffix: u32 = rng.random_range(1000..=9999);
    let difficulty = *[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        .choose(&mut rng)
        .unwrap_or(&Difficulty::Medium);
    let bounty = round_to_cents(rng.random_range(100.0..=1000.0));

    ProjectDraft {
        product_owner_id: SYNTH_OWNER_ID,
        category_id,
        title: format!("Random Project {suffix}"),
        short_description: "This is a randomly generated project.".to_string(),
        description: "Detailed description of a randomly generated project.".to_string(),
        submission_date: "2024-11-15".to_string(),
        delivery_date: "2024-12-01".to_string(),
        expiration_date: "2025-01-01".to_string(),
        development_time: "2 weeks".to_string(),
        bounty,
        urls: vec![PLACEHOLDER_URL.to_string()],
        difficulty: Some(difficulty),
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
