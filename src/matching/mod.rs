//! Matching engine — ranks the plan catalog against a completed profile.

pub mod calories;
pub mod criteria;
pub mod engine;

pub use calories::estimate_calorie_range;
pub use criteria::{meal_plan_score, workout_plan_score, Criterion};
pub use engine::MatchingEngine;
