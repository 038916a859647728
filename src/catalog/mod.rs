//! Plan catalog — admin-authored workout and meal plans.

pub mod model;

pub use model::{MealPlan, PlanKind, WorkoutPlan};
