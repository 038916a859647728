//! Catalog entries. Read-only to the matching engine; created and edited
//! out-of-band by an administrator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::profile::{BodyType, Difficulty, Goal};

/// Which catalog a plan belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    Workout,
    Meal,
}

impl PlanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Workout => "workout",
            Self::Meal => "meal",
        }
    }
}

/// A workout plan with its targeting metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub target_goal: Vec<Goal>,
    pub target_level: Vec<Difficulty>,
    pub target_body_type: Vec<BodyType>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl WorkoutPlan {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        target_goal: Vec<Goal>,
        target_level: Vec<Difficulty>,
        target_body_type: Vec<BodyType>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description,
            target_goal,
            target_level,
            target_body_type,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

/// A meal plan with its targeting metadata.
///
/// `calories_range` is (min, max) with min ≤ max.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub target_goal: Vec<Goal>,
    pub calories_range: (i32, i32),
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl MealPlan {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        target_goal: Vec<Goal>,
        calories_range: (i32, i32),
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description,
            target_goal,
            calories_range,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
