//! Matching engine — selects the best plan for a completed profile.
//!
//! Pure read + compute: fetches an active-catalog snapshot, scores every
//! candidate, and returns the best one. "No match" and "profile incomplete"
//! are ordinary empty results, not errors.

use std::sync::Arc;

use tracing::{debug, info};

use crate::catalog::{MealPlan, WorkoutPlan};
use crate::error::DatabaseError;
use crate::profile::Profile;
use crate::store::Database;

use super::calories::estimate_calorie_range;
use super::criteria::{meal_plan_score, workout_plan_score};

/// Ranks the plan catalog against a user profile.
pub struct MatchingEngine {
    db: Arc<dyn Database>,
}

impl MatchingEngine {
    pub fn new(db: Arc<dyn Database>) -> Self {
        Self { db }
    }

    /// Best workout plan for the profile, or `None`.
    ///
    /// Returns `None` without touching the catalog when the profile is not
    /// completed. Only candidates with score strictly above zero rank; ties
    /// go to the first candidate fetched (newest plan, since the store
    /// returns newest-first).
    pub async fn best_workout_plan(
        &self,
        profile: &Profile,
    ) -> Result<Option<WorkoutPlan>, DatabaseError> {
        if !profile.profile_completed {
            info!(user_ref = %profile.user_ref, "Profile not completed, cannot match workout plan");
            return Ok(None);
        }

        let plans = self.db.fetch_active_workout_plans().await?;
        let mut best: Option<(WorkoutPlan, f64)> = None;
        for plan in plans {
            let score = workout_plan_score(profile, &plan);
            debug!(plan = %plan.name, score, "Scored workout plan");
            if score > 0.0 && best.as_ref().map_or(true, |(_, s)| score > *s) {
                best = Some((plan, score));
            }
        }

        match best {
            Some((plan, score)) => {
                info!(user_ref = %profile.user_ref, plan = %plan.name, score, "Selected workout plan");
                Ok(Some(plan))
            }
            None => {
                info!(user_ref = %profile.user_ref, "No suitable workout plan found");
                Ok(None)
            }
        }
    }

    /// Best meal plan for the profile, or `None`. Same contract as
    /// [`best_workout_plan`](Self::best_workout_plan).
    pub async fn best_meal_plan(
        &self,
        profile: &Profile,
    ) -> Result<Option<MealPlan>, DatabaseError> {
        if !profile.profile_completed {
            info!(user_ref = %profile.user_ref, "Profile not completed, cannot match meal plan");
            return Ok(None);
        }

        let user_range = estimate_calorie_range(profile);
        debug!(?user_range, "Estimated calorie range");

        let plans = self.db.fetch_active_meal_plans().await?;
        let mut best: Option<(MealPlan, f64)> = None;
        for plan in plans {
            let score = meal_plan_score(profile, &plan, user_range);
            debug!(plan = %plan.name, score, "Scored meal plan");
            if score > 0.0 && best.as_ref().map_or(true, |(_, s)| score > *s) {
                best = Some((plan, score));
            }
        }

        match best {
            Some((plan, score)) => {
                info!(user_ref = %profile.user_ref, plan = %plan.name, score, "Selected meal plan");
                Ok(Some(plan))
            }
            None => {
                info!(user_ref = %profile.user_ref, "No suitable meal plan found");
                Ok(None)
            }
        }
    }
}
