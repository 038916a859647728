//! Weighted scoring criteria.
//!
//! Each criterion is an explicit (name, weight, credit) entry; a criterion is
//! only pushed when both the profile and the candidate carry the data it
//! needs, so missing data is skipped rather than penalized. The final score
//! normalizes by the sum of the weights actually present, which keeps the
//! result in [0, 1] and makes the divide-by-zero case explicit.

use crate::catalog::{MealPlan, WorkoutPlan};
use crate::profile::{BodyType, Difficulty, Profile};

/// One applicable scoring criterion. `credit` is the earned fraction in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    pub name: &'static str,
    pub weight: f64,
    pub credit: f64,
}

impl Criterion {
    fn full_or_zero(name: &'static str, weight: f64, hit: bool) -> Self {
        Self {
            name,
            weight,
            credit: if hit { 1.0 } else { 0.0 },
        }
    }
}

/// Sum the applicable criteria, normalized by their total weight.
/// Returns 0 when no criterion applied.
pub fn normalized_score(criteria: &[Criterion]) -> f64 {
    let total_weight: f64 = criteria.iter().map(|c| c.weight).sum();
    if total_weight > 0.0 {
        let earned: f64 = criteria.iter().map(|c| c.weight * c.credit).sum();
        earned / total_weight
    } else {
        0.0
    }
}

/// Build the applicable workout criteria for one candidate.
pub fn workout_criteria(profile: &Profile, plan: &WorkoutPlan) -> Vec<Criterion> {
    let mut criteria = Vec::with_capacity(4);

    if let Some(goal) = profile.goal {
        if !plan.target_goal.is_empty() {
            criteria.push(Criterion::full_or_zero(
                "goal",
                0.4,
                plan.target_goal.contains(&goal),
            ));
        }
    }

    if let Some(difficulty) = profile.preferred_difficulty {
        if !plan.target_level.is_empty() {
            criteria.push(Criterion::full_or_zero(
                "difficulty",
                0.3,
                plan.target_level.contains(&difficulty),
            ));
        }
    }

    if let Some(body_type) = profile.body_type {
        if !plan.target_body_type.is_empty() {
            criteria.push(Criterion::full_or_zero(
                "body_type",
                0.2,
                plan.target_body_type.contains(&body_type),
            ));
        }
    }

    // Beginners are steered to beginner plans, experienced users to
    // intermediate ones.
    if let Some(difficulty) = profile.preferred_difficulty {
        let expected = if profile.is_experienced_training {
            Difficulty::Intermediate
        } else {
            Difficulty::Beginner
        };
        criteria.push(Criterion::full_or_zero(
            "experience",
            0.1,
            difficulty == expected,
        ));
    }

    criteria
}

/// Score one workout candidate against a profile, in [0, 1].
pub fn workout_plan_score(profile: &Profile, plan: &WorkoutPlan) -> f64 {
    normalized_score(&workout_criteria(profile, plan))
}

/// Build the applicable meal criteria for one candidate.
///
/// `user_range` is the estimated target calorie range for the profile.
pub fn meal_criteria(profile: &Profile, plan: &MealPlan, user_range: (i32, i32)) -> Vec<Criterion> {
    let mut criteria = Vec::with_capacity(3);

    if let Some(goal) = profile.goal {
        if !plan.target_goal.is_empty() {
            criteria.push(Criterion::full_or_zero(
                "goal",
                0.5,
                plan.target_goal.contains(&goal),
            ));
        }
    }

    // Proportional credit for calorie overlap: overlap length over the
    // user's range length; zero for disjoint ranges.
    let (plan_min, plan_max) = plan.calories_range;
    let (user_min, user_max) = user_range;
    let overlap = i64::from(plan_max.min(user_max)) - i64::from(plan_min.max(user_min));
    let span = i64::from(user_max) - i64::from(user_min);
    let credit = if overlap > 0 && span > 0 {
        (overlap as f64 / span as f64).min(1.0)
    } else {
        0.0
    };
    criteria.push(Criterion {
        name: "calories",
        weight: 0.4,
        credit,
    });

    // A known body type earns a fixed half-credit regardless of the
    // candidate. Near-uninformative smoothing, but the shipped behavior.
    if let Some(body_type) = profile.body_type {
        if body_type != BodyType::Unknown {
            criteria.push(Criterion {
                name: "body_type",
                weight: 0.1,
                credit: 0.5,
            });
        }
    }

    criteria
}

/// Score one meal candidate against a profile, in [0, 1].
pub fn meal_plan_score(profile: &Profile, plan: &MealPlan, user_range: (i32, i32)) -> f64 {
    normalized_score(&meal_criteria(profile, plan, user_range))
}
