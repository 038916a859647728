//! Draft profile — the strongly typed questionnaire accumulator.
//!
//! Replaces the untyped "dialog data" bag: every field is `Option` until the
//! user answers its step, and the full field list is explicit, so the save
//! path copies fields by name instead of reflecting over an open map.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::model::{
    BodyType, Difficulty, FitnessLevel, Gender, Goal, Lifestyle, TrainingFocus, TrainingLocation,
    TrainingType,
};

/// Partially filled profile, scoped to one in-progress questionnaire session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftProfile {
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub height_cm: Option<i32>,
    pub weight_kg: Option<Decimal>,
    pub target_weight_kg: Option<Decimal>,
    pub body_type: Option<BodyType>,
    pub goal: Option<Goal>,
    pub lifestyle: Option<Lifestyle>,
    pub sleep_hours: Option<Decimal>,
    pub genetics_description: Option<String>,
    pub is_experienced_training: Option<bool>,
    /// Outer `Option`: answered at all. Inner: a date, or `None` for "never".
    pub last_ideal_form_date: Option<Option<NaiveDate>>,
    pub training_focus_area: Option<TrainingFocus>,
    pub training_location: Option<TrainingLocation>,
    pub training_time_minutes: Option<i32>,
    pub training_days_per_week: Option<i32>,
    pub preferred_training_type: Option<TrainingType>,
    pub preferred_difficulty: Option<Difficulty>,
    pub injuries_description: Option<String>,
    pub flexibility_level: Option<FitnessLevel>,
    pub endurance_level: Option<FitnessLevel>,
}

/// Final field set written at save time: the draft merged over the defaults
/// table. Fields with documented defaults are no longer optional here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub height_cm: Option<i32>,
    pub weight_kg: Option<Decimal>,
    pub target_weight_kg: Option<Decimal>,
    pub body_type: Option<BodyType>,
    pub goal: Goal,
    pub lifestyle: Lifestyle,
    pub sleep_hours: Decimal,
    pub genetics_description: Option<String>,
    pub is_experienced_training: bool,
    pub last_ideal_form_date: Option<NaiveDate>,
    pub training_focus_area: Option<TrainingFocus>,
    pub training_location: Option<TrainingLocation>,
    pub training_time_minutes: Option<i32>,
    pub training_days_per_week: i32,
    pub preferred_training_type: Option<TrainingType>,
    pub preferred_difficulty: Option<Difficulty>,
    pub injuries_description: Option<String>,
    pub flexibility_level: Option<FitnessLevel>,
    pub endurance_level: Option<FitnessLevel>,
}

impl DraftProfile {
    /// Merge the draft over the defaults table.
    ///
    /// Unanswered optional fields receive: experience=false, goal=unknown,
    /// lifestyle=unknown, training_days_per_week=0, sleep_hours=0.
    pub fn into_update(self) -> ProfileUpdate {
        ProfileUpdate {
            age: self.age,
            gender: self.gender,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            target_weight_kg: self.target_weight_kg,
            body_type: self.body_type,
            goal: self.goal.unwrap_or(Goal::Unknown),
            lifestyle: self.lifestyle.unwrap_or(Lifestyle::Unknown),
            sleep_hours: self.sleep_hours.unwrap_or(Decimal::ZERO),
            genetics_description: self.genetics_description,
            is_experienced_training: self.is_experienced_training.unwrap_or(false),
            last_ideal_form_date: self.last_ideal_form_date.flatten(),
            training_focus_area: self.training_focus_area,
            training_location: self.training_location,
            training_time_minutes: self.training_time_minutes,
            training_days_per_week: self.training_days_per_week.unwrap_or(0),
            preferred_training_type: self.preferred_training_type,
            preferred_difficulty: self.preferred_difficulty,
            injuries_description: self.injuries_description,
            flexibility_level: self.flexibility_level,
            endurance_level: self.endurance_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_draft_takes_documented_defaults() {
        let update = DraftProfile::default().into_update();
        assert!(!update.is_experienced_training);
        assert_eq!(update.goal, Goal::Unknown);
        assert_eq!(update.lifestyle, Lifestyle::Unknown);
        assert_eq!(update.training_days_per_week, 0);
        assert_eq!(update.sleep_hours, Decimal::ZERO);
        assert!(update.age.is_none());
        assert!(update.weight_kg.is_none());
    }

    #[test]
    fn answered_fields_override_defaults() {
        let draft = DraftProfile {
            goal: Some(Goal::GainMuscle),
            sleep_hours: Some(dec!(7.5)),
            training_days_per_week: Some(4),
            is_experienced_training: Some(true),
            ..Default::default()
        };
        let update = draft.into_update();
        assert_eq!(update.goal, Goal::GainMuscle);
        assert_eq!(update.sleep_hours, dec!(7.5));
        assert_eq!(update.training_days_per_week, 4);
        assert!(update.is_experienced_training);
    }

    #[test]
    fn never_answer_flattens_to_none() {
        let draft = DraftProfile {
            last_ideal_form_date: Some(None),
            ..Default::default()
        };
        assert!(draft.into_update().last_ideal_form_date.is_none());
    }
}
