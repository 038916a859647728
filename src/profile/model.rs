//! Profile data model and its closed enumerations.
//!
//! Every selection the questionnaire offers is a closed enum with an explicit
//! default variant. `from_option_id` never fails: an unrecognized id falls
//! back to the documented default, which keeps the original silent-fallback
//! behavior but makes it visible and testable.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// User's gender. Unmatched selections fall back to `Male`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn from_option_id(id: &str) -> Self {
        match id {
            "female" => Self::Female,
            "other" => Self::Other,
            _ => Self::Male,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// Body type. Unmatched selections fall back to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    Ectomorph,
    Mesomorph,
    Endomorph,
    Unknown,
}

impl BodyType {
    pub fn from_option_id(id: &str) -> Self {
        match id {
            "ectomorph" => Self::Ectomorph,
            "mesomorph" => Self::Mesomorph,
            "endomorph" => Self::Endomorph,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ectomorph => "ectomorph",
            Self::Mesomorph => "mesomorph",
            Self::Endomorph => "endomorph",
            Self::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ectomorph => "Ectomorph (lean)",
            Self::Mesomorph => "Mesomorph (muscular)",
            Self::Endomorph => "Endomorph (stocky)",
            Self::Unknown => "Not sure",
        }
    }
}

/// Training goal. Unmatched selections fall back to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    GainMuscle,
    Maintain,
    ImproveHealth,
    ImproveEndurance,
    BodyRecomposition,
    Unknown,
}

impl Goal {
    pub fn from_option_id(id: &str) -> Self {
        match id {
            "lose_weight" => Self::LoseWeight,
            "gain_muscle" => Self::GainMuscle,
            "maintain" => Self::Maintain,
            "improve_health" => Self::ImproveHealth,
            "improve_endurance" => Self::ImproveEndurance,
            "body_recomposition" => Self::BodyRecomposition,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoseWeight => "lose_weight",
            Self::GainMuscle => "gain_muscle",
            Self::Maintain => "maintain",
            Self::ImproveHealth => "improve_health",
            Self::ImproveEndurance => "improve_endurance",
            Self::BodyRecomposition => "body_recomposition",
            Self::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::LoseWeight => "Lose weight",
            Self::GainMuscle => "Gain muscle",
            Self::Maintain => "Maintain shape",
            Self::ImproveHealth => "Improve health",
            Self::ImproveEndurance => "Improve endurance",
            Self::BodyRecomposition => "Body recomposition",
            Self::Unknown => "Not decided yet",
        }
    }
}

/// Daily activity level. Unmatched selections fall back to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifestyle {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
    Unknown,
}

impl Lifestyle {
    pub fn from_option_id(id: &str) -> Self {
        match id {
            "sedentary" => Self::Sedentary,
            "lightly_active" => Self::LightlyActive,
            "moderately_active" => Self::ModeratelyActive,
            "very_active" => Self::VeryActive,
            "extremely_active" => Self::ExtremelyActive,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtremelyActive => "extremely_active",
            Self::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary (desk job, little movement)",
            Self::LightlyActive => "Lightly active (walks, light exercise)",
            Self::ModeratelyActive => "Moderately active (training 3-5x/week)",
            Self::VeryActive => "Very active (training 6-7x/week)",
            Self::ExtremelyActive => "Extremely active (physical job + training)",
            Self::Unknown => "Hard to say",
        }
    }

    /// TDEE activity multiplier. Unknown gets the sedentary baseline.
    pub fn activity_multiplier(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::LightlyActive => 1.375,
            Self::ModeratelyActive => 1.55,
            Self::VeryActive => 1.725,
            Self::ExtremelyActive => 1.9,
            Self::Unknown => 1.2,
        }
    }
}

/// Preferred training focus area. Unmatched selections fall back to `FullBody`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingFocus {
    FullBody,
    UpperBody,
    LowerBody,
    Core,
    Back,
    Glutes,
}

impl TrainingFocus {
    pub fn from_option_id(id: &str) -> Self {
        match id {
            "upper_body" => Self::UpperBody,
            "lower_body" => Self::LowerBody,
            "core" => Self::Core,
            "back" => Self::Back,
            "glutes" => Self::Glutes,
            _ => Self::FullBody,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullBody => "full_body",
            Self::UpperBody => "upper_body",
            Self::LowerBody => "lower_body",
            Self::Core => "core",
            Self::Back => "back",
            Self::Glutes => "glutes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullBody => "Full body",
            Self::UpperBody => "Upper body",
            Self::LowerBody => "Lower body",
            Self::Core => "Core",
            Self::Back => "Back",
            Self::Glutes => "Glutes",
        }
    }
}

/// Where the user trains. Unmatched selections fall back to `Home`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingLocation {
    Home,
    Gym,
    Outdoor,
}

impl TrainingLocation {
    pub fn from_option_id(id: &str) -> Self {
        match id {
            "gym" => Self::Gym,
            "outdoor" => Self::Outdoor,
            _ => Self::Home,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Gym => "gym",
            Self::Outdoor => "outdoor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "At home",
            Self::Gym => "In the gym",
            Self::Outdoor => "Outdoors",
        }
    }
}

/// Preferred training style. Unmatched selections fall back to `Mixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingType {
    Strength,
    Cardio,
    Hiit,
    Yoga,
    Crossfit,
    Mixed,
}

impl TrainingType {
    pub fn from_option_id(id: &str) -> Self {
        match id {
            "strength" => Self::Strength,
            "cardio" => Self::Cardio,
            "hiit" => Self::Hiit,
            "yoga" => Self::Yoga,
            "crossfit" => Self::Crossfit,
            _ => Self::Mixed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Hiit => "hiit",
            Self::Yoga => "yoga",
            Self::Crossfit => "crossfit",
            Self::Mixed => "mixed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Cardio => "Cardio",
            Self::Hiit => "HIIT",
            Self::Yoga => "Yoga",
            Self::Crossfit => "CrossFit",
            Self::Mixed => "Mixed",
        }
    }
}

/// Workout difficulty tier. Unmatched selections fall back to `Beginner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub fn from_option_id(id: &str) -> Self {
        match id {
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            "expert" => Self::Expert,
            _ => Self::Beginner,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

/// Ordinal self-assessment used for flexibility and endurance.
///
/// Variants are declared worst-first so the derived `Ord` matches the
/// intended ordering: `VeryPoor < Poor < Average < Good < Excellent`.
/// Unmatched selections fall back to `Average`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    VeryPoor,
    Poor,
    Average,
    Good,
    Excellent,
}

impl FitnessLevel {
    pub fn from_option_id(id: &str) -> Self {
        match id {
            "very_poor" => Self::VeryPoor,
            "poor" => Self::Poor,
            "good" => Self::Good,
            "excellent" => Self::Excellent,
            _ => Self::Average,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryPoor => "very_poor",
            Self::Poor => "poor",
            Self::Average => "average",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryPoor => "Very poor",
            Self::Poor => "Poor",
            Self::Average => "Average",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

/// Persisted profile — one per user, keyed by an opaque user reference.
///
/// The questionnaire is the sole writer during intake; every numeric or
/// enum field satisfies its validator bound once set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub user_ref: String,
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
    pub is_experienced_training: bool,
    pub last_ideal_form_date: Option<NaiveDate>,
    pub training_focus_area: Option<TrainingFocus>,
    pub training_location: Option<TrainingLocation>,
    pub training_time_minutes: Option<i32>,
    pub training_days_per_week: Option<i32>,
    pub preferred_training_type: Option<TrainingType>,
    pub preferred_difficulty: Option<Difficulty>,
    pub injuries_description: Option<String>,
    pub flexibility_level: Option<FitnessLevel>,
    pub endurance_level: Option<FitnessLevel>,
    pub profile_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// An empty, not-yet-completed profile for a user.
    pub fn empty(user_ref: impl Into<String>) -> Self {
        Self {
            user_ref: user_ref.into(),
            age: None,
            gender: None,
            height_cm: None,
            weight_kg: None,
            target_weight_kg: None,
            body_type: None,
            goal: None,
            lifestyle: None,
            sleep_hours: None,
            genetics_description: None,
            is_experienced_training: false,
            last_ideal_form_date: None,
            training_focus_area: None,
            training_location: None,
            training_time_minutes: None,
            training_days_per_week: None,
            preferred_training_type: None,
            preferred_difficulty: None,
            injuries_description: None,
            flexibility_level: None,
            endurance_level: None,
            profile_completed: false,
            completed_at: None,
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_falls_back_to_male() {
        assert_eq!(Gender::from_option_id("female"), Gender::Female);
        assert_eq!(Gender::from_option_id("alien"), Gender::Male);
        assert_eq!(Gender::from_option_id(""), Gender::Male);
    }

    #[test]
    fn body_type_falls_back_to_unknown() {
        assert_eq!(BodyType::from_option_id("mesomorph"), BodyType::Mesomorph);
        assert_eq!(BodyType::from_option_id("banana"), BodyType::Unknown);
    }

    #[test]
    fn goal_falls_back_to_unknown() {
        assert_eq!(Goal::from_option_id("lose_weight"), Goal::LoseWeight);
        assert_eq!(Goal::from_option_id("get_swole"), Goal::Unknown);
    }

    #[test]
    fn difficulty_falls_back_to_beginner() {
        assert_eq!(Difficulty::from_option_id("expert"), Difficulty::Expert);
        assert_eq!(Difficulty::from_option_id("nightmare"), Difficulty::Beginner);
    }

    #[test]
    fn fitness_level_orders_worst_to_best() {
        assert!(FitnessLevel::VeryPoor < FitnessLevel::Poor);
        assert!(FitnessLevel::Poor < FitnessLevel::Average);
        assert!(FitnessLevel::Average < FitnessLevel::Good);
        assert!(FitnessLevel::Good < FitnessLevel::Excellent);
    }

    #[test]
    fn round_trip_through_option_ids() {
        for goal in [
            Goal::LoseWeight,
            Goal::GainMuscle,
            Goal::Maintain,
            Goal::ImproveHealth,
            Goal::ImproveEndurance,
            Goal::BodyRecomposition,
            Goal::Unknown,
        ] {
            assert_eq!(Goal::from_option_id(goal.as_str()), goal);
        }
        for lifestyle in [
            Lifestyle::Sedentary,
            Lifestyle::LightlyActive,
            Lifestyle::ModeratelyActive,
            Lifestyle::VeryActive,
            Lifestyle::ExtremelyActive,
            Lifestyle::Unknown,
        ] {
            assert_eq!(Lifestyle::from_option_id(lifestyle.as_str()), lifestyle);
        }
    }

    #[test]
    fn activity_multipliers_match_table() {
        assert_eq!(Lifestyle::Sedentary.activity_multiplier(), 1.2);
        assert_eq!(Lifestyle::ExtremelyActive.activity_multiplier(), 1.9);
        assert_eq!(Lifestyle::Unknown.activity_multiplier(), 1.2);
    }

    #[test]
    fn serde_matches_option_ids() {
        let json = serde_json::to_string(&Goal::LoseWeight).unwrap();
        assert_eq!(json, "\"lose_weight\"");
        let parsed: BodyType = serde_json::from_str("\"ectomorph\"").unwrap();
        assert_eq!(parsed, BodyType::Ectomorph);
    }
}
