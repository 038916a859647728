//! Questionnaire steps — a strictly ordered, linear sequence.

use serde::{Deserialize, Serialize};

/// What kind of answer a step consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Free text, run through a validator.
    Text,
    /// One option id from an enumerated set.
    Choice,
}

/// The ordered steps of the intake questionnaire.
///
/// Progresses linearly from `Age` to `Confirmation`; there is no branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    // Basic data
    Age,
    Gender,
    Height,
    Weight,
    TargetWeight,
    BodyType,
    // Goals and lifestyle
    Goal,
    Lifestyle,
    SleepHours,
    Genetics,
    TrainingExperience,
    LastIdealForm,
    // Training preferences
    TrainingFocus,
    TrainingLocation,
    TrainingTime,
    TrainingDays,
    TrainingType,
    TrainingDifficulty,
    // Health
    Injuries,
    Flexibility,
    Endurance,
    // Terminal review
    Confirmation,
}

impl Step {
    /// The step the questionnaire opens (and rewinds) to.
    pub fn first() -> Self {
        Self::Age
    }

    /// The next step in the linear progression, if any.
    pub fn next(&self) -> Option<Step> {
        use Step::*;
        match self {
            Age => Some(Gender),
            Gender => Some(Height),
            Height => Some(Weight),
            Weight => Some(TargetWeight),
            TargetWeight => Some(BodyType),
            BodyType => Some(Goal),
            Goal => Some(Lifestyle),
            Lifestyle => Some(SleepHours),
            SleepHours => Some(Genetics),
            Genetics => Some(TrainingExperience),
            TrainingExperience => Some(LastIdealForm),
            LastIdealForm => Some(TrainingFocus),
            TrainingFocus => Some(TrainingLocation),
            TrainingLocation => Some(TrainingTime),
            TrainingTime => Some(TrainingDays),
            TrainingDays => Some(TrainingType),
            TrainingType => Some(TrainingDifficulty),
            TrainingDifficulty => Some(Injuries),
            Injuries => Some(Flexibility),
            Flexibility => Some(Endurance),
            Endurance => Some(Confirmation),
            Confirmation => None,
        }
    }

    /// Whether this is the terminal review step.
    pub fn is_confirmation(&self) -> bool {
        matches!(self, Self::Confirmation)
    }

    /// What kind of answer this step consumes.
    pub fn input_kind(&self) -> InputKind {
        use Step::*;
        match self {
            Age | Height | Weight | TargetWeight | SleepHours | Genetics | LastIdealForm
            | TrainingTime | TrainingDays | Injuries => InputKind::Text,
            Gender | BodyType | Goal | Lifestyle | TrainingExperience | TrainingFocus
            | TrainingLocation | TrainingType | TrainingDifficulty | Flexibility | Endurance
            | Confirmation => InputKind::Choice,
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Height => "height",
            Self::Weight => "weight",
            Self::TargetWeight => "target_weight",
            Self::BodyType => "body_type",
            Self::Goal => "goal",
            Self::Lifestyle => "lifestyle",
            Self::SleepHours => "sleep_hours",
            Self::Genetics => "genetics",
            Self::TrainingExperience => "training_experience",
            Self::LastIdealForm => "last_ideal_form",
            Self::TrainingFocus => "training_focus",
            Self::TrainingLocation => "training_location",
            Self::TrainingTime => "training_time",
            Self::TrainingDays => "training_days",
            Self::TrainingType => "training_type",
            Self::TrainingDifficulty => "training_difficulty",
            Self::Injuries => "injuries",
            Self::Flexibility => "flexibility",
            Self::Endurance => "endurance",
            Self::Confirmation => "confirmation",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_all_steps_once() {
        let mut current = Step::first();
        let mut count = 1;
        while let Some(next) = current.next() {
            current = next;
            count += 1;
        }
        assert_eq!(current, Step::Confirmation);
        // 21 question steps plus confirmation.
        assert_eq!(count, 22);
    }

    #[test]
    fn confirmation_is_terminal() {
        assert!(Step::Confirmation.next().is_none());
        assert!(Step::Confirmation.is_confirmation());
        assert!(!Step::Age.is_confirmation());
    }

    #[test]
    fn input_kinds_cover_validated_text_steps() {
        assert_eq!(Step::Age.input_kind(), InputKind::Text);
        assert_eq!(Step::Weight.input_kind(), InputKind::Text);
        assert_eq!(Step::LastIdealForm.input_kind(), InputKind::Text);
        assert_eq!(Step::Gender.input_kind(), InputKind::Choice);
        assert_eq!(Step::Confirmation.input_kind(), InputKind::Choice);
    }
}
