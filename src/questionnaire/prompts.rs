//! Per-step prompt text and option tables.
//!
//! Option ids are the stored enum codes; the label is what the user sees.
//! Note that a few prompts advertise a narrower range than the validator
//! accepts (sleep 4–12 vs 0–24, duration 30–120 vs 0–300) — kept as shipped.

use super::step::Step;

/// One selectable option: displayed label, stored option id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOption {
    pub label: &'static str,
    pub id: &'static str,
}

const fn opt(label: &'static str, id: &'static str) -> StepOption {
    StepOption { label, id }
}

/// Confirmation-step action ids.
pub const ACTION_SAVE: &str = "save";
pub const ACTION_EDIT: &str = "edit";
pub const ACTION_CANCEL: &str = "cancel";

/// The question text shown for a step.
pub fn step_prompt(step: Step) -> &'static str {
    match step {
        Step::Age => "How old are you?\nEnter a number from 14 to 100.",
        Step::Gender => "What is your gender?",
        Step::Height => "Your height in centimetres?\nEnter a number from 100 to 250, e.g. 175.",
        Step::Weight => "Your current weight in kg?\nEnter a number from 30 to 300, e.g. 70.5.",
        Step::TargetWeight => "Your target weight in kg?\nEnter a number from 30 to 300, e.g. 65.0.",
        Step::BodyType => "Your body type?",
        Step::Goal => "What is your main goal?",
        Step::Lifestyle => "How active is your daily life?",
        Step::SleepHours => "How many hours do you sleep per night?\nEnter a number from 4 to 12, e.g. 7.5.",
        Step::Genetics => "Anything notable about your genetics or build?\nFree text, or send \"-\" to skip.",
        Step::TrainingExperience => "Do you have prior training experience?",
        Step::LastIdealForm => {
            "When were you last in your ideal form?\nEnter a date like 15.06.2020, or send \"never\"."
        }
        Step::TrainingFocus => "Which area do you want to focus on?",
        Step::TrainingLocation => "Where will you train?",
        Step::TrainingTime => "How long should one session be, in minutes?\nEnter a number from 30 to 120.",
        Step::TrainingDays => "How many days per week can you train?\nEnter a number from 0 to 7.",
        Step::TrainingType => "What training style do you prefer?",
        Step::TrainingDifficulty => "What difficulty level suits you?",
        Step::Injuries => "Any injuries or restrictions to keep in mind?\nFree text, or send \"-\" to skip.",
        Step::Flexibility => "How would you rate your flexibility?",
        Step::Endurance => "How would you rate your endurance?",
        Step::Confirmation => "Please review your answers. Is everything correct?",
    }
}

const GENDER_OPTIONS: &[StepOption] = &[
    opt("Male", "male"),
    opt("Female", "female"),
    opt("Other", "other"),
];

const BODY_TYPE_OPTIONS: &[StepOption] = &[
    opt("Ectomorph (lean)", "ectomorph"),
    opt("Mesomorph (muscular)", "mesomorph"),
    opt("Endomorph (stocky)", "endomorph"),
    opt("Not sure", "unknown"),
];

const GOAL_OPTIONS: &[StepOption] = &[
    opt("Lose weight", "lose_weight"),
    opt("Gain muscle", "gain_muscle"),
    opt("Maintain shape", "maintain"),
    opt("Improve health", "improve_health"),
    opt("Improve endurance", "improve_endurance"),
    opt("Body recomposition", "body_recomposition"),
];

const LIFESTYLE_OPTIONS: &[StepOption] = &[
    opt("Sedentary", "sedentary"),
    opt("Lightly active", "lightly_active"),
    opt("Moderately active", "moderately_active"),
    opt("Very active", "very_active"),
    opt("Extremely active", "extremely_active"),
];

const EXPERIENCE_OPTIONS: &[StepOption] = &[opt("Yes", "yes"), opt("No", "no")];

const FOCUS_OPTIONS: &[StepOption] = &[
    opt("Full body", "full_body"),
    opt("Upper body", "upper_body"),
    opt("Lower body", "lower_body"),
    opt("Core", "core"),
    opt("Back", "back"),
    opt("Glutes", "glutes"),
];

const LOCATION_OPTIONS: &[StepOption] = &[
    opt("At home", "home"),
    opt("In the gym", "gym"),
    opt("Outdoors", "outdoor"),
];

const TRAINING_TYPE_OPTIONS: &[StepOption] = &[
    opt("Strength", "strength"),
    opt("Cardio", "cardio"),
    opt("HIIT", "hiit"),
    opt("Yoga", "yoga"),
    opt("CrossFit", "crossfit"),
    opt("Mixed", "mixed"),
];

const DIFFICULTY_OPTIONS: &[StepOption] = &[
    opt("Beginner", "beginner"),
    opt("Intermediate", "intermediate"),
    opt("Advanced", "advanced"),
    opt("Expert", "expert"),
];

const FITNESS_LEVEL_OPTIONS: &[StepOption] = &[
    opt("Excellent", "excellent"),
    opt("Good", "good"),
    opt("Average", "average"),
    opt("Poor", "poor"),
    opt("Very poor", "very_poor"),
];

const CONFIRMATION_OPTIONS: &[StepOption] = &[
    opt("Yes, save", ACTION_SAVE),
    opt("No, edit", ACTION_EDIT),
    opt("Cancel", ACTION_CANCEL),
];

/// The option table for a choice step. Empty for free-text steps.
pub fn step_options(step: Step) -> &'static [StepOption] {
    match step {
        Step::Gender => GENDER_OPTIONS,
        Step::BodyType => BODY_TYPE_OPTIONS,
        Step::Goal => GOAL_OPTIONS,
        Step::Lifestyle => LIFESTYLE_OPTIONS,
        Step::TrainingExperience => EXPERIENCE_OPTIONS,
        Step::TrainingFocus => FOCUS_OPTIONS,
        Step::TrainingLocation => LOCATION_OPTIONS,
        Step::TrainingType => TRAINING_TYPE_OPTIONS,
        Step::TrainingDifficulty => DIFFICULTY_OPTIONS,
        Step::Flexibility | Step::Endurance => FITNESS_LEVEL_OPTIONS,
        Step::Confirmation => CONFIRMATION_OPTIONS,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::step::InputKind;

    #[test]
    fn choice_steps_have_options_text_steps_do_not() {
        let mut step = Step::first();
        loop {
            match step.input_kind() {
                InputKind::Choice => assert!(
                    !step_options(step).is_empty(),
                    "{step} should offer options"
                ),
                InputKind::Text => {
                    assert!(step_options(step).is_empty(), "{step} should be free text")
                }
            }
            match step.next() {
                Some(next) => step = next,
                None => break,
            }
        }
    }

    #[test]
    fn option_tables_outlive_the_call() {
        // The tables back inline keyboards that are serialized long after
        // the lookup, so the borrow must be 'static.
        let options: &'static [StepOption] = step_options(Step::Gender);
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn option_ids_are_unique_per_step() {
        let mut step = Step::first();
        loop {
            let options = step_options(step);
            for (i, a) in options.iter().enumerate() {
                for b in &options[i + 1..] {
                    assert_ne!(a.id, b.id, "duplicate option id on {step}");
                }
            }
            match step.next() {
                Some(next) => step = next,
                None => break,
            }
        }
    }

    #[test]
    fn every_step_has_prompt_text() {
        let mut step = Step::first();
        loop {
            assert!(!step_prompt(step).is_empty());
            match step.next() {
                Some(next) => step = next,
                None => break,
            }
        }
    }
}
