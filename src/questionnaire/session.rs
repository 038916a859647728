//! Questionnaire session — one user's in-progress intake.
//!
//! The session owns the step pointer and the typed draft accumulator. A valid
//! answer writes exactly one field and advances exactly one step; an invalid
//! answer changes nothing and re-prompts. Terminal states are saved and
//! cancelled. Starting a new session for the same user discards this one.

use tracing::{info, warn};

use crate::error::DatabaseError;
use crate::profile::{
    BodyType, Difficulty, DraftProfile, FitnessLevel, Gender, Goal, Lifestyle, Profile,
    TrainingFocus, TrainingLocation, TrainingType,
};
use crate::store::Database;
use crate::validators;

use super::prompts::{self, StepOption};
use super::step::Step;
use super::summary::summary_lines;

/// What happened to one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Answer accepted; the session is now at this step.
    Advanced(Step),
    /// Answer rejected; same step, show the message and re-prompt.
    Rejected(String),
    /// The user confirmed saving; the caller should invoke [`QuestionnaireSession::save`].
    ReadyToSave,
    /// The user abandoned the questionnaire; discard the session.
    Cancelled,
}

/// A save attempt that failed. The accumulator is preserved so the user can
/// retry; the database error is kept for operator logs.
#[derive(Debug, thiserror::Error)]
#[error("Failed to save questionnaire: {source}")]
pub struct SaveError {
    #[from]
    pub source: DatabaseError,
}

/// One user's questionnaire session.
#[derive(Debug, Clone)]
pub struct QuestionnaireSession {
    user_ref: String,
    step: Step,
    draft: DraftProfile,
}

impl QuestionnaireSession {
    pub fn new(user_ref: impl Into<String>) -> Self {
        Self {
            user_ref: user_ref.into(),
            step: Step::first(),
            draft: DraftProfile::default(),
        }
    }

    pub fn user_ref(&self) -> &str {
        &self.user_ref
    }

    pub fn current_step(&self) -> Step {
        self.step
    }

    /// Prompt text and options for the current step.
    pub fn current_prompt(&self) -> (&'static str, &'static [StepOption]) {
        (prompts::step_prompt(self.step), prompts::step_options(self.step))
    }

    /// Summary lines for the confirmation step.
    pub fn summary(&self) -> Vec<String> {
        summary_lines(&self.draft)
    }

    pub fn draft(&self) -> &DraftProfile {
        &self.draft
    }

    /// Submit one raw answer for the current step.
    ///
    /// For text steps `raw` is the message text; for choice steps it is the
    /// selected option id. Unrecognized option ids fall back to the field's
    /// documented default rather than rejecting.
    pub fn answer(&mut self, raw: &str) -> AnswerOutcome {
        match self.step {
            Step::Age => match validators::validate_age(raw) {
                Ok(age) => {
                    self.draft.age = Some(age);
                    self.advance()
                }
                Err(rejection) => AnswerOutcome::Rejected(rejection.message),
            },
            Step::Gender => {
                self.draft.gender = Some(Gender::from_option_id(raw));
                self.advance()
            }
            Step::Height => match validators::validate_height(raw) {
                Ok(height) => {
                    self.draft.height_cm = Some(height);
                    self.advance()
                }
                Err(rejection) => AnswerOutcome::Rejected(rejection.message),
            },
            Step::Weight => match validators::validate_weight(raw) {
                Ok(weight) => {
                    self.draft.weight_kg = Some(weight);
                    self.advance()
                }
                Err(rejection) => AnswerOutcome::Rejected(rejection.message),
            },
            Step::TargetWeight => match validators::validate_weight(raw) {
                Ok(weight) => {
                    self.draft.target_weight_kg = Some(weight);
                    self.advance()
                }
                Err(rejection) => AnswerOutcome::Rejected(rejection.message),
            },
            Step::BodyType => {
                self.draft.body_type = Some(BodyType::from_option_id(raw));
                self.advance()
            }
            Step::Goal => {
                self.draft.goal = Some(Goal::from_option_id(raw));
                self.advance()
            }
            Step::Lifestyle => {
                self.draft.lifestyle = Some(Lifestyle::from_option_id(raw));
                self.advance()
            }
            Step::SleepHours => match validators::validate_sleep_hours(raw) {
                Ok(hours) => {
                    self.draft.sleep_hours = Some(hours);
                    self.advance()
                }
                Err(rejection) => AnswerOutcome::Rejected(rejection.message),
            },
            Step::Genetics => {
                self.draft.genetics_description = free_text(raw);
                self.advance()
            }
            Step::TrainingExperience => {
                self.draft.is_experienced_training = Some(raw == "yes");
                self.advance()
            }
            Step::LastIdealForm => match validators::validate_last_form_date(raw) {
                Ok(date) => {
                    self.draft.last_ideal_form_date = Some(date);
                    self.advance()
                }
                Err(rejection) => AnswerOutcome::Rejected(rejection.message),
            },
            Step::TrainingFocus => {
                self.draft.training_focus_area = Some(TrainingFocus::from_option_id(raw));
                self.advance()
            }
            Step::TrainingLocation => {
                self.draft.training_location = Some(TrainingLocation::from_option_id(raw));
                self.advance()
            }
            Step::TrainingTime => match validators::validate_training_minutes(raw) {
                Ok(minutes) => {
                    self.draft.training_time_minutes = Some(minutes);
                    self.advance()
                }
                Err(rejection) => AnswerOutcome::Rejected(rejection.message),
            },
            Step::TrainingDays => match validators::validate_training_days(raw) {
                Ok(days) => {
                    self.draft.training_days_per_week = Some(days);
                    self.advance()
                }
                Err(rejection) => AnswerOutcome::Rejected(rejection.message),
            },
            Step::TrainingType => {
                self.draft.preferred_training_type = Some(TrainingType::from_option_id(raw));
                self.advance()
            }
            Step::TrainingDifficulty => {
                self.draft.preferred_difficulty = Some(Difficulty::from_option_id(raw));
                self.advance()
            }
            Step::Injuries => {
                self.draft.injuries_description = free_text(raw);
                self.advance()
            }
            Step::Flexibility => {
                self.draft.flexibility_level = Some(FitnessLevel::from_option_id(raw));
                self.advance()
            }
            Step::Endurance => {
                self.draft.endurance_level = Some(FitnessLevel::from_option_id(raw));
                self.advance()
            }
            Step::Confirmation => match raw {
                prompts::ACTION_SAVE => AnswerOutcome::ReadyToSave,
                prompts::ACTION_EDIT => {
                    // Rewind to the first step; prior answers stay in the draft.
                    self.step = Step::first();
                    AnswerOutcome::Advanced(self.step)
                }
                prompts::ACTION_CANCEL => AnswerOutcome::Cancelled,
                other => AnswerOutcome::Rejected(format!(
                    "Please choose one of the offered actions, not \"{other}\"."
                )),
            },
        }
    }

    fn advance(&mut self) -> AnswerOutcome {
        // answer() is only reachable on non-terminal steps, so next() exists.
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        AnswerOutcome::Advanced(self.step)
    }

    /// Persist the draft, merged over the defaults table.
    ///
    /// Sets `profile_completed = true` and `completed_at` to the save time.
    /// On failure the accumulator is untouched and the user may retry.
    pub async fn save(&self, db: &dyn Database) -> Result<Profile, SaveError> {
        let update = self.draft.clone().into_update();
        match db.upsert_profile(&self.user_ref, &update).await {
            Ok(profile) => {
                info!(user_ref = %self.user_ref, "Questionnaire saved");
                Ok(profile)
            }
            Err(e) => {
                warn!(
                    user_ref = %self.user_ref,
                    fields = %serde_json::to_string(&update).unwrap_or_default(),
                    error = %e,
                    "Failed to persist questionnaire answers"
                );
                Err(SaveError::from(e))
            }
        }
    }
}

/// Optional free-text answer: "-" (or blank) means skipped.
fn free_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "-" {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::catalog::{MealPlan, PlanKind, WorkoutPlan};
    use crate::profile::ProfileUpdate;

    /// A store whose writes always fail.
    struct BrokenStore;

    #[async_trait]
    impl Database for BrokenStore {
        async fn run_migrations(&self) -> Result<(), DatabaseError> {
            Ok(())
        }
        async fn fetch_profile(&self, _: &str) -> Result<Option<Profile>, DatabaseError> {
            Ok(None)
        }
        async fn upsert_profile(
            &self,
            _: &str,
            _: &ProfileUpdate,
        ) -> Result<Profile, DatabaseError> {
            Err(DatabaseError::Query("disk I/O error".to_string()))
        }
        async fn list_profiles(&self, _: usize) -> Result<Vec<Profile>, DatabaseError> {
            Ok(Vec::new())
        }
        async fn insert_workout_plan(&self, _: &WorkoutPlan) -> Result<(), DatabaseError> {
            Ok(())
        }
        async fn insert_meal_plan(&self, _: &MealPlan) -> Result<(), DatabaseError> {
            Ok(())
        }
        async fn fetch_active_workout_plans(&self) -> Result<Vec<WorkoutPlan>, DatabaseError> {
            Ok(Vec::new())
        }
        async fn fetch_active_meal_plans(&self) -> Result<Vec<MealPlan>, DatabaseError> {
            Ok(Vec::new())
        }
        async fn list_workout_plans(&self) -> Result<Vec<WorkoutPlan>, DatabaseError> {
            Ok(Vec::new())
        }
        async fn list_meal_plans(&self) -> Result<Vec<MealPlan>, DatabaseError> {
            Ok(Vec::new())
        }
        async fn set_plan_active(
            &self,
            _: PlanKind,
            _: Uuid,
            _: bool,
        ) -> Result<bool, DatabaseError> {
            Ok(false)
        }
    }

    fn answer_all_steps(session: &mut QuestionnaireSession) {
        let answers: &[(&str, Step)] = &[
            ("30", Step::Gender),
            ("male", Step::Height),
            ("180", Step::Weight),
            ("82,4", Step::TargetWeight),
            ("78", Step::BodyType),
            ("mesomorph", Step::Goal),
            ("lose_weight", Step::Lifestyle),
            ("moderately_active", Step::SleepHours),
            ("7.5", Step::Genetics),
            ("-", Step::TrainingExperience),
            ("no", Step::LastIdealForm),
            ("never", Step::TrainingFocus),
            ("full_body", Step::TrainingLocation),
            ("gym", Step::TrainingTime),
            ("60", Step::TrainingDays),
            ("3", Step::TrainingType),
            ("strength", Step::TrainingDifficulty),
            ("beginner", Step::Injuries),
            ("old knee injury", Step::Flexibility),
            ("average", Step::Endurance),
            ("good", Step::Confirmation),
        ];
        for (raw, expected_next) in answers {
            assert_eq!(
                session.answer(raw),
                AnswerOutcome::Advanced(*expected_next),
                "answer {raw:?} should land on {expected_next:?}"
            );
        }
    }

    #[test]
    fn valid_answer_advances_exactly_one_step() {
        let mut session = QuestionnaireSession::new("u1");
        assert_eq!(session.current_step(), Step::Age);
        assert_eq!(session.answer("25"), AnswerOutcome::Advanced(Step::Gender));
        assert_eq!(session.current_step(), Step::Gender);
        assert_eq!(session.draft().age, Some(25));
    }

    #[test]
    fn invalid_answer_keeps_step_and_accumulator() {
        let mut session = QuestionnaireSession::new("u1");
        let before = session.draft().clone();
        let outcome = session.answer("thirteen");
        assert!(matches!(outcome, AnswerOutcome::Rejected(_)));
        assert_eq!(session.current_step(), Step::Age);
        assert_eq!(*session.draft(), before);
    }

    #[test]
    fn full_walk_reaches_confirmation() {
        let mut session = QuestionnaireSession::new("u1");
        answer_all_steps(&mut session);
        assert_eq!(session.current_step(), Step::Confirmation);
        let draft = session.draft();
        assert_eq!(draft.age, Some(30));
        assert_eq!(draft.weight_kg, Some(dec!(82.4)));
        assert_eq!(draft.target_weight_kg, Some(dec!(78)));
        assert_eq!(draft.goal, Some(Goal::LoseWeight));
        assert_eq!(draft.is_experienced_training, Some(false));
        assert_eq!(draft.last_ideal_form_date, Some(None));
        assert!(draft.genetics_description.is_none());
        assert_eq!(
            draft.injuries_description.as_deref(),
            Some("old knee injury")
        );
        assert!(!session.summary().is_empty());
    }

    #[test]
    fn unrecognized_selection_falls_back_to_default() {
        let mut session = QuestionnaireSession::new("u1");
        session.answer("25");
        // Gender step: garbage falls back to male.
        assert_eq!(session.answer("garbage"), AnswerOutcome::Advanced(Step::Height));
        assert_eq!(session.draft().gender, Some(Gender::Male));
    }

    #[test]
    fn edit_rewinds_without_clearing_answers() {
        let mut session = QuestionnaireSession::new("u1");
        answer_all_steps(&mut session);
        assert_eq!(
            session.answer(prompts::ACTION_EDIT),
            AnswerOutcome::Advanced(Step::Age)
        );
        assert_eq!(session.current_step(), Step::Age);
        assert_eq!(session.draft().age, Some(30));
    }

    #[test]
    fn cancel_terminates_session() {
        let mut session = QuestionnaireSession::new("u1");
        answer_all_steps(&mut session);
        assert_eq!(session.answer(prompts::ACTION_CANCEL), AnswerOutcome::Cancelled);
    }

    #[test]
    fn save_action_signals_ready() {
        let mut session = QuestionnaireSession::new("u1");
        answer_all_steps(&mut session);
        assert_eq!(session.answer(prompts::ACTION_SAVE), AnswerOutcome::ReadyToSave);
    }

    #[tokio::test]
    async fn failed_save_keeps_draft_for_retry() {
        let mut session = QuestionnaireSession::new("u1");
        answer_all_steps(&mut session);
        assert_eq!(
            session.answer(prompts::ACTION_SAVE),
            AnswerOutcome::ReadyToSave
        );

        let before = session.draft().clone();
        let err = session.save(&BrokenStore).await.unwrap_err();
        assert!(matches!(err.source, DatabaseError::Query(_)));

        // The accumulator is untouched and the session still accepts a
        // second save attempt.
        assert_eq!(*session.draft(), before);
        assert_eq!(session.current_step(), Step::Confirmation);
        assert_eq!(
            session.answer(prompts::ACTION_SAVE),
            AnswerOutcome::ReadyToSave
        );
    }

    #[test]
    fn unknown_confirmation_action_is_rejected() {
        let mut session = QuestionnaireSession::new("u1");
        answer_all_steps(&mut session);
        assert!(matches!(
            session.answer("maybe"),
            AnswerOutcome::Rejected(_)
        ));
        assert_eq!(session.current_step(), Step::Confirmation);
    }
}
