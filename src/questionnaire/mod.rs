//! Questionnaire — linear intake state machine over validated answers.
//!
//! The questionnaire walks a user through a fixed sequence of steps, each
//! consuming one validated answer into a typed [`DraftProfile`], and ends at
//! a confirmation step with save / edit / cancel actions.
//!
//! [`DraftProfile`]: crate::profile::DraftProfile

pub mod prompts;
pub mod session;
pub mod step;
pub mod summary;

pub use prompts::{step_options, step_prompt, StepOption};
pub use session::{AnswerOutcome, QuestionnaireSession, SaveError};
pub use step::{InputKind, Step};
pub use summary::summary_lines;
