//! User profile — persisted attributes, goals, and preferences.

pub mod draft;
pub mod model;

pub use draft::{DraftProfile, ProfileUpdate};
pub use model::{
    BodyType, Difficulty, FitnessLevel, Gender, Goal, Lifestyle, Profile, TrainingFocus,
    TrainingLocation, TrainingType,
};
