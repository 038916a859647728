//! fitmatch — conversational fitness intake and plan matching.

pub mod admin;
pub mod catalog;
pub mod channels;
pub mod config;
pub mod error;
pub mod matching;
pub mod profile;
pub mod questionnaire;
pub mod store;
pub mod validators;
