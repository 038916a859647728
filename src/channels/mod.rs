//! Chat transport — drives the questionnaire and renders matches.

pub mod telegram;

pub use telegram::TelegramChannel;
