//! Telegram channel — long-polls the Bot API for updates.
//!
//! Thin presentation layer: it forwards raw answers into the questionnaire
//! session and renders session outcomes, profiles, and matched plans. Choice
//! steps are presented as inline keyboards whose callback data is the stored
//! option id.

use std::collections::HashMap;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::error::ChannelError;
use crate::matching::MatchingEngine;
use crate::profile::Profile;
use crate::questionnaire::{AnswerOutcome, QuestionnaireSession, StepOption};
use crate::store::Database;

const WELCOME: &str = "Welcome to FitMatch!\n\n\
    /questionnaire — fill in your fitness profile\n\
    /profile — show your saved profile\n\
    /plan — get your matched workout plan\n\
    /meal — get your matched meal plan";

/// Telegram channel — connects to the Bot API via long-polling.
pub struct TelegramChannel {
    bot_token: SecretString,
    poll_timeout_secs: u64,
    client: reqwest::Client,
    db: Arc<dyn Database>,
    engine: MatchingEngine,
    /// One in-progress questionnaire per user; a new /questionnaire
    /// discards the old session.
    sessions: Mutex<HashMap<String, QuestionnaireSession>>,
}

impl TelegramChannel {
    pub fn new(bot_token: SecretString, poll_timeout_secs: u64, db: Arc<dyn Database>) -> Self {
        let engine = MatchingEngine::new(Arc::clone(&db));
        Self {
            bot_token,
            poll_timeout_secs,
            client: reqwest::Client::new(),
            db,
            engine,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!(
            "https://api.telegram.org/bot{}/{method}",
            self.bot_token.expose_secret()
        )
    }

    /// Run the long-poll loop. Only returns on a startup-level failure.
    pub async fn run(&self) -> Result<(), ChannelError> {
        let mut offset: i64 = 0;
        info!("Telegram channel listening for updates...");

        loop {
            let body = serde_json::json!({
                "offset": offset,
                "timeout": self.poll_timeout_secs,
                "allowed_updates": ["message", "callback_query"],
            });

            let resp = match self
                .client
                .post(self.api_url("getUpdates"))
                .json(&body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    warn!("Telegram poll error: {e}");
                    tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                    continue;
                }
            };

            let data: serde_json::Value = match resp.json().await {
                Ok(d) => d,
                Err(e) => {
                    warn!("Telegram parse error: {e}");
                    tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                    continue;
                }
            };

            let Some(results) = data.get("result").and_then(serde_json::Value::as_array) else {
                continue;
            };

            for update in results {
                if let Some(uid) = update.get("update_id").and_then(serde_json::Value::as_i64) {
                    offset = uid + 1;
                }

                if let Err(e) = self.handle_update(update).await {
                    warn!("Failed to handle Telegram update: {e}");
                }
            }
        }
    }

    async fn handle_update(&self, update: &serde_json::Value) -> Result<(), ChannelError> {
        if let Some(callback) = update.get("callback_query") {
            return self.handle_callback(callback).await;
        }

        let Some(message) = update.get("message") else {
            return Ok(());
        };
        let Some(text) = message.get("text").and_then(serde_json::Value::as_str) else {
            return Ok(());
        };
        let Some(user_id) = message
            .get("from")
            .and_then(|f| f.get("id"))
            .and_then(serde_json::Value::as_i64)
        else {
            return Ok(());
        };
        let chat_id = message
            .get("chat")
            .and_then(|c| c.get("id"))
            .and_then(serde_json::Value::as_i64)
            .unwrap_or(user_id);

        self.handle_text(&chat_id.to_string(), &user_id.to_string(), text)
            .await
    }

    async fn handle_text(
        &self,
        chat_id: &str,
        user_ref: &str,
        text: &str,
    ) -> Result<(), ChannelError> {
        match text.trim() {
            "/start" => self.send_text(chat_id, WELCOME).await,
            "/questionnaire" => {
                // Reset-stack semantics: a fresh start always replaces any
                // in-flight session.
                let session = QuestionnaireSession::new(user_ref);
                let prompt = render_prompt(&session);
                self.sessions
                    .lock()
                    .await
                    .insert(user_ref.to_string(), session);
                self.send_prompt(chat_id, prompt).await
            }
            "/profile" => self.show_profile(chat_id, user_ref).await,
            "/plan" => self.show_workout_plan(chat_id, user_ref).await,
            "/meal" => self.show_meal_plan(chat_id, user_ref).await,
            answer => self.handle_answer(chat_id, user_ref, answer).await,
        }
    }

    async fn handle_callback(&self, callback: &serde_json::Value) -> Result<(), ChannelError> {
        let Some(data) = callback.get("data").and_then(serde_json::Value::as_str) else {
            return Ok(());
        };
        let Some(user_id) = callback
            .get("from")
            .and_then(|f| f.get("id"))
            .and_then(serde_json::Value::as_i64)
        else {
            return Ok(());
        };
        let chat_id = callback
            .get("message")
            .and_then(|m| m.get("chat"))
            .and_then(|c| c.get("id"))
            .and_then(serde_json::Value::as_i64)
            .unwrap_or(user_id);

        if let Some(callback_id) = callback.get("id").and_then(serde_json::Value::as_str) {
            self.answer_callback(callback_id).await;
        }

        self.handle_answer(&chat_id.to_string(), &user_id.to_string(), data)
            .await
    }

    /// Feed one raw answer (message text or callback data) into the session.
    async fn handle_answer(
        &self,
        chat_id: &str,
        user_ref: &str,
        raw: &str,
    ) -> Result<(), ChannelError> {
        let (outcome, prompt) = {
            let mut sessions = self.sessions.lock().await;
            let Some(session) = sessions.get_mut(user_ref) else {
                drop(sessions);
                return self
                    .send_text(
                        chat_id,
                        "No questionnaire in progress. Send /questionnaire to begin.",
                    )
                    .await;
            };
            let outcome = session.answer(raw);
            let prompt = render_prompt(session);
            (outcome, prompt)
        };

        match outcome {
            AnswerOutcome::Advanced(_) => self.send_prompt(chat_id, prompt).await,
            AnswerOutcome::Rejected(message) => self.send_text(chat_id, &message).await,
            AnswerOutcome::Cancelled => {
                self.sessions.lock().await.remove(user_ref);
                self.send_text(chat_id, "Questionnaire cancelled. Nothing was saved.")
                    .await
            }
            AnswerOutcome::ReadyToSave => {
                let session = {
                    let sessions = self.sessions.lock().await;
                    sessions.get(user_ref).cloned()
                };
                let Some(session) = session else {
                    return Ok(());
                };
                match session.save(self.db.as_ref()).await {
                    Ok(_) => {
                        self.sessions.lock().await.remove(user_ref);
                        self.send_text(
                            chat_id,
                            "Profile saved! Send /plan for your workout plan or /meal for your meal plan.",
                        )
                        .await
                    }
                    Err(_) => {
                        // Session stays so the user can press save again.
                        self.send_text(
                            chat_id,
                            "Sorry, saving failed. Your answers are kept — please try again.",
                        )
                        .await
                    }
                }
            }
        }
    }

    async fn show_profile(&self, chat_id: &str, user_ref: &str) -> Result<(), ChannelError> {
        match self.db.fetch_profile(user_ref).await {
            Ok(Some(profile)) => {
                self.send_text(chat_id, &render_profile(&profile)).await
            }
            Ok(None) => {
                self.send_text(
                    chat_id,
                    "You have no profile yet. Send /questionnaire to create one.",
                )
                .await
            }
            Err(e) => {
                warn!(user_ref, error = %e, "Failed to load profile");
                self.send_text(chat_id, "Something went wrong, please try again later.")
                    .await
            }
        }
    }

    async fn show_workout_plan(&self, chat_id: &str, user_ref: &str) -> Result<(), ChannelError> {
        let profile = match self.db.fetch_profile(user_ref).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(user_ref, error = %e, "Failed to load profile");
                return self
                    .send_text(chat_id, "Something went wrong, please try again later.")
                    .await;
            }
        };
        let Some(profile) = profile.filter(|p| p.profile_completed) else {
            return self
                .send_text(
                    chat_id,
                    "Finish the questionnaire first: send /questionnaire.",
                )
                .await;
        };

        match self.engine.best_workout_plan(&profile).await {
            Ok(Some(plan)) => {
                let mut text = format!("Your workout plan: {}", plan.name);
                if let Some(description) = &plan.description {
                    text.push_str(&format!("\n\n{description}"));
                }
                self.send_text(chat_id, &text).await
            }
            Ok(None) => {
                self.send_text(
                    chat_id,
                    "No workout plan fits your profile yet — check back soon.",
                )
                .await
            }
            Err(e) => {
                warn!(user_ref, error = %e, "Workout matching failed");
                self.send_text(chat_id, "Something went wrong, please try again later.")
                    .await
            }
        }
    }

    async fn show_meal_plan(&self, chat_id: &str, user_ref: &str) -> Result<(), ChannelError> {
        let profile = match self.db.fetch_profile(user_ref).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(user_ref, error = %e, "Failed to load profile");
                return self
                    .send_text(chat_id, "Something went wrong, please try again later.")
                    .await;
            }
        };
        let Some(profile) = profile.filter(|p| p.profile_completed) else {
            return self
                .send_text(
                    chat_id,
                    "Finish the questionnaire first: send /questionnaire.",
                )
                .await;
        };

        match self.engine.best_meal_plan(&profile).await {
            Ok(Some(plan)) => {
                let mut text = format!(
                    "Your meal plan: {} ({}-{} kcal)",
                    plan.name, plan.calories_range.0, plan.calories_range.1
                );
                if let Some(description) = &plan.description {
                    text.push_str(&format!("\n\n{description}"));
                }
                self.send_text(chat_id, &text).await
            }
            Ok(None) => {
                self.send_text(
                    chat_id,
                    "No meal plan fits your profile yet — check back soon.",
                )
                .await
            }
            Err(e) => {
                warn!(user_ref, error = %e, "Meal matching failed");
                self.send_text(chat_id, "Something went wrong, please try again later.")
                    .await
            }
        }
    }

    // ── Sending ─────────────────────────────────────────────────────

    async fn send_prompt(&self, chat_id: &str, prompt: RenderedPrompt) -> Result<(), ChannelError> {
        let mut body = serde_json::json!({
            "chat_id": chat_id,
            "text": prompt.text,
        });
        if !prompt.options.is_empty() {
            let keyboard: Vec<Vec<serde_json::Value>> = prompt
                .options
                .iter()
                .map(|o| vec![serde_json::json!({"text": o.label, "callback_data": o.id})])
                .collect();
            body["reply_markup"] = serde_json::json!({ "inline_keyboard": keyboard });
        }
        self.post_message(&body).await
    }

    async fn send_text(&self, chat_id: &str, text: &str) -> Result<(), ChannelError> {
        let body = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
        });
        self.post_message(&body).await
    }

    async fn post_message(&self, body: &serde_json::Value) -> Result<(), ChannelError> {
        let resp = self
            .client
            .post(self.api_url("sendMessage"))
            .json(body)
            .send()
            .await
            .map_err(|e| ChannelError::SendFailed {
                name: "telegram".into(),
                reason: e.to_string(),
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let err = resp.text().await.unwrap_or_default();
            return Err(ChannelError::SendFailed {
                name: "telegram".into(),
                reason: format!("sendMessage failed ({status}): {err}"),
            });
        }
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) {
        let body = serde_json::json!({ "callback_query_id": callback_id });
        if let Err(e) = self
            .client
            .post(self.api_url("answerCallbackQuery"))
            .json(&body)
            .send()
            .await
        {
            warn!("answerCallbackQuery failed: {e}");
        }
    }
}

/// A prompt ready to send: text plus optional keyboard.
struct RenderedPrompt {
    text: String,
    options: &'static [StepOption],
}

fn render_prompt(session: &QuestionnaireSession) -> RenderedPrompt {
    let (prompt, options) = session.current_prompt();
    let text = if session.current_step().is_confirmation() {
        let mut text = String::from("Please review your answers:\n\n");
        for line in session.summary() {
            text.push_str(&line);
            text.push('\n');
        }
        text.push_str("\nIs everything correct?");
        text
    } else {
        prompt.to_string()
    };
    RenderedPrompt { text, options }
}

fn render_profile(profile: &Profile) -> String {
    let mut lines = vec!["Your profile".to_string(), String::new()];

    if let Some(age) = profile.age {
        lines.push(format!("Age: {age} years"));
    }
    if let Some(gender) = profile.gender {
        lines.push(format!("Gender: {}", gender.label()));
    }
    if let Some(height) = profile.height_cm {
        lines.push(format!("Height: {height} cm"));
    }
    if let Some(weight) = profile.weight_kg {
        lines.push(format!("Weight: {weight} kg"));
    }
    if let Some(target) = profile.target_weight_kg {
        lines.push(format!("Target weight: {target} kg"));
    }
    if let Some(body_type) = profile.body_type {
        lines.push(format!("Body type: {}", body_type.label()));
    }
    if let Some(goal) = profile.goal {
        lines.push(format!("Goal: {}", goal.label()));
    }
    if let Some(lifestyle) = profile.lifestyle {
        lines.push(format!("Lifestyle: {}", lifestyle.label()));
    }
    if let Some(sleep) = profile.sleep_hours {
        lines.push(format!("Sleep: {sleep} h"));
    }
    lines.push(format!(
        "Training experience: {}",
        if profile.is_experienced_training { "Yes" } else { "No" }
    ));
    if let Some(focus) = profile.training_focus_area {
        lines.push(format!("Focus area: {}", focus.label()));
    }
    if let Some(location) = profile.training_location {
        lines.push(format!("Location: {}", location.label()));
    }
    if let Some(minutes) = profile.training_time_minutes {
        lines.push(format!("Session length: {minutes} min"));
    }
    if let Some(days) = profile.training_days_per_week {
        lines.push(format!("Days per week: {days}"));
    }
    if let Some(training_type) = profile.preferred_training_type {
        lines.push(format!("Training style: {}", training_type.label()));
    }
    if let Some(difficulty) = profile.preferred_difficulty {
        lines.push(format!("Difficulty: {}", difficulty.label()));
    }
    if let Some(ref injuries) = profile.injuries_description {
        lines.push(format!("Injuries: {injuries}"));
    }
    if let Some(flexibility) = profile.flexibility_level {
        lines.push(format!("Flexibility: {}", flexibility.label()));
    }
    if let Some(endurance) = profile.endurance_level {
        lines.push(format!("Endurance: {}", endurance.label()));
    }

    lines.push(String::new());
    if profile.profile_completed {
        let completed = profile
            .completed_at
            .map(|t| t.format("%d.%m.%Y %H:%M").to_string())
            .unwrap_or_default();
        lines.push(format!("Questionnaire: completed {completed}"));
    } else {
        lines.push("Questionnaire: not completed — send /questionnaire".to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn render_prompt_for_first_step_has_no_keyboard() {
        let session = QuestionnaireSession::new("u1");
        let prompt = render_prompt(&session);
        assert!(prompt.text.contains("How old are you?"));
        assert!(prompt.options.is_empty());
    }

    #[test]
    fn render_prompt_for_choice_step_has_keyboard() {
        let mut session = QuestionnaireSession::new("u1");
        session.answer("30");
        let prompt = render_prompt(&session);
        assert!(!prompt.options.is_empty());
        assert!(prompt.options.iter().any(|o| o.id == "female"));
    }

    #[test]
    fn render_profile_shows_completion_state() {
        let mut profile = Profile::empty("u1");
        profile.age = Some(28);
        assert!(render_profile(&profile).contains("not completed"));

        profile.profile_completed = true;
        profile.completed_at = Some(Utc::now());
        assert!(render_profile(&profile).contains("completed"));
    }
}
