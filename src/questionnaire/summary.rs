//! Confirmation summary — human-readable rendering of the draft.

use crate::profile::DraftProfile;

/// Free-text answers longer than this are shortened in the summary only;
/// the full value is still persisted.
const FREE_TEXT_PREVIEW_CHARS: usize = 50;

fn preview(text: &str) -> String {
    if text.chars().count() > FREE_TEXT_PREVIEW_CHARS {
        let short: String = text.chars().take(FREE_TEXT_PREVIEW_CHARS).collect();
        format!("{short}…")
    } else {
        text.to_string()
    }
}

/// Render every answered field as a "Label: value" line, in step order.
pub fn summary_lines(draft: &DraftProfile) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(age) = draft.age {
        lines.push(format!("Age: {age} years"));
    }
    if let Some(gender) = draft.gender {
        lines.push(format!("Gender: {}", gender.label()));
    }
    if let Some(height) = draft.height_cm {
        lines.push(format!("Height: {height} cm"));
    }
    if let Some(weight) = draft.weight_kg {
        lines.push(format!("Weight: {weight} kg"));
    }
    if let Some(target) = draft.target_weight_kg {
        lines.push(format!("Target weight: {target} kg"));
    }
    if let Some(body_type) = draft.body_type {
        lines.push(format!("Body type: {}", body_type.label()));
    }
    if let Some(goal) = draft.goal {
        lines.push(format!("Goal: {}", goal.label()));
    }
    if let Some(lifestyle) = draft.lifestyle {
        lines.push(format!("Lifestyle: {}", lifestyle.label()));
    }
    if let Some(sleep) = draft.sleep_hours {
        lines.push(format!("Sleep: {sleep} h"));
    }
    if let Some(ref genetics) = draft.genetics_description {
        lines.push(format!("Genetics: {}", preview(genetics)));
    }
    if let Some(experienced) = draft.is_experienced_training {
        lines.push(format!(
            "Training experience: {}",
            if experienced { "Yes" } else { "No" }
        ));
    }
    if let Some(last_form) = draft.last_ideal_form_date {
        let value = match last_form {
            Some(date) => date.format("%d.%m.%Y").to_string(),
            None => "Never".to_string(),
        };
        lines.push(format!("Last ideal form: {value}"));
    }
    if let Some(focus) = draft.training_focus_area {
        lines.push(format!("Focus area: {}", focus.label()));
    }
    if let Some(location) = draft.training_location {
        lines.push(format!("Location: {}", location.label()));
    }
    if let Some(minutes) = draft.training_time_minutes {
        lines.push(format!("Session length: {minutes} min"));
    }
    if let Some(days) = draft.training_days_per_week {
        lines.push(format!("Days per week: {days}"));
    }
    if let Some(training_type) = draft.preferred_training_type {
        lines.push(format!("Training style: {}", training_type.label()));
    }
    if let Some(difficulty) = draft.preferred_difficulty {
        lines.push(format!("Difficulty: {}", difficulty.label()));
    }
    if let Some(ref injuries) = draft.injuries_description {
        lines.push(format!("Injuries: {}", preview(injuries)));
    }
    if let Some(flexibility) = draft.flexibility_level {
        lines.push(format!("Flexibility: {}", flexibility.label()));
    }
    if let Some(endurance) = draft.endurance_level {
        lines.push(format!("Endurance: {}", endurance.label()));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Gender, Goal};
    use rust_decimal_macros::dec;

    #[test]
    fn only_answered_fields_appear() {
        let draft = DraftProfile {
            age: Some(30),
            gender: Some(Gender::Female),
            weight_kg: Some(dec!(62.5)),
            goal: Some(Goal::LoseWeight),
            ..Default::default()
        };
        let lines = summary_lines(&draft);
        assert_eq!(
            lines,
            vec![
                "Age: 30 years",
                "Gender: Female",
                "Weight: 62.5 kg",
                "Goal: Lose weight",
            ]
        );
    }

    #[test]
    fn long_free_text_is_truncated_with_ellipsis() {
        let long = "x".repeat(80);
        let draft = DraftProfile {
            injuries_description: Some(long.clone()),
            ..Default::default()
        };
        let lines = summary_lines(&draft);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with('…'));
        assert!(lines[0].len() < long.len());
        // The stored value is untouched.
        assert_eq!(draft.injuries_description.as_deref(), Some(long.as_str()));
    }

    #[test]
    fn never_renders_as_never() {
        let draft = DraftProfile {
            last_ideal_form_date: Some(None),
            ..Default::default()
        };
        assert_eq!(summary_lines(&draft), vec!["Last ideal form: Never"]);
    }

    #[test]
    fn empty_draft_renders_nothing() {
        assert!(summary_lines(&DraftProfile::default()).is_empty());
    }
}
