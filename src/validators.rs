//! Answer validators — pure bounded parsers for raw questionnaire text.
//!
//! Each validator returns a tagged result: the parsed, bounded value, or a
//! [`Rejection`] carrying the re-prompt message. A rejection is an expected
//! outcome (the user mistyped), never an error that propagates.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

/// Why an answer was rejected. Carried back to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub message: String,
}

impl Rejection {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of validating one raw answer.
pub type Validated<T> = Result<T, Rejection>;

/// Age in years, 14–100 inclusive.
pub fn validate_age(text: &str) -> Validated<i32> {
    let age: i32 = text
        .trim()
        .parse()
        .map_err(|_| Rejection::new("Age must be a whole number from 14 to 100."))?;
    if (14..=100).contains(&age) {
        Ok(age)
    } else {
        Err(Rejection::new("Age must be a whole number from 14 to 100."))
    }
}

/// Height in centimetres, 100–250 inclusive.
pub fn validate_height(text: &str) -> Validated<i32> {
    let height: i32 = text
        .trim()
        .parse()
        .map_err(|_| Rejection::new("Height must be a whole number from 100 to 250 cm."))?;
    if (100..=250).contains(&height) {
        Ok(height)
    } else {
        Err(Rejection::new(
            "Height must be a whole number from 100 to 250 cm.",
        ))
    }
}

/// Weight in kilograms, 30.0–300.0 inclusive, rounded to one decimal place.
/// Accepts both comma and dot as the decimal separator.
pub fn validate_weight(text: &str) -> Validated<Decimal> {
    let normalized = text.trim().replace(',', ".");
    let weight = Decimal::from_str(&normalized).map_err(|_| {
        Rejection::new("Weight must be a number from 30 to 300 kg, e.g. 70.5.")
    })?;
    if weight >= dec!(30.0) && weight <= dec!(300.0) {
        Ok(weight.round_dp(1))
    } else {
        Err(Rejection::new(
            "Weight must be a number from 30 to 300 kg, e.g. 70.5.",
        ))
    }
}

/// Sleep hours per night, 0.0–24.0 inclusive.
///
/// The prompt advertises 4–12 hours but the accepted bound is deliberately
/// wider, matching the shipped behavior.
pub fn validate_sleep_hours(text: &str) -> Validated<Decimal> {
    let normalized = text.trim().replace(',', ".");
    let hours = Decimal::from_str(&normalized)
        .map_err(|_| Rejection::new("Sleep must be a number of hours, e.g. 7.5."))?;
    if hours >= Decimal::ZERO && hours <= dec!(24.0) {
        Ok(hours.round_dp(1))
    } else {
        Err(Rejection::new("Sleep must be between 0 and 24 hours."))
    }
}

/// Training session length in minutes, 0–300 inclusive.
///
/// Wider than the 30–120 the prompt advertises, same as sleep hours.
pub fn validate_training_minutes(text: &str) -> Validated<i32> {
    let minutes: i32 = text
        .trim()
        .parse()
        .map_err(|_| Rejection::new("Duration must be a whole number of minutes."))?;
    if (0..=300).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(Rejection::new("Duration must be between 0 and 300 minutes."))
    }
}

/// Training days per week, 0–7 inclusive.
pub fn validate_training_days(text: &str) -> Validated<i32> {
    let days: i32 = text
        .trim()
        .parse()
        .map_err(|_| Rejection::new("Days per week must be a whole number from 0 to 7."))?;
    if (0..=7).contains(&days) {
        Ok(days)
    } else {
        Err(Rejection::new(
            "Days per week must be a whole number from 0 to 7.",
        ))
    }
}

/// Case-insensitive tokens meaning "I was never in ideal form".
const NEVER_TOKENS: &[&str] = &["never", "никогда"];

/// Date of last ideal form, strict `day.month.year` format.
///
/// A sentinel token ("never" or its localized equivalent) maps to `Ok(None)`
/// rather than a parse failure.
pub fn validate_last_form_date(text: &str) -> Validated<Option<NaiveDate>> {
    let trimmed = text.trim();
    if NEVER_TOKENS
        .iter()
        .any(|t| trimmed.eq_ignore_ascii_case(t) || trimmed.to_lowercase() == *t)
    {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%d.%m.%Y")
        .map(Some)
        .map_err(|_| {
            Rejection::new("Date must look like 15.06.2020, or send \"never\".")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_boundaries() {
        assert!(validate_age("13").is_err());
        assert_eq!(validate_age("14"), Ok(14));
        assert_eq!(validate_age("100"), Ok(100));
        assert!(validate_age("101").is_err());
        assert!(validate_age("abc").is_err());
        assert!(validate_age("").is_err());
    }

    #[test]
    fn age_trims_whitespace() {
        assert_eq!(validate_age("  42  "), Ok(42));
    }

    #[test]
    fn height_boundaries() {
        assert!(validate_height("99").is_err());
        assert_eq!(validate_height("100"), Ok(100));
        assert_eq!(validate_height("250"), Ok(250));
        assert!(validate_height("251").is_err());
        assert!(validate_height("1.75").is_err());
    }

    #[test]
    fn weight_accepts_comma_and_dot() {
        assert_eq!(validate_weight("70.5"), Ok(dec!(70.5)));
        assert_eq!(validate_weight("70,5"), Ok(dec!(70.5)));
        assert_eq!(validate_weight("70.5"), validate_weight("70,5"));
    }

    #[test]
    fn weight_boundaries() {
        assert!(validate_weight("29.9").is_err());
        assert_eq!(validate_weight("30"), Ok(dec!(30)));
        assert_eq!(validate_weight("300.0"), Ok(dec!(300.0)));
        assert!(validate_weight("300.1").is_err());
    }

    #[test]
    fn weight_rounds_to_one_decimal() {
        assert_eq!(validate_weight("70.55"), Ok(dec!(70.6)));
        assert_eq!(validate_weight("70.54"), Ok(dec!(70.5)));
    }

    #[test]
    fn sleep_hours_wide_bound() {
        // Validator accepts the full 0–24 range even though the prompt
        // advertises 4–12.
        assert_eq!(validate_sleep_hours("0"), Ok(dec!(0)));
        assert_eq!(validate_sleep_hours("3.5"), Ok(dec!(3.5)));
        assert_eq!(validate_sleep_hours("24"), Ok(dec!(24)));
        assert!(validate_sleep_hours("24.1").is_err());
        assert!(validate_sleep_hours("-1").is_err());
    }

    #[test]
    fn training_minutes_wide_bound() {
        assert_eq!(validate_training_minutes("0"), Ok(0));
        assert_eq!(validate_training_minutes("300"), Ok(300));
        assert!(validate_training_minutes("301").is_err());
        assert!(validate_training_minutes("-5").is_err());
    }

    #[test]
    fn training_days_boundaries() {
        assert_eq!(validate_training_days("0"), Ok(0));
        assert_eq!(validate_training_days("7"), Ok(7));
        assert!(validate_training_days("8").is_err());
    }

    #[test]
    fn last_form_date_parses_strict_format() {
        assert_eq!(
            validate_last_form_date("15.06.2020"),
            Ok(Some(NaiveDate::from_ymd_opt(2020, 6, 15).unwrap()))
        );
        assert!(validate_last_form_date("2020-06-15").is_err());
        assert!(validate_last_form_date("32.01.2020").is_err());
    }

    #[test]
    fn last_form_date_never_sentinel() {
        assert_eq!(validate_last_form_date("never"), Ok(None));
        assert_eq!(validate_last_form_date("NEVER"), Ok(None));
        assert_eq!(validate_last_form_date("Никогда"), Ok(None));
    }
}
