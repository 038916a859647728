//! Daily calorie target estimation for meal-plan matching.

use rust_decimal::prelude::ToPrimitive;

use crate::profile::{Gender, Goal, Profile};

/// Fallback range when weight, height, age, or gender is missing.
const DEFAULT_RANGE: (i32, i32) = (1800, 2500);

/// Estimate the user's target daily calorie range.
///
/// Harris-Benedict-style BMR (distinct constants for male vs non-male),
/// scaled by the lifestyle activity multiplier, adjusted by goal (lose
/// weight −500, gain muscle +300), then widened to ±10%.
pub fn estimate_calorie_range(profile: &Profile) -> (i32, i32) {
    let (Some(weight), Some(height), Some(age), Some(gender)) = (
        profile.weight_kg.and_then(|w| w.to_f64()),
        profile.height_cm,
        profile.age,
        profile.gender,
    ) else {
        return DEFAULT_RANGE;
    };

    let height = f64::from(height);
    let age = f64::from(age);

    let bmr = if gender == Gender::Male {
        88.362 + (13.397 * weight) + (4.799 * height) - (5.677 * age)
    } else {
        447.593 + (9.247 * weight) + (3.098 * height) - (4.330 * age)
    };

    let multiplier = profile
        .lifestyle
        .map(|l| l.activity_multiplier())
        .unwrap_or(1.2);
    let tdee = bmr * multiplier;

    let calories = match profile.goal {
        Some(Goal::LoseWeight) => tdee - 500.0,
        Some(Goal::GainMuscle) => tdee + 300.0,
        _ => tdee,
    };

    ((calories * 0.9) as i32, (calories * 1.1) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Lifestyle;
    use rust_decimal_macros::dec;

    fn profile_with(
        weight: rust_decimal::Decimal,
        height: i32,
        age: i32,
        gender: Gender,
    ) -> Profile {
        let mut p = Profile::empty("u1");
        p.weight_kg = Some(weight);
        p.height_cm = Some(height);
        p.age = Some(age);
        p.gender = Some(gender);
        p
    }

    #[test]
    fn missing_anthropometrics_yield_default_range() {
        let p = Profile::empty("u1");
        assert_eq!(estimate_calorie_range(&p), DEFAULT_RANGE);

        let mut partial = profile_with(dec!(70), 175, 30, Gender::Male);
        partial.height_cm = None;
        assert_eq!(estimate_calorie_range(&partial), DEFAULT_RANGE);
    }

    #[test]
    fn male_sedentary_maintain() {
        // BMR = 88.362 + 13.397*80 + 4.799*180 - 5.677*30 = 1853.632
        // TDEE = 1853.632 * 1.2 = 2224.3584 → [2001, 2446]
        let p = profile_with(dec!(80), 180, 30, Gender::Male);
        let (min, max) = estimate_calorie_range(&p);
        assert_eq!((min, max), (2001, 2446));
    }

    #[test]
    fn female_formula_uses_distinct_constants() {
        let male = profile_with(dec!(70), 170, 30, Gender::Male);
        let female = profile_with(dec!(70), 170, 30, Gender::Female);
        assert_ne!(estimate_calorie_range(&male), estimate_calorie_range(&female));
    }

    #[test]
    fn lose_weight_narrows_and_gain_widens() {
        let mut base = profile_with(dec!(80), 180, 30, Gender::Male);
        let (maintain_min, _) = estimate_calorie_range(&base);

        base.goal = Some(Goal::LoseWeight);
        let (lose_min, _) = estimate_calorie_range(&base);
        assert!(lose_min < maintain_min);

        base.goal = Some(Goal::GainMuscle);
        let (gain_min, _) = estimate_calorie_range(&base);
        assert!(gain_min > maintain_min);
    }

    #[test]
    fn activity_multiplier_scales_range() {
        let mut p = profile_with(dec!(80), 180, 30, Gender::Male);
        p.lifestyle = Some(Lifestyle::Sedentary);
        let sedentary = estimate_calorie_range(&p);
        p.lifestyle = Some(Lifestyle::ExtremelyActive);
        let active = estimate_calorie_range(&p);
        assert!(active.0 > sedentary.0);
        assert!(active.1 > sedentary.1);
    }

    #[test]
    fn unknown_lifestyle_defaults_to_sedentary_multiplier() {
        let mut with_unknown = profile_with(dec!(80), 180, 30, Gender::Male);
        with_unknown.lifestyle = Some(Lifestyle::Unknown);
        let unset = profile_with(dec!(80), 180, 30, Gender::Male);
        assert_eq!(
            estimate_calorie_range(&with_unknown),
            estimate_calorie_range(&unset)
        );
    }
}
