//! Seed the plan catalog with a small demo set.
//!
//! Idempotent: does nothing if the catalog already has plans. Uses the
//! same `FITMATCH_DB_PATH` as the main binary.

use std::sync::Arc;

use fitmatch::catalog::{MealPlan, WorkoutPlan};
use fitmatch::profile::{BodyType, Difficulty, Goal};
use fitmatch::store::{Database, LibSqlBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let db_path =
        std::env::var("FITMATCH_DB_PATH").unwrap_or_else(|_| "./data/fitmatch.db".to_string());
    let db: Arc<dyn Database> =
        Arc::new(LibSqlBackend::new_local(std::path::Path::new(&db_path)).await?);

    let existing = db.list_workout_plans().await?;
    if !existing.is_empty() {
        eprintln!("Catalog already has {} workout plans, nothing to do", existing.len());
        return Ok(());
    }

    let workout_plans = vec![
        WorkoutPlan::new(
            "Weight Loss Basics",
            Some(
                "A beginner-friendly mix of cardio and bodyweight strength work \
                 aimed at steady fat loss."
                    .to_string(),
            ),
            vec![Goal::LoseWeight],
            vec![Difficulty::Beginner],
            vec![BodyType::Ectomorph, BodyType::Mesomorph, BodyType::Endomorph],
        ),
        WorkoutPlan::new(
            "Muscle Builder Pro",
            Some(
                "A six-day split with heavy compound lifts for experienced athletes \
                 building mass."
                    .to_string(),
            ),
            vec![Goal::GainMuscle],
            vec![Difficulty::Intermediate, Difficulty::Advanced],
            vec![BodyType::Mesomorph],
        ),
        WorkoutPlan::new(
            "Everyday Fitness",
            Some("Balanced full-body sessions to keep general fitness up.".to_string()),
            vec![Goal::Maintain],
            vec![Difficulty::Beginner, Difficulty::Intermediate],
            vec![],
        ),
    ];

    let meal_plans = vec![
        MealPlan::new(
            "Lean Cut",
            Some("High-protein deficit menu for weight loss.".to_string()),
            vec![Goal::LoseWeight],
            (1500, 1900),
        ),
        MealPlan::new(
            "Mass Gainer",
            Some("Calorie-dense menu supporting muscle growth.".to_string()),
            vec![Goal::GainMuscle],
            (2600, 3200),
        ),
        MealPlan::new(
            "Maintenance Menu",
            Some("Balanced menu around maintenance calories.".to_string()),
            vec![Goal::Maintain],
            (2000, 2500),
        ),
    ];

    for plan in &workout_plans {
        db.insert_workout_plan(plan).await?;
    }
    for plan in &meal_plans {
        db.insert_meal_plan(plan).await?;
    }

    eprintln!(
        "Seeded {} workout plans and {} meal plans into {db_path}",
        workout_plans.len(),
        meal_plans.len()
    );
    Ok(())
}
