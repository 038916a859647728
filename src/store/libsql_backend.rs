//! libSQL backend — async `Database` trait implementation.
//!
//! Supports local file and in-memory databases. Datetimes are stored as
//! RFC 3339 TEXT, decimals as their string form, and targeting arrays as
//! JSON in a TEXT column.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use libsql::{params, Connection, Database as LibSqlDatabase};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::{MealPlan, PlanKind, WorkoutPlan};
use crate::error::DatabaseError;
use crate::profile::{
    BodyType, Difficulty, FitnessLevel, Gender, Goal, Lifestyle, Profile, ProfileUpdate,
    TrainingFocus, TrainingLocation, TrainingType,
};
use crate::store::migrations;
use crate::store::traits::Database;

/// libSQL database backend.
///
/// Stores a single connection that is reused for all operations.
/// `libsql::Connection` is `Send + Sync` and safe for concurrent async use.
pub struct LibSqlBackend {
    #[allow(dead_code)]
    db: Arc<LibSqlDatabase>,
    conn: Connection,
}

impl LibSqlBackend {
    /// Open (or create) a local database file and run migrations.
    pub async fn new_local(path: &Path) -> Result<Self, DatabaseError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DatabaseError::Pool(format!("Failed to create database directory: {e}"))
            })?;
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| DatabaseError::Pool(format!("Failed to open libSQL database: {e}")))?;

        let conn = db
            .connect()
            .map_err(|e| DatabaseError::Pool(format!("Failed to create connection: {e}")))?;

        let backend = Self {
            db: Arc::new(db),
            conn,
        };
        backend.run_migrations().await?;
        info!(path = %path.display(), "Database opened");
        Ok(backend)
    }

    /// Create an in-memory database (for tests).
    pub async fn new_memory() -> Result<Self, DatabaseError> {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| {
                DatabaseError::Pool(format!("Failed to create in-memory database: {e}"))
            })?;

        let conn = db
            .connect()
            .map_err(|e| DatabaseError::Pool(format!("Failed to create connection: {e}")))?;

        let backend = Self {
            db: Arc::new(db),
            conn,
        };
        backend.run_migrations().await?;
        Ok(backend)
    }

    fn conn(&self) -> &Connection {
        &self.conn
    }
}

// ── Helper functions ────────────────────────────────────────────────

/// Parse an RFC 3339 or SQLite datetime string into DateTime<Utc>.
fn parse_datetime(s: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(ndt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return ndt.and_utc();
    }
    if let Ok(ndt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return ndt.and_utc();
    }
    DateTime::<Utc>::MIN_UTC
}

fn parse_optional_datetime(s: &Option<String>) -> Option<DateTime<Utc>> {
    s.as_deref().map(parse_datetime)
}

fn parse_optional_date(s: &Option<String>) -> Option<NaiveDate> {
    s.as_deref()
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

fn parse_optional_decimal(s: &Option<String>) -> Option<Decimal> {
    s.as_deref().and_then(|s| Decimal::from_str(s).ok())
}

/// Parse a JSON-array TEXT column into a Vec of enum values.
fn parse_json_list<T: serde::de::DeserializeOwned>(raw: &str, column: &str) -> Vec<T> {
    match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            warn!(column, error = %e, "Skipping malformed targeting list");
            Vec::new()
        }
    }
}

fn to_json_list<T: serde::Serialize>(values: &[T]) -> Result<String, DatabaseError> {
    serde_json::to_string(values).map_err(|e| DatabaseError::Serialization(e.to_string()))
}

/// Convert `Option<&str>` to a libsql Value.
fn opt_text(s: Option<&str>) -> libsql::Value {
    match s {
        Some(s) => libsql::Value::Text(s.to_string()),
        None => libsql::Value::Null,
    }
}

fn opt_int(v: Option<i32>) -> libsql::Value {
    match v {
        Some(v) => libsql::Value::Integer(i64::from(v)),
        None => libsql::Value::Null,
    }
}

const PROFILE_COLUMNS: &str = "user_ref, age, gender, height_cm, weight_kg, target_weight_kg, \
     body_type, goal, lifestyle, sleep_hours, genetics_description, is_experienced_training, \
     last_ideal_form_date, training_focus_area, training_location, training_time_minutes, \
     training_days_per_week, preferred_training_type, preferred_difficulty, injuries_description, \
     flexibility_level, endurance_level, profile_completed, completed_at, updated_at";

const WORKOUT_COLUMNS: &str =
    "id, name, description, target_goal, target_level, target_body_type, is_active, created_at";

const MEAL_COLUMNS: &str =
    "id, name, description, target_goal, calories_min, calories_max, is_active, created_at";

/// Map a libsql Row to a Profile. Column order matches PROFILE_COLUMNS.
fn row_to_profile(row: &libsql::Row) -> Result<Profile, libsql::Error> {
    let weight: Option<String> = row.get(4).ok();
    let target_weight: Option<String> = row.get(5).ok();
    let sleep: Option<String> = row.get(9).ok();
    let last_form: Option<String> = row.get(12).ok();
    let completed_at: Option<String> = row.get(23).ok();
    let updated_str: String = row.get(24)?;

    Ok(Profile {
        user_ref: row.get(0)?,
        age: row.get::<Option<i64>>(1)?.map(|v| v as i32),
        gender: row
            .get::<Option<String>>(2)?
            .map(|s| Gender::from_option_id(&s)),
        height_cm: row.get::<Option<i64>>(3)?.map(|v| v as i32),
        weight_kg: parse_optional_decimal(&weight),
        target_weight_kg: parse_optional_decimal(&target_weight),
        body_type: row
            .get::<Option<String>>(6)?
            .map(|s| BodyType::from_option_id(&s)),
        goal: row
            .get::<Option<String>>(7)?
            .map(|s| Goal::from_option_id(&s)),
        lifestyle: row
            .get::<Option<String>>(8)?
            .map(|s| Lifestyle::from_option_id(&s)),
        sleep_hours: parse_optional_decimal(&sleep),
        genetics_description: row.get(10)?,
        is_experienced_training: row.get::<i64>(11)? != 0,
        last_ideal_form_date: parse_optional_date(&last_form),
        training_focus_area: row
            .get::<Option<String>>(13)?
            .map(|s| TrainingFocus::from_option_id(&s)),
        training_location: row
            .get::<Option<String>>(14)?
            .map(|s| TrainingLocation::from_option_id(&s)),
        training_time_minutes: row.get::<Option<i64>>(15)?.map(|v| v as i32),
        training_days_per_week: row.get::<Option<i64>>(16)?.map(|v| v as i32),
        preferred_training_type: row
            .get::<Option<String>>(17)?
            .map(|s| TrainingType::from_option_id(&s)),
        preferred_difficulty: row
            .get::<Option<String>>(18)?
            .map(|s| Difficulty::from_option_id(&s)),
        injuries_description: row.get(19)?,
        flexibility_level: row
            .get::<Option<String>>(20)?
            .map(|s| FitnessLevel::from_option_id(&s)),
        endurance_level: row
            .get::<Option<String>>(21)?
            .map(|s| FitnessLevel::from_option_id(&s)),
        profile_completed: row.get::<i64>(22)? != 0,
        completed_at: parse_optional_datetime(&completed_at),
        updated_at: parse_datetime(&updated_str),
    })
}

/// Map a libsql Row to a WorkoutPlan. Column order matches WORKOUT_COLUMNS.
fn row_to_workout_plan(row: &libsql::Row) -> Result<WorkoutPlan, libsql::Error> {
    let id_str: String = row.get(0)?;
    let goals: String = row.get(3)?;
    let levels: String = row.get(4)?;
    let body_types: String = row.get(5)?;
    let created_str: String = row.get(7)?;

    Ok(WorkoutPlan {
        id: Uuid::parse_str(&id_str).unwrap_or_else(|_| Uuid::nil()),
        name: row.get(1)?,
        description: row.get(2)?,
        target_goal: parse_json_list(&goals, "target_goal"),
        target_level: parse_json_list(&levels, "target_level"),
        target_body_type: parse_json_list(&body_types, "target_body_type"),
        is_active: row.get::<i64>(6)? != 0,
        created_at: parse_datetime(&created_str),
    })
}

/// Map a libsql Row to a MealPlan. Column order matches MEAL_COLUMNS.
fn row_to_meal_plan(row: &libsql::Row) -> Result<MealPlan, libsql::Error> {
    let id_str: String = row.get(0)?;
    let goals: String = row.get(3)?;
    let created_str: String = row.get(7)?;

    Ok(MealPlan {
        id: Uuid::parse_str(&id_str).unwrap_or_else(|_| Uuid::nil()),
        name: row.get(1)?,
        description: row.get(2)?,
        target_goal: parse_json_list(&goals, "target_goal"),
        calories_range: (row.get::<i64>(4)? as i32, row.get::<i64>(5)? as i32),
        is_active: row.get::<i64>(6)? != 0,
        created_at: parse_datetime(&created_str),
    })
}

// ── Trait implementation ────────────────────────────────────────────

#[async_trait]
impl Database for LibSqlBackend {
    async fn run_migrations(&self) -> Result<(), DatabaseError> {
        migrations::run_migrations(self.conn()).await
    }

    // ── Profiles ────────────────────────────────────────────────────

    async fn fetch_profile(&self, user_ref: &str) -> Result<Option<Profile>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_ref = ?1"),
                params![user_ref],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("fetch_profile: {e}")))?;

        match rows.next().await {
            Ok(Some(row)) => {
                let profile = row_to_profile(&row)
                    .map_err(|e| DatabaseError::Query(format!("fetch_profile row parse: {e}")))?;
                Ok(Some(profile))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(DatabaseError::Query(format!("fetch_profile: {e}"))),
        }
    }

    async fn upsert_profile(
        &self,
        user_ref: &str,
        update: &ProfileUpdate,
    ) -> Result<Profile, DatabaseError> {
        let now = Utc::now().to_rfc3339();

        // Single statement, so the create-or-update is atomic.
        self.conn()
            .execute(
                "INSERT INTO profiles (user_ref, age, gender, height_cm, weight_kg, \
                 target_weight_kg, body_type, goal, lifestyle, sleep_hours, \
                 genetics_description, is_experienced_training, last_ideal_form_date, \
                 training_focus_area, training_location, training_time_minutes, \
                 training_days_per_week, preferred_training_type, preferred_difficulty, \
                 injuries_description, flexibility_level, endurance_level, \
                 profile_completed, completed_at, updated_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, \
                 ?16, ?17, ?18, ?19, ?20, ?21, ?22, 1, ?23, ?23) \
                 ON CONFLICT(user_ref) DO UPDATE SET \
                 age = excluded.age, gender = excluded.gender, height_cm = excluded.height_cm, \
                 weight_kg = excluded.weight_kg, target_weight_kg = excluded.target_weight_kg, \
                 body_type = excluded.body_type, goal = excluded.goal, \
                 lifestyle = excluded.lifestyle, sleep_hours = excluded.sleep_hours, \
                 genetics_description = excluded.genetics_description, \
                 is_experienced_training = excluded.is_experienced_training, \
                 last_ideal_form_date = excluded.last_ideal_form_date, \
                 training_focus_area = excluded.training_focus_area, \
                 training_location = excluded.training_location, \
                 training_time_minutes = excluded.training_time_minutes, \
                 training_days_per_week = excluded.training_days_per_week, \
                 preferred_training_type = excluded.preferred_training_type, \
                 preferred_difficulty = excluded.preferred_difficulty, \
                 injuries_description = excluded.injuries_description, \
                 flexibility_level = excluded.flexibility_level, \
                 endurance_level = excluded.endurance_level, \
                 profile_completed = 1, completed_at = excluded.completed_at, \
                 updated_at = excluded.updated_at",
                params![
                    user_ref,
                    opt_int(update.age),
                    opt_text(update.gender.map(|g| g.as_str())),
                    opt_int(update.height_cm),
                    opt_text(update.weight_kg.map(|w| w.to_string()).as_deref()),
                    opt_text(update.target_weight_kg.map(|w| w.to_string()).as_deref()),
                    opt_text(update.body_type.map(|b| b.as_str())),
                    update.goal.as_str(),
                    update.lifestyle.as_str(),
                    update.sleep_hours.to_string(),
                    opt_text(update.genetics_description.as_deref()),
                    i64::from(update.is_experienced_training),
                    opt_text(
                        update
                            .last_ideal_form_date
                            .map(|d| d.format("%Y-%m-%d").to_string())
                            .as_deref()
                    ),
                    opt_text(update.training_focus_area.map(|f| f.as_str())),
                    opt_text(update.training_location.map(|l| l.as_str())),
                    opt_int(update.training_time_minutes),
                    i64::from(update.training_days_per_week),
                    opt_text(update.preferred_training_type.map(|t| t.as_str())),
                    opt_text(update.preferred_difficulty.map(|d| d.as_str())),
                    opt_text(update.injuries_description.as_deref()),
                    opt_text(update.flexibility_level.map(|f| f.as_str())),
                    opt_text(update.endurance_level.map(|e| e.as_str())),
                    now,
                ],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("upsert_profile: {e}")))?;

        debug!(user_ref, "Profile upserted");

        self.fetch_profile(user_ref)
            .await?
            .ok_or_else(|| DatabaseError::NotFound {
                entity: "profile".to_string(),
                id: user_ref.to_string(),
            })
    }

    async fn list_profiles(&self, limit: usize) -> Result<Vec<Profile>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY updated_at DESC LIMIT ?1"
                ),
                params![limit as i64],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("list_profiles: {e}")))?;

        let mut profiles = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            match row_to_profile(&row) {
                Ok(profile) => profiles.push(profile),
                Err(e) => warn!("Skipping profile row: {e}"),
            }
        }
        Ok(profiles)
    }

    // ── Catalog ─────────────────────────────────────────────────────

    async fn insert_workout_plan(&self, plan: &WorkoutPlan) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO workout_plans (id, name, description, target_goal, target_level, \
                 target_body_type, is_active, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    plan.id.to_string(),
                    plan.name.as_str(),
                    opt_text(plan.description.as_deref()),
                    to_json_list(&plan.target_goal)?,
                    to_json_list(&plan.target_level)?,
                    to_json_list(&plan.target_body_type)?,
                    i64::from(plan.is_active),
                    plan.created_at.to_rfc3339(),
                ],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("insert_workout_plan: {e}")))?;
        debug!(plan_id = %plan.id, name = %plan.name, "Workout plan inserted");
        Ok(())
    }

    async fn insert_meal_plan(&self, plan: &MealPlan) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO meal_plans (id, name, description, target_goal, calories_min, \
                 calories_max, is_active, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    plan.id.to_string(),
                    plan.name.as_str(),
                    opt_text(plan.description.as_deref()),
                    to_json_list(&plan.target_goal)?,
                    i64::from(plan.calories_range.0),
                    i64::from(plan.calories_range.1),
                    i64::from(plan.is_active),
                    plan.created_at.to_rfc3339(),
                ],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("insert_meal_plan: {e}")))?;
        debug!(plan_id = %plan.id, name = %plan.name, "Meal plan inserted");
        Ok(())
    }

    async fn fetch_active_workout_plans(&self) -> Result<Vec<WorkoutPlan>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {WORKOUT_COLUMNS} FROM workout_plans WHERE is_active = 1 \
                     ORDER BY created_at DESC"
                ),
                (),
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("fetch_active_workout_plans: {e}")))?;

        let mut plans = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            match row_to_workout_plan(&row) {
                Ok(plan) => plans.push(plan),
                Err(e) => warn!("Skipping workout plan row: {e}"),
            }
        }
        Ok(plans)
    }

    async fn fetch_active_meal_plans(&self) -> Result<Vec<MealPlan>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {MEAL_COLUMNS} FROM meal_plans WHERE is_active = 1 \
                     ORDER BY created_at DESC"
                ),
                (),
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("fetch_active_meal_plans: {e}")))?;

        let mut plans = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            match row_to_meal_plan(&row) {
                Ok(plan) => plans.push(plan),
                Err(e) => warn!("Skipping meal plan row: {e}"),
            }
        }
        Ok(plans)
    }

    async fn list_workout_plans(&self) -> Result<Vec<WorkoutPlan>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {WORKOUT_COLUMNS} FROM workout_plans ORDER BY created_at DESC"),
                (),
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("list_workout_plans: {e}")))?;

        let mut plans = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            match row_to_workout_plan(&row) {
                Ok(plan) => plans.push(plan),
                Err(e) => warn!("Skipping workout plan row: {e}"),
            }
        }
        Ok(plans)
    }

    async fn list_meal_plans(&self) -> Result<Vec<MealPlan>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {MEAL_COLUMNS} FROM meal_plans ORDER BY created_at DESC"),
                (),
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("list_meal_plans: {e}")))?;

        let mut plans = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            match row_to_meal_plan(&row) {
                Ok(plan) => plans.push(plan),
                Err(e) => warn!("Skipping meal plan row: {e}"),
            }
        }
        Ok(plans)
    }

    async fn set_plan_active(
        &self,
        kind: PlanKind,
        id: Uuid,
        active: bool,
    ) -> Result<bool, DatabaseError> {
        let table = match kind {
            PlanKind::Workout => "workout_plans",
            PlanKind::Meal => "meal_plans",
        };
        let changed = self
            .conn()
            .execute(
                &format!("UPDATE {table} SET is_active = ?1 WHERE id = ?2"),
                params![i64::from(active), id.to_string()],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("set_plan_active: {e}")))?;
        Ok(changed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::DraftProfile;
    use rust_decimal_macros::dec;

    fn sample_update() -> ProfileUpdate {
        DraftProfile {
            age: Some(30),
            gender: Some(Gender::Male),
            height_cm: Some(180),
            weight_kg: Some(dec!(82.4)),
            target_weight_kg: Some(dec!(78.0)),
            body_type: Some(BodyType::Mesomorph),
            goal: Some(Goal::LoseWeight),
            lifestyle: Some(Lifestyle::ModeratelyActive),
            sleep_hours: Some(dec!(7.5)),
            preferred_difficulty: Some(Difficulty::Beginner),
            injuries_description: Some("old knee injury".to_string()),
            ..Default::default()
        }
        .into_update()
    }

    #[tokio::test]
    async fn upsert_then_fetch_round_trips() {
        let db = LibSqlBackend::new_memory().await.unwrap();
        let saved = db.upsert_profile("user-1", &sample_update()).await.unwrap();

        assert!(saved.profile_completed);
        assert!(saved.completed_at.is_some());
        assert_eq!(saved.age, Some(30));
        assert_eq!(saved.weight_kg, Some(dec!(82.4)));
        assert_eq!(saved.goal, Some(Goal::LoseWeight));
        assert_eq!(saved.injuries_description.as_deref(), Some("old knee injury"));

        let fetched = db.fetch_profile("user-1").await.unwrap().unwrap();
        assert_eq!(fetched.user_ref, "user-1");
        assert_eq!(fetched.sleep_hours, Some(dec!(7.5)));
    }

    #[tokio::test]
    async fn local_file_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fitmatch.db");

        let db = LibSqlBackend::new_local(&path).await.unwrap();
        db.upsert_profile("user-1", &sample_update()).await.unwrap();
        drop(db);

        let reopened = LibSqlBackend::new_local(&path).await.unwrap();
        let profile = reopened.fetch_profile("user-1").await.unwrap().unwrap();
        assert_eq!(profile.age, Some(30));
    }

    #[tokio::test]
    async fn fetch_missing_profile_is_none() {
        let db = LibSqlBackend::new_memory().await.unwrap();
        assert!(db.fetch_profile("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn resave_refreshes_completed_at() {
        let db = LibSqlBackend::new_memory().await.unwrap();
        let first = db.upsert_profile("user-1", &sample_update()).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        let second = db.upsert_profile("user-1", &sample_update()).await.unwrap();
        assert!(second.completed_at.unwrap() > first.completed_at.unwrap());
    }

    #[tokio::test]
    async fn active_plans_come_newest_first() {
        let db = LibSqlBackend::new_memory().await.unwrap();

        let mut older = WorkoutPlan::new("older", None, vec![Goal::LoseWeight], vec![], vec![]);
        older.created_at = Utc::now() - chrono::Duration::days(2);
        let newer = WorkoutPlan::new("newer", None, vec![Goal::LoseWeight], vec![], vec![]);
        let mut inactive = WorkoutPlan::new("off", None, vec![Goal::LoseWeight], vec![], vec![]);
        inactive.is_active = false;

        db.insert_workout_plan(&older).await.unwrap();
        db.insert_workout_plan(&newer).await.unwrap();
        db.insert_workout_plan(&inactive).await.unwrap();

        let active = db.fetch_active_workout_plans().await.unwrap();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].name, "newer");
        assert_eq!(active[1].name, "older");

        let all = db.list_workout_plans().await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn meal_plan_round_trips_targeting() {
        let db = LibSqlBackend::new_memory().await.unwrap();
        let plan = MealPlan::new(
            "cut",
            Some("calorie deficit".to_string()),
            vec![Goal::LoseWeight, Goal::BodyRecomposition],
            (1600, 1900),
        );
        db.insert_meal_plan(&plan).await.unwrap();

        let fetched = &db.fetch_active_meal_plans().await.unwrap()[0];
        assert_eq!(fetched.id, plan.id);
        assert_eq!(fetched.target_goal, plan.target_goal);
        assert_eq!(fetched.calories_range, (1600, 1900));
    }

    #[tokio::test]
    async fn set_plan_active_toggles_and_reports_unknown() {
        let db = LibSqlBackend::new_memory().await.unwrap();
        let plan = MealPlan::new("bulk", None, vec![Goal::GainMuscle], (2800, 3200));
        db.insert_meal_plan(&plan).await.unwrap();

        assert!(db
            .set_plan_active(PlanKind::Meal, plan.id, false)
            .await
            .unwrap());
        assert!(db.fetch_active_meal_plans().await.unwrap().is_empty());

        assert!(!db
            .set_plan_active(PlanKind::Meal, Uuid::new_v4(), false)
            .await
            .unwrap());
    }
}
