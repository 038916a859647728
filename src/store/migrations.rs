//! Version-tracked database migrations for the libSQL backend.
//!
//! Each migration has a version number and SQL. `run_migrations()` checks
//! the current version and applies only the new ones sequentially.

use libsql::Connection;

use crate::error::DatabaseError;

/// A single migration step.
struct Migration {
    version: i64,
    name: &'static str,
    sql: &'static str,
}

/// All migrations in order. Add new versions to the end.
static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: r#"
        CREATE TABLE IF NOT EXISTS profiles (
            user_ref TEXT PRIMARY KEY,
            age INTEGER,
            gender TEXT,
            height_cm INTEGER,
            weight_kg TEXT,
            target_weight_kg TEXT,
            body_type TEXT,
            goal TEXT,
            lifestyle TEXT,
            sleep_hours TEXT,
            genetics_description TEXT,
            is_experienced_training INTEGER NOT NULL DEFAULT 0,
            last_ideal_form_date TEXT,
            training_focus_area TEXT,
            training_location TEXT,
            training_time_minutes INTEGER,
            training_days_per_week INTEGER,
            preferred_training_type TEXT,
            preferred_difficulty TEXT,
            injuries_description TEXT,
            flexibility_level TEXT,
            endurance_level TEXT,
            profile_completed INTEGER NOT NULL DEFAULT 0,
            completed_at TEXT,
            updated_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_profiles_completed ON profiles(profile_completed);

        CREATE TABLE IF NOT EXISTS workout_plans (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            target_goal TEXT NOT NULL DEFAULT '[]',
            target_level TEXT NOT NULL DEFAULT '[]',
            target_body_type TEXT NOT NULL DEFAULT '[]',
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_workout_plans_active ON workout_plans(is_active);
        CREATE INDEX IF NOT EXISTS idx_workout_plans_created ON workout_plans(created_at);

        CREATE TABLE IF NOT EXISTS meal_plans (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            target_goal TEXT NOT NULL DEFAULT '[]',
            calories_min INTEGER NOT NULL,
            calories_max INTEGER NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_meal_plans_active ON meal_plans(is_active);
        CREATE INDEX IF NOT EXISTS idx_meal_plans_created ON meal_plans(created_at);
    "#,
}];

/// Apply all pending migrations.
pub async fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS _migrations (
            version INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        (),
    )
    .await
    .map_err(|e| DatabaseError::Migration(format!("Failed to create _migrations table: {e}")))?;

    let current_version = get_current_version(conn).await?;

    for migration in MIGRATIONS {
        if migration.version > current_version {
            tracing::info!(
                version = migration.version,
                name = migration.name,
                "Applying migration"
            );
            conn.execute_batch(migration.sql).await.map_err(|e| {
                DatabaseError::Migration(format!(
                    "Migration V{} ({}) failed: {e}",
                    migration.version, migration.name
                ))
            })?;
            seed_version(conn, migration.version, migration.name).await?;
        }
    }

    Ok(())
}

async fn get_current_version(conn: &Connection) -> Result<i64, DatabaseError> {
    let mut rows = conn
        .query("SELECT COALESCE(MAX(version), 0) FROM _migrations", ())
        .await
        .map_err(|e| DatabaseError::Migration(format!("Failed to read migration version: {e}")))?;

    match rows.next().await {
        Ok(Some(row)) => row
            .get::<i64>(0)
            .map_err(|e| DatabaseError::Migration(format!("Bad version row: {e}"))),
        Ok(None) => Ok(0),
        Err(e) => Err(DatabaseError::Migration(format!(
            "Failed to read migration version: {e}"
        ))),
    }
}

async fn seed_version(conn: &Connection, version: i64, name: &str) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT OR IGNORE INTO _migrations (version, name) VALUES (?1, ?2)",
        libsql::params![version, name],
    )
    .await
    .map_err(|e| DatabaseError::Migration(format!("Failed to record migration V{version}: {e}")))?;
    Ok(())
}
