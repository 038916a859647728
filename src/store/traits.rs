//! Unified `Database` trait — single async interface for all persistence.
//!
//! The core reads profiles and catalog snapshots through this trait; the
//! questionnaire writes through `upsert_profile`. The catalog itself is
//! admin-authored and read-only to the matching path.

use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::{MealPlan, PlanKind, WorkoutPlan};
use crate::error::DatabaseError;
use crate::profile::{Profile, ProfileUpdate};

/// Backend-agnostic database trait covering profiles and the plan catalog.
#[async_trait]
pub trait Database: Send + Sync {
    /// Run all pending schema migrations.
    async fn run_migrations(&self) -> Result<(), DatabaseError>;

    // ── Profiles ────────────────────────────────────────────────────

    /// Fetch a profile by its opaque user reference.
    async fn fetch_profile(&self, user_ref: &str) -> Result<Option<Profile>, DatabaseError>;

    /// Create-or-update a profile from a merged questionnaire update.
    ///
    /// The write is atomic. Marks the profile completed and stamps
    /// `completed_at` with the save time (re-saving refreshes the stamp).
    async fn upsert_profile(
        &self,
        user_ref: &str,
        update: &ProfileUpdate,
    ) -> Result<Profile, DatabaseError>;

    /// All profiles, most recently updated first (admin view).
    async fn list_profiles(&self, limit: usize) -> Result<Vec<Profile>, DatabaseError>;

    // ── Catalog ─────────────────────────────────────────────────────

    /// Insert a workout plan (admin/seed path).
    async fn insert_workout_plan(&self, plan: &WorkoutPlan) -> Result<(), DatabaseError>;

    /// Insert a meal plan (admin/seed path).
    async fn insert_meal_plan(&self, plan: &MealPlan) -> Result<(), DatabaseError>;

    /// Active workout plans, newest first.
    async fn fetch_active_workout_plans(&self) -> Result<Vec<WorkoutPlan>, DatabaseError>;

    /// Active meal plans, newest first.
    async fn fetch_active_meal_plans(&self) -> Result<Vec<MealPlan>, DatabaseError>;

    /// All workout plans including inactive, newest first (admin view).
    async fn list_workout_plans(&self) -> Result<Vec<WorkoutPlan>, DatabaseError>;

    /// All meal plans including inactive, newest first (admin view).
    async fn list_meal_plans(&self) -> Result<Vec<MealPlan>, DatabaseError>;

    /// Activate or deactivate a plan. Returns false if the id is unknown.
    async fn set_plan_active(
        &self,
        kind: PlanKind,
        id: Uuid,
        active: bool,
    ) -> Result<bool, DatabaseError>;
}
