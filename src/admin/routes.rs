//! REST endpoints for the admin surface.
//!
//! Read-mostly: list saved profiles and the full plan catalog, plus a
//! single mutation to flip a plan's active flag. Plan authoring itself
//! happens through the seed binary.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tracing::warn;
use uuid::Uuid;

use crate::catalog::PlanKind;
use crate::store::Database;

const PROFILE_LIST_LIMIT: usize = 200;

/// Shared state for admin routes.
#[derive(Clone)]
pub struct AdminRouteState {
    pub db: Arc<dyn Database>,
}

/// GET /api/admin/profiles
///
/// Returns saved profiles, most recently updated first.
async fn list_profiles(State(state): State<AdminRouteState>) -> impl IntoResponse {
    match state.db.list_profiles(PROFILE_LIST_LIMIT).await {
        Ok(profiles) => Json(serde_json::json!({ "profiles": profiles })).into_response(),
        Err(e) => {
            warn!("Failed to list profiles: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Failed to list profiles"})),
            )
                .into_response()
        }
    }
}

/// GET /api/admin/plans
///
/// Returns the whole catalog, active and inactive, newest first.
async fn list_plans(State(state): State<AdminRouteState>) -> impl IntoResponse {
    let workout = state.db.list_workout_plans().await;
    let meal = state.db.list_meal_plans().await;
    match (workout, meal) {
        (Ok(workout_plans), Ok(meal_plans)) => Json(serde_json::json!({
            "workout_plans": workout_plans,
            "meal_plans": meal_plans,
        }))
        .into_response(),
        (Err(e), _) | (_, Err(e)) => {
            warn!("Failed to list plans: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Failed to list plans"})),
            )
                .into_response()
        }
    }
}

#[derive(Deserialize)]
struct SetActiveBody {
    active: bool,
}

/// POST /api/admin/plans/{kind}/{id}/active
///
/// Activates or deactivates a plan. `kind` is "workout" or "meal".
async fn set_plan_active(
    State(state): State<AdminRouteState>,
    Path((kind, id)): Path<(String, Uuid)>,
    Json(body): Json<SetActiveBody>,
) -> impl IntoResponse {
    let kind = match kind.as_str() {
        "workout" => PlanKind::Workout,
        "meal" => PlanKind::Meal,
        other => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": format!("Unknown plan kind: {other}")})),
            )
                .into_response();
        }
    };

    match state.db.set_plan_active(kind, id, body.active).await {
        Ok(true) => Json(serde_json::json!({"id": id, "active": body.active})).into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": format!("No plan with id {id}")})),
        )
            .into_response(),
        Err(e) => {
            warn!(%id, "Failed to update plan: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Failed to update plan"})),
            )
                .into_response()
        }
    }
}

/// Build the admin REST routes.
pub fn admin_routes(state: AdminRouteState) -> Router {
    Router::new()
        .route("/api/admin/profiles", get(list_profiles))
        .route("/api/admin/plans", get(list_plans))
        .route("/api/admin/plans/{kind}/{id}/active", post(set_plan_active))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
