//! Admin REST API for inspecting profiles and curating the plan catalog.

pub mod routes;

pub use routes::{admin_routes, AdminRouteState};
