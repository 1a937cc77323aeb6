//! Axum router wiring.
//!
//! Every method and depth under `/update` reaches the update handler, so the
//! method check always runs before path validation.

use axum::{
    routing::{any, get},
    Router,
};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/update", any(transport::update::update))
        .route("/update/*rest", any(transport::update::update))
        .with_state(state)
}
