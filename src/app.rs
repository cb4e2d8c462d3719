use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/gauge", get(handlers::get_gauge))
        .route("/api/submit", post(handlers::submit))
        .with_state(state)
}
