use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{generate_slots, list_slots};
use crate::app_state::AppState;

pub fn availability_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_slots))
        .route("/generate", post(generate_slots))
}
