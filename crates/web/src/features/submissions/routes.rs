use axum::{
    Router,
    routing::{delete, get, post},
};

use super::handlers::{clear_submissions, create_submission, recent_submissions};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_submission))
        .route("/", delete(clear_submissions))
        .route("/recent", get(recent_submissions))
}
