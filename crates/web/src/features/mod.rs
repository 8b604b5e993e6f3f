use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod ranking;
pub mod roster;
pub mod submissions;

pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/roster", roster::routes::routes())
        .nest("/submissions", submissions::routes::routes())
        .nest("/rankings", ranking::routes::routes())
        .nest("/health", health::routes::routes())
}
