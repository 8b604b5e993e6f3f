use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::ranking::RankingEntry;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/rankings",
    responses(
        (status = 200, description = "Full leaderboard, one entry per roster operative", body = Vec<RankingEntry>)
    ),
    tag = "rankings"
)]
pub async fn get_ranking(State(state): State<AppState>) -> Result<Response, WebError> {
    let entries = services::get_ranking(&state);

    Ok(Json(entries).into_response())
}
