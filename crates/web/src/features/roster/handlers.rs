use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::roster::OperativeResponse;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/roster",
    responses(
        (status = 200, description = "Roster operatives in declaration order", body = Vec<OperativeResponse>)
    ),
    tag = "roster"
)]
pub async fn list_roster(State(state): State<AppState>) -> Result<Response, WebError> {
    let operatives = services::list_roster(&state);

    Ok(Json(operatives).into_response())
}
