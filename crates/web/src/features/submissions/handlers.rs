use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::submission::{
    ClearQuery, CreateSubmissionRequest, RecentActivityQuery, SubmissionResponse,
};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/submissions",
    request_body = CreateSubmissionRequest,
    responses(
        (status = 201, description = "Submission credited successfully", body = SubmissionResponse),
        (status = 400, description = "Malformed request body or oversized field"),
        (status = 422, description = "Submission rejected by intake: unknown operative, blank submitter name or missing evidence"),
        (status = 503, description = "Submission store unavailable")
    ),
    tag = "submissions"
)]
pub async fn create_submission(
    State(state): State<AppState>,
    Json(req): Json<CreateSubmissionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let submission = services::create_submission(&state, &req).await?;

    Ok((StatusCode::CREATED, Json(SubmissionResponse::from(submission))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/submissions/recent",
    params(RecentActivityQuery),
    responses(
        (status = 200, description = "Most recent submissions, newest first", body = Vec<SubmissionResponse>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "submissions"
)]
pub async fn recent_submissions(
    State(state): State<AppState>,
    Query(query): Query<RecentActivityQuery>,
) -> Result<Response, WebError> {
    query.validate().map_err(WebError::BadRequest)?;

    let submissions = services::recent_submissions(&state, &query);

    let response: Vec<SubmissionResponse> = submissions
        .into_iter()
        .map(SubmissionResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/submissions",
    params(ClearQuery),
    responses(
        (status = 204, description = "Every submission removed"),
        (status = 400, description = "Confirmation parameter missing"),
        (status = 503, description = "Submission store unavailable")
    ),
    tag = "submissions"
)]
pub async fn clear_submissions(
    State(state): State<AppState>,
    Query(query): Query<ClearQuery>,
) -> Result<Response, WebError> {
    if !query.confirm {
        return Err(WebError::BadRequest(
            "Bulk clear is irreversible; pass confirm=true to proceed".to_string(),
        ));
    }

    services::clear_submissions(&state).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
