use storage::dto::submission::{CreateSubmissionRequest, RecentActivityQuery};
use storage::error::Result;
use storage::models::Submission;
use storage::services::{activity, intake};

use crate::state::AppState;

/// Validate and append one submission
pub async fn create_submission(
    state: &AppState,
    request: &CreateSubmissionRequest,
) -> Result<Submission> {
    intake::submit(&state.store, &state.roster, request).await
}

/// Recent-activity view over the current snapshot
pub fn recent_submissions(state: &AppState, query: &RecentActivityQuery) -> Vec<Submission> {
    let limit = query
        .limit
        .map(|limit| limit as usize)
        .unwrap_or(state.recent_limit);

    activity::recent(&state.store.submissions(), limit)
}

/// Remove every submission from the store
pub async fn clear_submissions(state: &AppState) -> Result<()> {
    tracing::info!("Clearing all submissions");
    state.store.clear().await
}
