use storage::dto::roster::OperativeResponse;

use crate::state::AppState;

/// Roster operatives in declaration order
pub fn list_roster(state: &AppState) -> Vec<OperativeResponse> {
    state.roster.iter().map(OperativeResponse::from).collect()
}
