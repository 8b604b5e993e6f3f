use storage::dto::ranking::RankingEntry;
use storage::services::ranking;

use crate::state::AppState;

/// Recompute the leaderboard from the current snapshot
pub fn get_ranking(state: &AppState) -> Vec<RankingEntry> {
    ranking::rank(&state.roster, &state.store.submissions())
}
