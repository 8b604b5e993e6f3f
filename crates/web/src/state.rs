use std::sync::Arc;

use storage::SubmissionStore;
use storage::models::Roster;

/// Shared application state: the store handle, the immutable roster and the
/// recent-activity bound. Constructed once at startup and passed to handlers
/// explicitly; nothing is read from ambient scope.
#[derive(Clone)]
pub struct AppState {
    pub store: SubmissionStore,
    pub roster: Arc<Roster>,
    pub recent_limit: usize,
}
