use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Sector;

/// One leaderboard row. Recomputed from scratch on every snapshot, never
/// persisted or incrementally patched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RankingEntry {
    pub rank: i64,
    pub operative_id: String,
    pub name: String,
    pub sector: Sector,
    pub weight: f64,
    pub total_points: f64,
    pub submission_count: i64,
}
