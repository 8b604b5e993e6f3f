use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::Operative;

/// One timestamped, evidence-backed record crediting an operative with points.
///
/// Immutable after creation; removable only through the bulk clear.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Submission {
    pub id: Uuid,
    /// Milliseconds since the Unix epoch, assigned at intake time by the
    /// submitting client.
    pub timestamp: i64,
    pub operative_id: String,
    pub submitter_name: String,
    /// Opaque encoded evidence blob. Never decoded by this service.
    pub evidence: String,
    /// The operative's weight at the moment of submission, not a live
    /// reference to the roster.
    pub points: f64,
}

impl Submission {
    /// Builds a fresh submission crediting `operative` with its current
    /// weight.
    pub fn credit(operative: &Operative, submitter_name: String, evidence: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now().timestamp_millis(),
            operative_id: operative.id.clone(),
            submitter_name,
            evidence,
            points: operative.weight,
        }
    }
}
