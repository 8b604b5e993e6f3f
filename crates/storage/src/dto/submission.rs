use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::Submission;

/// Request payload for crediting a new submission.
///
/// The derive only caps field sizes; emptiness rules (unknown operative,
/// blank submitter name, missing evidence) belong to intake so every
/// rejection carries its own reason.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSubmissionRequest {
    pub operative_id: String,

    #[validate(length(max = 255, message = "Submitter name must be at most 255 characters"))]
    pub submitter_name: String,

    /// Opaque encoded evidence blob
    pub evidence: String,
}

/// Response containing one stored submission. The evidence blob is not
/// echoed back.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub timestamp: i64,
    pub operative_id: String,
    pub submitter_name: String,
    pub points: f64,
}

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id,
            timestamp: submission.timestamp,
            operative_id: submission.operative_id,
            submitter_name: submission.submitter_name,
            points: submission.points,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct RecentActivityQuery {
    /// Maximum number of records to return; the configured default applies
    /// when omitted.
    pub limit: Option<u32>,
}

impl RecentActivityQuery {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(limit) = self.limit
            && !(1..=100).contains(&limit)
        {
            return Err("limit must be between 1 and 100".to_string());
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ClearQuery {
    /// Must be `true`; bulk clear is destructive and irreversible.
    #[serde(default)]
    pub confirm: bool,
}
