use crate::dto::submission::CreateSubmissionRequest;
use crate::error::{Result, StorageError};
use crate::models::{Roster, Submission};
use crate::store::SubmissionStore;

/// Validates a submission request, builds the record and appends it to the
/// store.
///
/// Validation failures abort before any store interaction, and connectivity
/// is an explicit precondition checked before the write is attempted. A store
/// failure is surfaced to the caller, never swallowed. On success exactly one
/// record has been appended and no existing record touched.
pub async fn submit(
    store: &SubmissionStore,
    roster: &Roster,
    request: &CreateSubmissionRequest,
) -> Result<Submission> {
    let operative = roster
        .get(&request.operative_id)
        .ok_or_else(|| StorageError::UnknownOperative(request.operative_id.clone()))?;

    let submitter_name = request.submitter_name.trim();
    if submitter_name.is_empty() {
        return Err(StorageError::EmptySubmitterName);
    }

    if request.evidence.is_empty() {
        return Err(StorageError::EmptyEvidence);
    }

    if !store.connected() {
        return Err(StorageError::Unavailable);
    }

    let submission = Submission::credit(
        operative,
        submitter_name.to_string(),
        request.evidence.clone(),
    );
    store.append(&submission).await?;

    Ok(submission)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(operative_id: &str, submitter_name: &str, evidence: &str) -> CreateSubmissionRequest {
        CreateSubmissionRequest {
            operative_id: operative_id.to_string(),
            submitter_name: submitter_name.to_string(),
            evidence: evidence.to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_appends_one_record_with_snapshot_weight() {
        let store = SubmissionStore::new();
        let roster = Roster::builtin();

        let submission = submit(&store, &roster, &request("esdras", "  Dr. Marcos  ", "ZXZpZGVuY2U="))
            .await
            .unwrap();

        assert_eq!(submission.operative_id, "esdras");
        assert_eq!(submission.submitter_name, "Dr. Marcos");
        assert_eq!(submission.points, 1.5);

        let stored = store.submissions();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, submission.id);
    }

    #[tokio::test]
    async fn test_unknown_operative_rejected_before_store() {
        let store = SubmissionStore::new();
        let roster = Roster::builtin();

        let err = submit(&store, &roster, &request("ghost", "Dr. Marcos", "ZXZpZGVuY2U="))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::UnknownOperative(ref id) if id == "ghost"));
        assert!(err.is_rejection());
        assert!(store.submissions().is_empty());
    }

    #[tokio::test]
    async fn test_blank_submitter_name_rejected() {
        let store = SubmissionStore::new();
        let roster = Roster::builtin();

        let err = submit(&store, &roster, &request("adriele", "   ", "ZXZpZGVuY2U="))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::EmptySubmitterName));
        assert!(store.submissions().is_empty());
    }

    #[tokio::test]
    async fn test_missing_evidence_rejected() {
        let store = SubmissionStore::new();
        let roster = Roster::builtin();

        let err = submit(&store, &roster, &request("adriele", "Dr. Marcos", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::EmptyEvidence));
        assert!(store.submissions().is_empty());
    }

    #[tokio::test]
    async fn test_disconnected_store_surfaces_as_unavailable() {
        let store = SubmissionStore::new();
        store.set_connected(false);
        let roster = Roster::builtin();

        let err = submit(&store, &roster, &request("adriele", "Dr. Marcos", "ZXZpZGVuY2U="))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Unavailable));
        assert!(!err.is_rejection());
    }
}
