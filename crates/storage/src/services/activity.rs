use crate::models::Submission;

/// Most recent `limit` submissions, newest first.
///
/// Sorts before truncating instead of trusting store ordering, so the result
/// is correct whatever order the snapshot arrived in.
pub fn recent(submissions: &[Submission], limit: usize) -> Vec<Submission> {
    let mut ordered = submissions.to_vec();
    ordered.sort_by_key(|submission| std::cmp::Reverse(submission.timestamp));
    ordered.truncate(limit);
    ordered
}
