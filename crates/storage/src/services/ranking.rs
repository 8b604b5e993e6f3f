use std::collections::HashMap;

use crate::dto::ranking::RankingEntry;
use crate::models::{Roster, Submission};

/// Computes the full leaderboard from the roster and the current submission
/// set.
///
/// Always yields one entry per roster member; operatives without submissions
/// appear with total 0 and count 0. Submissions referencing an operative
/// absent from the roster contribute to no entry. Entries are sorted by total
/// points descending; equal totals keep roster declaration order, so repeated
/// calls with the same input produce the same order.
pub fn rank(roster: &Roster, submissions: &[Submission]) -> Vec<RankingEntry> {
    let mut totals: HashMap<&str, (f64, i64)> = HashMap::new();
    for submission in submissions {
        if !roster.contains(&submission.operative_id) {
            continue;
        }
        let slot = totals
            .entry(submission.operative_id.as_str())
            .or_insert((0.0, 0));
        slot.0 += submission.points;
        slot.1 += 1;
    }

    let mut entries: Vec<RankingEntry> = roster
        .iter()
        .map(|operative| {
            let (total_points, submission_count) = totals
                .get(operative.id.as_str())
                .copied()
                .unwrap_or((0.0, 0));

            RankingEntry {
                rank: 0,
                operative_id: operative.id.clone(),
                name: operative.name.clone(),
                sector: operative.sector,
                weight: operative.weight,
                total_points,
                submission_count,
            }
        })
        .collect();

    // Stable sort keeps roster declaration order for equal totals.
    entries.sort_by(|a, b| b.total_points.total_cmp(&a.total_points));

    for (position, entry) in entries.iter_mut().enumerate() {
        entry.rank = (position + 1) as i64;
    }

    entries
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::models::{Operative, Sector};

    fn roster() -> Roster {
        Roster::new(vec![
            Operative {
                id: "a".to_string(),
                name: "A".to_string(),
                sector: Sector::Onboarding,
                weight: 1.0,
            },
            Operative {
                id: "b".to_string(),
                name: "B".to_string(),
                sector: Sector::Ongoing,
                weight: 0.5,
            },
        ])
    }

    fn submission(operative_id: &str, points: f64) -> Submission {
        Submission {
            id: Uuid::new_v4(),
            timestamp: 0,
            operative_id: operative_id.to_string(),
            submitter_name: "Dr. Marcos".to_string(),
            evidence: "ZXZpZGVuY2U=".to_string(),
            points,
        }
    }

    #[test]
    fn test_one_entry_per_roster_member() {
        let entries = rank(&roster(), &[]);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.total_points == 0.0 && e.submission_count == 0));

        let entries = rank(&roster(), &[submission("a", 1.0)]);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_weighted_totals_and_order() {
        let submissions = vec![
            submission("a", 1.0),
            submission("b", 0.5),
            submission("a", 1.0),
        ];

        let entries = rank(&roster(), &submissions);

        assert_eq!(entries[0].operative_id, "a");
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[0].total_points, 2.0);
        assert_eq!(entries[0].submission_count, 2);

        assert_eq!(entries[1].operative_id, "b");
        assert_eq!(entries[1].rank, 2);
        assert_eq!(entries[1].total_points, 0.5);
        assert_eq!(entries[1].submission_count, 1);
    }

    #[test]
    fn test_total_conservation() {
        let submissions = vec![
            submission("a", 1.0),
            submission("b", 0.5),
            submission("a", 1.0),
            submission("ghost", 9.0),
        ];

        let entries = rank(&roster(), &submissions);
        let entry_total: f64 = entries.iter().map(|e| e.total_points).sum();
        let matched_total: f64 = submissions
            .iter()
            .filter(|s| roster().contains(&s.operative_id))
            .map(|s| s.points)
            .sum();

        assert_eq!(entry_total, matched_total);
    }

    #[test]
    fn test_ghost_submissions_affect_nothing() {
        let baseline = rank(&roster(), &[submission("a", 1.0)]);
        let with_ghost = rank(
            &roster(),
            &[submission("a", 1.0), submission("ghost", 9.0)],
        );

        assert_eq!(baseline.len(), with_ghost.len());
        for (base, ghosted) in baseline.iter().zip(with_ghost.iter()) {
            assert_eq!(base.operative_id, ghosted.operative_id);
            assert_eq!(base.total_points, ghosted.total_points);
            assert_eq!(base.submission_count, ghosted.submission_count);
        }
    }

    #[test]
    fn test_order_independent_in_submissions() {
        let forward = vec![
            submission("a", 1.0),
            submission("b", 0.5),
            submission("a", 1.0),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let from_forward = rank(&roster(), &forward);
        let from_reversed = rank(&roster(), &reversed);

        for (x, y) in from_forward.iter().zip(from_reversed.iter()) {
            assert_eq!(x.operative_id, y.operative_id);
            assert_eq!(x.total_points, y.total_points);
            assert_eq!(x.submission_count, y.submission_count);
        }
    }

    #[test]
    fn test_ties_keep_roster_declaration_order() {
        // Both operatives end up at 1.0.
        let submissions = vec![submission("b", 0.5), submission("b", 0.5), submission("a", 1.0)];

        let first = rank(&roster(), &submissions);
        let second = rank(&roster(), &submissions);

        assert_eq!(first[0].operative_id, "a");
        assert_eq!(first[1].operative_id, "b");

        // Idempotent, including tie-break order.
        for (x, y) in first.iter().zip(second.iter()) {
            assert_eq!(x.operative_id, y.operative_id);
            assert_eq!(x.rank, y.rank);
        }
    }
}
