//! Ranking of users by scheduled pickups.

use crate::error::NotFoundError;
use crate::identity::UserId;
use crate::ledger::LedgerEntry;

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    /// 1-based position.
    pub rank: usize,
    pub user: UserId,
    pub pickups: u32,
    pub points: f64,
}

/// Rank entries by pickup count, most first.
///
/// The sort is stable: users with equal counts keep ledger order. An empty
/// ledger is reported as [`NotFoundError::NoLedgerData`].
pub fn rank(entries: &[LedgerEntry]) -> Result<Vec<Standing>, NotFoundError> {
    if entries.is_empty() {
        return Err(NotFoundError::NoLedgerData);
    }

    let mut sorted: Vec<&LedgerEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.pickups.cmp(&a.pickups));

    Ok(sorted
        .into_iter()
        .enumerate()
        .map(|(i, entry)| Standing {
            rank: i + 1,
            user: entry.user.clone(),
            pickups: entry.pickups,
            points: entry.points,
        })
        .collect())
}
