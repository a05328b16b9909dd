//! Achievement rules.
//!
//! Each rule is a threshold on the user's ledger entry or a check over their
//! log. Rules are independent; a user can unlock any combination.

use std::collections::BTreeSet;
use std::fmt;

use crate::ledger::{LedgerEntry, LogEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Achievement {
    FirstPickup,
    RecyclingRegular,
    EcoVeteran,
    FiftyPoints,
    RecyclingChampion,
    InvitedFriend,
}

impl Achievement {
    pub const ALL: [Achievement; 6] = [
        Achievement::FirstPickup,
        Achievement::RecyclingRegular,
        Achievement::EcoVeteran,
        Achievement::FiftyPoints,
        Achievement::RecyclingChampion,
        Achievement::InvitedFriend,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstPickup => "first pickup",
            Self::RecyclingRegular => "recycling regular",
            Self::EcoVeteran => "eco veteran",
            Self::FiftyPoints => "50+ points",
            Self::RecyclingChampion => "recycling champion",
            Self::InvitedFriend => "invited a friend",
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Achievements unlocked by a ledger entry and that user's log entries.
///
/// "invited a friend" unlocks on any scheduled pickup in the history;
/// referrals do not trigger it.
pub fn evaluate<'a, I>(entry: &LedgerEntry, history: I) -> BTreeSet<Achievement>
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    let mut unlocked = BTreeSet::new();

    let pickup_rules = [
        (1, Achievement::FirstPickup),
        (5, Achievement::RecyclingRegular),
        (10, Achievement::EcoVeteran),
    ];
    for (threshold, achievement) in pickup_rules {
        if entry.pickups >= threshold {
            unlocked.insert(achievement);
        }
    }

    let point_rules = [
        (50.0, Achievement::FiftyPoints),
        (100.0, Achievement::RecyclingChampion),
    ];
    for (threshold, achievement) in point_rules {
        if entry.points >= threshold {
            unlocked.insert(achievement);
        }
    }

    if history
        .into_iter()
        .any(|log| log.user == entry.user && log.kind.is_pickup())
    {
        unlocked.insert(Achievement::InvitedFriend);
    }

    unlocked
}
