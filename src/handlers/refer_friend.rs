//! Handler for the ReferFriend command.

use chrono::NaiveDateTime;

use crate::commands::ReferFriend;
use crate::config::RewardsConfig;
use crate::error::Result;
use crate::identity::UserId;
use crate::ledger::{EventKind, LogEntry};

/// Handle the ReferFriend command.
///
/// Only the referrer is credited; the friend gets no ledger entry.
pub fn handle_refer_friend(
    cmd: &ReferFriend,
    rewards: &RewardsConfig,
    now: NaiveDateTime,
) -> Result<LogEntry> {
    let user = UserId::parse(&cmd.name)?;

    Ok(LogEntry {
        user,
        kind: EventKind::Referral {
            friend: cmd.friend.trim().to_string(),
        },
        points: rewards.referral_points,
        timestamp: now,
    })
}
