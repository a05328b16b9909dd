//! Handler for the SchedulePickup command.

use chrono::{NaiveDateTime, TimeDelta};

use crate::commands::SchedulePickup;
use crate::config::Config;
use crate::error::{Result, ValidationError};
use crate::identity::UserId;
use crate::ledger::{EventKind, LogEntry};
use crate::pickups::{PickupId, ScheduledPickup};
use crate::validation::parse_pickup_datetime;

/// Handle the SchedulePickup command.
///
/// Produces the pickup and its ledger event. Fails if the date or time does
/// not parse, or the pickup is less than `schedule.min_lead_minutes` away.
pub fn handle_schedule_pickup(
    cmd: &SchedulePickup,
    config: &Config,
    now: NaiveDateTime,
) -> Result<(ScheduledPickup, LogEntry)> {
    let user = UserId::parse(&cmd.name)?;
    let scheduled_for = parse_pickup_datetime(&cmd.date, &cmd.time)?;

    let min_lead_minutes = config.schedule.min_lead_minutes;
    let lead = TimeDelta::try_minutes(min_lead_minutes).unwrap_or(TimeDelta::MAX);
    let earliest = now.checked_add_signed(lead).unwrap_or(NaiveDateTime::MAX);
    if scheduled_for < earliest {
        return Err(ValidationError::PickupTooSoon {
            requested: scheduled_for,
            earliest,
            min_lead_minutes,
        }
        .into());
    }

    let phone = cmd.phone.trim();
    let pickup = ScheduledPickup {
        id: PickupId::new(),
        user: user.clone(),
        material: cmd.material.trim().to_string(),
        address: cmd.address.trim().to_string(),
        phone: (!phone.is_empty()).then(|| phone.to_string()),
        scheduled_for,
    };

    let entry = LogEntry {
        user,
        kind: EventKind::PickupScheduled {
            pickup_id: pickup.id,
        },
        points: config.rewards.pickup_points,
        timestamp: now,
    };

    Ok((pickup, entry))
}
