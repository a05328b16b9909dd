//! Handler for the LogRecycling command.

use chrono::NaiveDateTime;

use crate::catalog::Material;
use crate::commands::LogRecycling;
use crate::error::Result;
use crate::identity::UserId;
use crate::ledger::{EventKind, LogEntry};
use crate::validation::parse_quantity;

/// Handle the LogRecycling command.
///
/// Awards `rate(material) * quantity` points, unrounded. Fails if the
/// material is not in the catalog or the quantity is not a non-negative
/// number.
pub fn handle_log_recycling(cmd: &LogRecycling, now: NaiveDateTime) -> Result<LogEntry> {
    let user = UserId::parse(&cmd.name)?;
    let material = Material::lookup(&cmd.material)?;
    let quantity_kg = parse_quantity(&cmd.quantity)?;

    Ok(LogEntry {
        user,
        kind: EventKind::Recycled {
            material,
            quantity_kg,
        },
        points: material.points_per_kg() * quantity_kg,
        timestamp: now,
    })
}
