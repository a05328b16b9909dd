//! Scheduled pickups.

use std::fmt;

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::identity::UserId;

/// Identifier assigned when a pickup is scheduled.
///
/// Displayed as `PU-` plus the first eight hex digits; the full uuid keeps
/// identifiers unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickupId(Uuid);

impl PickupId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PickupId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PickupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.0.simple().to_string().to_uppercase();
        write!(f, "PU-{}", &hex[..8])
    }
}

/// A pickup booked by a user. Never modified once created.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledPickup {
    pub id: PickupId,
    pub user: UserId,
    /// Freeform description of what will be collected.
    pub material: String,
    pub address: String,
    pub phone: Option<String>,
    pub scheduled_for: NaiveDateTime,
}

/// All pickups in booking order.
#[derive(Debug, Default)]
pub struct PickupSchedule {
    pickups: Vec<ScheduledPickup>,
}

impl PickupSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, pickup: ScheduledPickup) -> &ScheduledPickup {
        self.pickups.push(pickup);
        &self.pickups[self.pickups.len() - 1]
    }

    pub fn all(&self) -> &[ScheduledPickup] {
        &self.pickups
    }

    pub fn len(&self) -> usize {
        self.pickups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pickups.is_empty()
    }
}
