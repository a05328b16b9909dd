//! Append-only record of ledger-affecting actions.

use chrono::NaiveDateTime;

use crate::catalog::Material;
use crate::identity::UserId;
use crate::pickups::PickupId;

/// History category recorded for scheduled pickups.
pub const PICKUP_SCHEDULED: &str = "Pickup Scheduled";
/// History category recorded for referrals.
pub const REFERRAL: &str = "Referral";

/// What earned the points.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    PickupScheduled { pickup_id: PickupId },
    Recycled { material: Material, quantity_kg: f64 },
    Referral { friend: String },
}

impl EventKind {
    /// Material name, or the category for non-material events.
    pub fn material_label(&self) -> &'static str {
        match self {
            Self::PickupScheduled { .. } => PICKUP_SCHEDULED,
            Self::Recycled { material, .. } => material.name(),
            Self::Referral { .. } => REFERRAL,
        }
    }

    /// Kilograms recycled; zero for non-material events.
    pub fn quantity_kg(&self) -> f64 {
        match self {
            Self::Recycled { quantity_kg, .. } => *quantity_kg,
            Self::PickupScheduled { .. } | Self::Referral { .. } => 0.0,
        }
    }

    pub fn is_pickup(&self) -> bool {
        matches!(self, Self::PickupScheduled { .. })
    }
}

/// One entry in the event log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub user: UserId,
    pub kind: EventKind,
    /// Points awarded by this event alone.
    pub points: f64,
    pub timestamp: NaiveDateTime,
}

impl LogEntry {
    pub fn material_label(&self) -> &'static str {
        self.kind.material_label()
    }

    pub fn quantity_kg(&self) -> f64 {
        self.kind.quantity_kg()
    }
}

/// Entries in insertion order. Nothing is ever removed or rewritten.
#[derive(Debug, Default)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// A user's entries, oldest first.
    pub fn for_user(&self, user: &UserId) -> impl Iterator<Item = &LogEntry> + '_ {
        let user = user.clone();
        self.entries.iter().filter(move |e| e.user == user)
    }

    /// Sum of points across a user's entries, accumulated in log order.
    pub fn points_for(&self, user: &UserId) -> f64 {
        self.for_user(user).fold(0.0, |total, e| total + e.points)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 1, 1)
            .unwrap()
            .and_hms_opt(12, minute, 0)
            .unwrap()
    }

    fn entry(user: &str, kind: EventKind, points: f64, minute: u32) -> LogEntry {
        LogEntry {
            user: UserId::parse(user).unwrap(),
            kind,
            points,
            timestamp: at(minute),
        }
    }

    #[test]
    fn test_material_labels() {
        let pickup = EventKind::PickupScheduled {
            pickup_id: PickupId::new(),
        };
        let recycled = EventKind::Recycled {
            material: Material::EWaste,
            quantity_kg: 1.5,
        };
        let referral = EventKind::Referral {
            friend: "Bob".to_string(),
        };

        assert_eq!(pickup.material_label(), "Pickup Scheduled");
        assert_eq!(recycled.material_label(), "E-waste");
        assert_eq!(referral.material_label(), "Referral");
        assert_eq!(pickup.quantity_kg(), 0.0);
        assert_eq!(recycled.quantity_kg(), 1.5);
        assert!(pickup.is_pickup());
        assert!(!referral.is_pickup());
    }

    #[test]
    fn test_for_user_filters_and_keeps_order() {
        let mut log = EventLog::new();
        let paper = EventKind::Recycled {
            material: Material::Paper,
            quantity_kg: 2.0,
        };
        log.append(entry("Alice", paper.clone(), 6.0, 1));
        log.append(entry("Bob", paper.clone(), 6.0, 2));
        log.append(entry("Alice", paper, 6.0, 3));

        let alice = UserId::parse("Alice").unwrap();
        let minutes: Vec<_> = log
            .for_user(&alice)
            .map(|e| e.timestamp)
            .collect();
        assert_eq!(minutes, [at(1), at(3)]);
        assert_eq!(log.points_for(&alice), 12.0);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_points_for_unknown_user_is_zero() {
        let log = EventLog::new();
        assert!(log.is_empty());
        assert_eq!(log.points_for(&UserId::parse("Nobody").unwrap()), 0.0);
    }
}
