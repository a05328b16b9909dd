//! Commands as typed by the user.
//!
//! Fields hold raw text. Handlers in [`crate::handlers`] validate them and
//! produce the events the [`crate::Platform`] applies.

/// Book a pickup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchedulePickup {
    pub name: String,
    pub address: String,
    /// Optional contact number; blank means none.
    pub phone: String,
    /// Freeform description, not checked against the catalog.
    pub material: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
}

/// Record recycled material.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogRecycling {
    pub name: String,
    pub material: String,
    /// Kilograms.
    pub quantity: String,
}

/// Credit a user for referring a friend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferFriend {
    pub name: String,
    pub friend: String,
}

/// Add a drop-off location.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterDropPoint {
    pub name: String,
    pub address: String,
    pub lat: String,
    pub lon: String,
}

/// Search for drop-off locations around a position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindNearbyDrops {
    pub lat: String,
    pub lon: String,
    /// Kilometres.
    pub radius: String,
}
