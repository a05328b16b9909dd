//! Ecopoint - community recycling coordination
//!
//! Schedules pickups, logs recycling against a points ledger, derives
//! achievements and a leaderboard from that ledger, and matches users to
//! nearby drop-off locations by great-circle distance.
//!
//! Everything is held in memory by a [`Platform`] for the life of one
//! session. The [`shell`] module is a thin interactive front end over it.

pub mod achievements;
pub mod catalog;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod geo;
pub mod handlers;
pub mod identity;
pub mod leaderboard;
pub mod ledger;
pub mod pickups;
pub mod platform;
pub mod shell;
pub mod utils;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;

pub use catalog::{Material, RewardTier};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{EcoError, NotFoundError, Result, ValidationError};
pub use identity::UserId;
pub use platform::{AchievementReport, Balance, Credited, PickupConfirmation, Platform};
pub use shell::Shell;
