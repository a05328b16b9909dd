//! Point awards and scheduling rules.

use serde::Deserialize;

/// Default points for scheduling a pickup.
pub const DEFAULT_PICKUP_POINTS: f64 = 5.0;
/// Default points credited to the referring user.
pub const DEFAULT_REFERRAL_POINTS: f64 = 10.0;
/// Default minimum lead time between scheduling and pickup.
pub const DEFAULT_MIN_LEAD_MINUTES: i64 = 30;

/// Flat awards for non-material events.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RewardsConfig {
    /// Points for each scheduled pickup.
    pub pickup_points: f64,
    /// Points for each referral, credited to the referrer only.
    pub referral_points: f64,
    /// Append referrals to the event log.
    ///
    /// When false, referral points reach the balance without a log entry and
    /// the balance no longer equals the sum of the user's history.
    pub log_referrals: bool,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            pickup_points: DEFAULT_PICKUP_POINTS,
            referral_points: DEFAULT_REFERRAL_POINTS,
            log_referrals: true,
        }
    }
}

/// Pickup scheduling rules.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Pickups must be at least this many minutes in the future.
    pub min_lead_minutes: i64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            min_lead_minutes: DEFAULT_MIN_LEAD_MINUTES,
        }
    }
}
