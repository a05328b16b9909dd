//! The recycling platform: one session's ledger, schedule and registry.
//!
//! A [`Platform`] owns every mutable collection and is passed by reference
//! to whatever drives it. Commands are validated by the handlers before any
//! collection changes, so each operation either applies fully or not at all.
//!
//! Nothing is persisted. All state is dropped with the platform.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::achievements::{self, Achievement};
use crate::catalog::RewardTier;
use crate::clock::{Clock, SystemClock};
use crate::commands::{
    FindNearbyDrops, LogRecycling, ReferFriend, RegisterDropPoint, SchedulePickup,
};
use crate::config::Config;
use crate::error::{NotFoundError, Result};
use crate::geo::{DropOffPoint, DropOffRegistry, GeoPoint, NearbyDrop};
use crate::handlers::{
    handle_log_recycling, handle_refer_friend, handle_register_drop_point, handle_schedule_pickup,
};
use crate::identity::UserId;
use crate::leaderboard::{self, Standing};
use crate::ledger::{Ledger, LogEntry};
use crate::pickups::{PickupSchedule, ScheduledPickup};
use crate::validation::{parse_coordinate, parse_radius};

/// Result of a successful pickup booking.
#[derive(Debug, Clone, PartialEq)]
pub struct PickupConfirmation {
    pub pickup: ScheduledPickup,
    pub points_awarded: f64,
    pub balance: f64,
}

/// Points credited by a recycling log or referral.
#[derive(Debug, Clone, PartialEq)]
pub struct Credited {
    /// The event as recorded (or, for unlogged referrals, as it would have been).
    pub entry: LogEntry,
    /// The user's balance after the credit.
    pub balance: f64,
}

/// A user's current balance.
#[derive(Debug, Clone, PartialEq)]
pub struct Balance {
    pub user: UserId,
    pub points: f64,
    pub pickups: u32,
    /// Highest reward tier reached, if any.
    pub tier: Option<RewardTier>,
}

/// A user's unlocked achievements with the totals they were derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementReport {
    pub user: UserId,
    pub points: f64,
    pub pickups: u32,
    pub unlocked: BTreeSet<Achievement>,
}

/// Owned state for one session.
#[derive(Debug)]
pub struct Platform {
    config: Config,
    clock: Box<dyn Clock>,
    ledger: Ledger,
    pickups: PickupSchedule,
    drop_offs: DropOffRegistry,
}

impl Platform {
    /// Create a platform using the local wall clock.
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: Config, clock: impl Clock + 'static) -> Self {
        Self {
            config,
            clock: Box::new(clock),
            ledger: Ledger::new(),
            pickups: PickupSchedule::new(),
            drop_offs: DropOffRegistry::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn pickups(&self) -> &PickupSchedule {
        &self.pickups
    }

    pub fn drop_offs(&self) -> &DropOffRegistry {
        &self.drop_offs
    }

    // ------------------------------------------------------------------
    // Ledger actions
    // ------------------------------------------------------------------

    /// Book a pickup and award the pickup bonus.
    pub fn schedule_pickup(&mut self, cmd: &SchedulePickup) -> Result<PickupConfirmation> {
        let (pickup, entry) = handle_schedule_pickup(cmd, &self.config, self.clock.now())
            .inspect_err(|e| warn!(error = %e, "Pickup rejected"))?;

        let points_awarded = entry.points;
        let balance = self.ledger.record(entry).points;
        let pickup = self.pickups.add(pickup).clone();

        info!(
            user = %pickup.user,
            pickup_id = %pickup.id,
            scheduled_for = %pickup.scheduled_for,
            points = points_awarded,
            "Pickup scheduled"
        );

        Ok(PickupConfirmation {
            pickup,
            points_awarded,
            balance,
        })
    }

    /// Record recycled material and award points for it.
    pub fn log_recycling(&mut self, cmd: &LogRecycling) -> Result<Credited> {
        let entry = handle_log_recycling(cmd, self.clock.now())
            .inspect_err(|e| warn!(error = %e, "Recycling log rejected"))?;

        let balance = self.ledger.record(entry.clone()).points;

        info!(
            user = %entry.user,
            material = entry.material_label(),
            quantity_kg = entry.quantity_kg(),
            points = entry.points,
            "Recycling logged"
        );

        Ok(Credited { entry, balance })
    }

    /// Credit the referrer.
    ///
    /// With `rewards.log_referrals` off, the credit bypasses the event log.
    pub fn refer_friend(&mut self, cmd: &ReferFriend) -> Result<Credited> {
        let entry = handle_refer_friend(cmd, &self.config.rewards, self.clock.now())
            .inspect_err(|e| warn!(error = %e, "Referral rejected"))?;

        let balance = if self.config.rewards.log_referrals {
            self.ledger.record(entry.clone()).points
        } else {
            self.ledger.credit_unlogged(&entry.user, entry.points).points
        };

        info!(
            user = %entry.user,
            points = entry.points,
            logged = self.config.rewards.log_referrals,
            "Referral credited"
        );

        Ok(Credited { entry, balance })
    }

    // ------------------------------------------------------------------
    // Ledger views
    // ------------------------------------------------------------------

    /// Current balance. Unknown users are not found, never zero.
    pub fn check_balance(&self, name: &str) -> Result<Balance> {
        let user = UserId::parse(name)?;
        let entry = self
            .ledger
            .get(&user)
            .ok_or_else(|| NotFoundError::User(user.clone()))?;

        debug!(user = %user, points = entry.points, "Balance checked");

        Ok(Balance {
            points: entry.points,
            pickups: entry.pickups,
            tier: RewardTier::for_points(entry.points),
            user,
        })
    }

    /// A user's log entries, oldest first.
    pub fn view_history(&self, name: &str) -> Result<Vec<&LogEntry>> {
        let user = UserId::parse(name)?;
        let history: Vec<&LogEntry> = self.ledger.log().for_user(&user).collect();
        if history.is_empty() {
            return Err(NotFoundError::History(user).into());
        }
        debug!(user = %user, entries = history.len(), "History viewed");
        Ok(history)
    }

    pub fn view_achievements(&self, name: &str) -> Result<AchievementReport> {
        let user = UserId::parse(name)?;
        let entry = self
            .ledger
            .get(&user)
            .ok_or_else(|| NotFoundError::User(user.clone()))?;

        let unlocked = achievements::evaluate(entry, self.ledger.history(&user));
        debug!(user = %user, unlocked = unlocked.len(), "Achievements evaluated");

        Ok(AchievementReport {
            points: entry.points,
            pickups: entry.pickups,
            unlocked,
            user,
        })
    }

    /// All users ranked by pickups, most first; ties keep ledger order.
    pub fn view_leaderboard(&self) -> Result<Vec<Standing>> {
        Ok(leaderboard::rank(self.ledger.entries())?)
    }

    pub fn view_pickups(&self) -> Result<&[ScheduledPickup]> {
        if self.pickups.is_empty() {
            return Err(NotFoundError::NoPickups.into());
        }
        Ok(self.pickups.all())
    }

    // ------------------------------------------------------------------
    // Drop-off locations
    // ------------------------------------------------------------------

    pub fn register_drop_point(&mut self, cmd: &RegisterDropPoint) -> Result<&DropOffPoint> {
        let point = handle_register_drop_point(cmd)
            .inspect_err(|e| warn!(error = %e, "Drop-off point rejected"))?;

        info!(
            name = %point.name,
            lat = point.location.lat,
            lon = point.location.lon,
            "Drop-off point registered"
        );
        Ok(self.drop_offs.register(point))
    }

    /// Drop-off points within the radius, in registration order.
    ///
    /// An empty result is reported as not found together with the number of
    /// registered points, so callers can tell "nothing nearby" from "nothing
    /// registered".
    pub fn find_nearby_drops(&self, query: &FindNearbyDrops) -> Result<Vec<NearbyDrop<'_>>> {
        let lat = parse_coordinate("latitude", &query.lat)?;
        let lon = parse_coordinate("longitude", &query.lon)?;
        let radius_km = parse_radius(&query.radius)?;

        let found = self.drop_offs.find_nearby(GeoPoint::new(lat, lon), radius_km);
        debug!(lat, lon, radius_km, found = found.len(), "Drop-off search");

        if found.is_empty() {
            return Err(NotFoundError::NoneWithinRadius {
                radius_km,
                registered: self.drop_offs.len(),
            }
            .into());
        }
        Ok(found)
    }

    pub fn view_drop_points(&self) -> Result<&[DropOffPoint]> {
        if self.drop_offs.is_empty() {
            return Err(NotFoundError::NoDropPoints.into());
        }
        Ok(self.drop_offs.points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Material;
    use crate::error::{EcoError, ValidationError};
    use crate::ledger::EventKind;
    use crate::test_utils::{fixed_now, platform, platform_with};

    fn log(p: &mut Platform, name: &str, material: &str, quantity: &str) -> Result<Credited> {
        p.log_recycling(&LogRecycling {
            name: name.to_string(),
            material: material.to_string(),
            quantity: quantity.to_string(),
        })
    }

    fn schedule(p: &mut Platform, name: &str) -> Result<PickupConfirmation> {
        p.schedule_pickup(&SchedulePickup {
            name: name.to_string(),
            address: "1 High St".to_string(),
            phone: String::new(),
            material: "Mixed".to_string(),
            date: "2030-01-01".to_string(),
            time: "12:00".to_string(),
        })
    }

    fn refer(p: &mut Platform, name: &str, friend: &str) -> Result<Credited> {
        p.refer_friend(&ReferFriend {
            name: name.to_string(),
            friend: friend.to_string(),
        })
    }

    fn register(p: &mut Platform, name: &str, lat: &str, lon: &str) {
        p.register_drop_point(&RegisterDropPoint {
            name: name.to_string(),
            address: "Somewhere".to_string(),
            lat: lat.to_string(),
            lon: lon.to_string(),
        })
        .unwrap();
    }

    fn nearby(lat: &str, lon: &str, radius: &str) -> FindNearbyDrops {
        FindNearbyDrops {
            lat: lat.to_string(),
            lon: lon.to_string(),
            radius: radius.to_string(),
        }
    }

    fn reconciled(p: &Platform, name: &str) -> bool {
        p.ledger().is_reconciled(&UserId::parse(name).unwrap())
    }

    #[test]
    fn test_log_plastic_then_balance() {
        let mut p = platform();
        let logged = log(&mut p, "Alice", "Plastic", "10").unwrap();
        assert_eq!(logged.entry.points, 50.0);
        assert_eq!(logged.entry.material_label(), "Plastic");
        assert_eq!(logged.balance, 50.0);

        let balance = p.check_balance("Alice").unwrap();
        assert_eq!(balance.points, 50.0);
        assert_eq!(balance.pickups, 0);
        assert_eq!(balance.tier, Some(RewardTier::EcoContributor));
    }

    #[test]
    fn test_points_equal_sum_of_rate_times_quantity() {
        let mut p = platform();
        let logs = [
            ("Plastic", 1.5),
            ("paper", 2.0),
            ("GLASS", 0.25),
            ("Metal", 3.0),
            ("E-waste", 0.7),
        ];
        let mut expected = 0.0;
        for (material, kg) in logs {
            log(&mut p, "Alice", material, &kg.to_string()).unwrap();
            expected += Material::lookup(material).unwrap().points_per_kg() * kg;
            assert!(reconciled(&p, "Alice"));
        }
        // Rejected attempts contribute nothing.
        assert!(log(&mut p, "Alice", "Wood", "3").is_err());
        assert!(log(&mut p, "Alice", "Paper", "heavy").is_err());

        assert_eq!(p.check_balance("Alice").unwrap().points, expected);
    }

    #[test]
    fn test_n_pickups_award_five_each() {
        let mut p = platform();
        for _ in 0..7 {
            schedule(&mut p, "Bob").unwrap();
        }
        let balance = p.check_balance("Bob").unwrap();
        assert_eq!(balance.pickups, 7);
        assert_eq!(balance.points, 35.0);
        assert_eq!(p.pickups().len(), 7);
        assert!(reconciled(&p, "Bob"));
    }

    #[test]
    fn test_pickup_confirmation() {
        let mut p = platform();
        let confirmation = schedule(&mut p, "Bob").unwrap();
        assert_eq!(confirmation.points_awarded, 5.0);
        assert_eq!(confirmation.balance, 5.0);
        assert_eq!(confirmation.pickup.user.as_str(), "Bob");
        assert_eq!(p.view_pickups().unwrap(), [confirmation.pickup]);
    }

    #[test]
    fn test_rejected_pickup_changes_nothing() {
        let mut p = platform();
        let err = p
            .schedule_pickup(&SchedulePickup {
                name: "Bob".to_string(),
                date: fixed_now().date().to_string(),
                time: "00:00".to_string(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.is_validation());
        assert!(p.ledger().is_empty());
        assert!(p.ledger().log().is_empty());
        assert!(p.pickups().is_empty());
    }

    #[test]
    fn test_referral_logged_by_default() {
        let mut p = platform();
        let credited = refer(&mut p, "Carol", "Dan").unwrap();
        assert_eq!(credited.entry.points, 10.0);
        assert_eq!(credited.balance, 10.0);
        assert_eq!(
            credited.entry.kind,
            EventKind::Referral {
                friend: "Dan".to_string()
            }
        );

        assert_eq!(p.check_balance("Carol").unwrap().points, 10.0);
        assert!(p.check_balance("Dan").unwrap_err().is_not_found());

        let history = p.view_history("Carol").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].material_label(), "Referral");
        assert!(reconciled(&p, "Carol"));
    }

    #[test]
    fn test_unlogged_referrals() {
        let mut config = Config::default();
        config.rewards.log_referrals = false;
        let mut p = platform_with(config);

        refer(&mut p, "Carol", "Dan").unwrap();
        assert_eq!(p.check_balance("Carol").unwrap().points, 10.0);
        assert_eq!(
            p.view_history("Carol").unwrap_err(),
            EcoError::NotFound(NotFoundError::History(UserId::parse("Carol").unwrap()))
        );
    }

    #[test]
    fn test_reconciliation_after_every_operation() {
        let mut p = platform();
        log(&mut p, "Eve", "Metal", "2").unwrap();
        assert!(reconciled(&p, "Eve"));
        schedule(&mut p, "Eve").unwrap();
        assert!(reconciled(&p, "Eve"));
        refer(&mut p, "Eve", "Fay").unwrap();
        assert!(reconciled(&p, "Eve"));
        log(&mut p, "Eve", "Glass", "0.3").unwrap();
        assert!(reconciled(&p, "Eve"));
        schedule(&mut p, "Eve").unwrap();
        assert!(reconciled(&p, "Eve"));

        let expected = 12.0 + 5.0 + 10.0 + 4.0 * 0.3 + 5.0;
        assert_eq!(p.check_balance("Eve").unwrap().points, expected);
    }

    #[test]
    fn test_balance_unknown_then_known() {
        let mut p = platform();
        assert_eq!(
            p.check_balance("Gus").unwrap_err(),
            EcoError::NotFound(NotFoundError::User(UserId::parse("Gus").unwrap()))
        );
        log(&mut p, "Gus", "Paper", "0").unwrap();
        assert_eq!(p.check_balance("Gus").unwrap().points, 0.0);
    }

    #[test]
    fn test_balance_requires_name() {
        let p = platform();
        assert_eq!(
            p.check_balance(" ").unwrap_err(),
            EcoError::Validation(ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_history_in_insertion_order() {
        let mut p = platform();
        log(&mut p, "Hal", "Paper", "1").unwrap();
        schedule(&mut p, "Hal").unwrap();
        log(&mut p, "Ida", "Glass", "1").unwrap();
        log(&mut p, "Hal", "Metal", "1").unwrap();

        let labels: Vec<_> = p
            .view_history("Hal")
            .unwrap()
            .iter()
            .map(|e| e.material_label())
            .collect();
        assert_eq!(labels, ["Paper", "Pickup Scheduled", "Metal"]);
        assert!(p.view_history("Nobody").unwrap_err().is_not_found());
    }

    #[test]
    fn test_achievements() {
        let mut p = platform();
        assert!(p.view_achievements("Ivy").unwrap_err().is_not_found());

        for _ in 0..5 {
            schedule(&mut p, "Ivy").unwrap();
        }
        log(&mut p, "Ivy", "Plastic", "7").unwrap();

        let report = p.view_achievements("Ivy").unwrap();
        assert_eq!(report.pickups, 5);
        assert_eq!(report.points, 60.0);
        let expected: BTreeSet<_> = [
            Achievement::FirstPickup,
            Achievement::RecyclingRegular,
            Achievement::FiftyPoints,
            Achievement::InvitedFriend,
        ]
        .into_iter()
        .collect();
        assert_eq!(report.unlocked, expected);
    }

    #[test]
    fn test_leaderboard() {
        let mut p = platform();
        assert_eq!(
            p.view_leaderboard().unwrap_err(),
            EcoError::NotFound(NotFoundError::NoLedgerData)
        );

        log(&mut p, "Ann", "Paper", "1").unwrap();
        schedule(&mut p, "Ben").unwrap();
        refer(&mut p, "Cy", "Dot").unwrap();
        schedule(&mut p, "Cy").unwrap();
        schedule(&mut p, "Ben").unwrap();

        let board = p.view_leaderboard().unwrap();
        let rows: Vec<_> = board
            .iter()
            .map(|s| (s.rank, s.user.as_str(), s.pickups))
            .collect();
        assert_eq!(rows, [(1, "Ben", 2), (2, "Cy", 1), (3, "Ann", 0)]);
    }

    #[test]
    fn test_drop_off_search() {
        let mut p = platform();
        assert_eq!(
            p.find_nearby_drops(&nearby("0", "0", "10")).unwrap_err(),
            EcoError::NotFound(NotFoundError::NoneWithinRadius {
                radius_km: 10.0,
                registered: 0
            })
        );

        register(&mut p, "Equator", "0", "0");

        let found = p.find_nearby_drops(&nearby("0", "1", "200")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].point.name, "Equator");
        assert!((found[0].distance_km - 111.19).abs() < 0.01);

        assert_eq!(
            p.find_nearby_drops(&nearby("0", "1", "50")).unwrap_err(),
            EcoError::NotFound(NotFoundError::NoneWithinRadius {
                radius_km: 50.0,
                registered: 1
            })
        );
    }

    #[test]
    fn test_drop_off_search_rejects_bad_input() {
        let p = platform();
        assert!(p
            .find_nearby_drops(&nearby("x", "0", "10"))
            .unwrap_err()
            .is_validation());
        assert!(p
            .find_nearby_drops(&nearby("0", "0", "wide"))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_rejected_drop_point_is_not_stored() {
        let mut p = platform();
        let err = p
            .register_drop_point(&RegisterDropPoint {
                name: "Bad".to_string(),
                address: String::new(),
                lat: "12".to_string(),
                lon: "abc".to_string(),
            })
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            p.view_drop_points().unwrap_err(),
            EcoError::NotFound(NotFoundError::NoDropPoints)
        );
    }

    #[test]
    fn test_view_pickups_empty() {
        let p = platform();
        assert_eq!(
            p.view_pickups().unwrap_err(),
            EcoError::NotFound(NotFoundError::NoPickups)
        );
    }
}
