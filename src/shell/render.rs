//! Console formatting for operation outcomes.

use crate::geo::{DropOffPoint, NearbyDrop};
use crate::leaderboard::Standing;
use crate::ledger::LogEntry;
use crate::pickups::ScheduledPickup;
use crate::platform::{AchievementReport, Balance, Credited, PickupConfirmation};
use crate::validation::PICKUP_DATETIME_FORMAT;

pub fn pickup_confirmation(confirmation: &PickupConfirmation) -> String {
    format!(
        "Pickup scheduled! ID: {} on {}\nYou earned +{} pts for scheduling a pickup (balance {} pts).",
        confirmation.pickup.id,
        confirmation.pickup.scheduled_for.format(PICKUP_DATETIME_FORMAT),
        confirmation.points_awarded,
        confirmation.balance,
    )
}

pub fn pickup_line(pickup: &ScheduledPickup) -> String {
    let mut line = format!(
        "[{}] {} - {} on {} at {}",
        pickup.id,
        pickup.user,
        pickup.material,
        pickup.scheduled_for.format(PICKUP_DATETIME_FORMAT),
        pickup.address,
    );
    if let Some(phone) = &pickup.phone {
        line.push_str(&format!(" (tel {})", phone));
    }
    line
}

pub fn recycling_credited(credited: &Credited) -> String {
    format!(
        "{} points earned for {}kg of {}! Balance: {} pts",
        credited.entry.points,
        credited.entry.quantity_kg(),
        credited.entry.material_label(),
        credited.balance,
    )
}

pub fn referral_credited(credited: &Credited, friend: &str) -> String {
    format!(
        "{} earned +{} pts for referring {}! Balance: {} pts",
        credited.entry.user,
        credited.entry.points,
        friend.trim(),
        credited.balance,
    )
}

pub fn balance(balance: &Balance) -> String {
    let mut text = format!(
        "{}'s Current Balance: {} pts ({} pickups)",
        balance.user, balance.points, balance.pickups
    );
    if let Some(tier) = balance.tier {
        text.push_str(&format!("\nReward tier: {}", tier));
    }
    text
}

pub fn history_line(entry: &LogEntry) -> String {
    format!(
        "- {}kg {} -> {} pts at {}",
        entry.quantity_kg(),
        entry.material_label(),
        entry.points,
        entry.timestamp.format(PICKUP_DATETIME_FORMAT),
    )
}

pub fn achievements(report: &AchievementReport) -> String {
    let mut text = format!(
        "{}'s Total Points: {}\nTotal Pickups: {}",
        report.user, report.points, report.pickups
    );
    if report.unlocked.is_empty() {
        text.push_str("\nNo achievements yet. Keep recycling!");
    } else {
        text.push_str("\nAchievements Unlocked:");
        for achievement in &report.unlocked {
            text.push_str(&format!("\n- {}", achievement));
        }
    }
    text
}

pub fn standing(standing: &Standing) -> String {
    format!(
        "{}. {} - {} pickups ({} pts)",
        standing.rank, standing.user, standing.pickups, standing.points
    )
}

pub fn nearby(drop: &NearbyDrop<'_>) -> String {
    format!(
        "{} ({:.2} km)\nAddress: {}",
        drop.point.name, drop.distance_km, drop.point.address
    )
}

pub fn drop_point(point: &DropOffPoint) -> String {
    format!(
        "{} at ({}, {}) - {}",
        point.name, point.location.lat, point.location.lon, point.address
    )
}
