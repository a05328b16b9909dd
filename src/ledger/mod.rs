//! Per-user points ledger.
//!
//! The ledger keeps one running [`LedgerEntry`] per user alongside the
//! [`EventLog`] that explains it. Every point credit goes through
//! [`Ledger::record`], which updates the running total and appends the log
//! entry in one step, so a user's balance always equals the sum of their
//! history. [`Ledger::credit_unlogged`] exists only for deployments that opt
//! out of logging referrals and is the single way to break that equality.
//!
//! Entries are created on the first credit for a user and never removed.
//! Memory grows with every recorded event; there is no eviction.

mod event_log;

pub use event_log::{EventKind, EventLog, LogEntry, PICKUP_SCHEDULED, REFERRAL};

use std::collections::HashMap;

use tracing::debug;

use crate::identity::UserId;

/// Running totals for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub user: UserId,
    /// Never decreases.
    pub points: f64,
    /// Number of pickups scheduled.
    pub pickups: u32,
}

/// Ledger entries in creation order plus the event log.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
    index: HashMap<UserId, usize>,
    log: EventLog,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit the entry's points to its user and append it to the log.
    ///
    /// Pickup events also bump the user's pickup count.
    pub fn record(&mut self, entry: LogEntry) -> &LedgerEntry {
        let slot = self.credit(&entry.user, entry.points);
        if entry.kind.is_pickup() {
            self.entries[slot].pickups += 1;
        }
        debug!(
            user = %entry.user,
            category = entry.material_label(),
            points = entry.points,
            "Ledger event recorded"
        );
        self.log.append(entry);
        &self.entries[slot]
    }

    /// Credit points without a log entry.
    pub fn credit_unlogged(&mut self, user: &UserId, points: f64) -> &LedgerEntry {
        let slot = self.credit(user, points);
        debug!(user = %user, points, "Ledger credited without log entry");
        &self.entries[slot]
    }

    fn credit(&mut self, user: &UserId, points: f64) -> usize {
        debug_assert!(points >= 0.0, "ledger credits are never negative");
        match self.index.get(user).copied() {
            Some(slot) => {
                self.entries[slot].points += points;
                slot
            }
            None => {
                let slot = self.entries.len();
                self.entries.push(LedgerEntry {
                    user: user.clone(),
                    points,
                    pickups: 0,
                });
                self.index.insert(user.clone(), slot);
                slot
            }
        }
    }

    pub fn get(&self, user: &UserId) -> Option<&LedgerEntry> {
        self.index.get(user).map(|&slot| &self.entries[slot])
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// A user's log entries, oldest first.
    pub fn history(&self, user: &UserId) -> impl Iterator<Item = &LogEntry> + '_ {
        self.log.for_user(user)
    }

    /// Whether the user's balance equals the sum of their log entries.
    ///
    /// Unknown users reconcile trivially.
    pub fn is_reconciled(&self, user: &UserId) -> bool {
        let balance = self.get(user).map_or(0.0, |e| e.points);
        balance == self.log.points_for(user)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
