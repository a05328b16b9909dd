//! Error types for ledger, registry and schedule operations.
//!
//! Every failure is one of two kinds: the caller supplied input that could
//! not be validated, or the caller asked for a record that does not exist.
//! Both are recoverable and reported back to the caller; no operation
//! mutates state before its input has been validated.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::identity::UserId;

/// Malformed or out-of-range input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("User name is required")]
    EmptyName,

    #[error("Invalid quantity: {0:?}")]
    InvalidQuantity(String),

    #[error("Quantity must be a non-negative number of kilograms, got {0}")]
    NegativeQuantity(f64),

    #[error("Invalid {field}: {value:?}")]
    InvalidCoordinate { field: &'static str, value: String },

    #[error("Invalid search radius: {0:?}")]
    InvalidRadius(String),

    #[error("Invalid date or time format: {0:?}")]
    InvalidDateTime(String),

    #[error(
        "Pickup must be scheduled at least {min_lead_minutes} minutes in advance \
         (requested {requested}, earliest {earliest})"
    )]
    PickupTooSoon {
        requested: NaiveDateTime,
        earliest: NaiveDateTime,
        min_lead_minutes: i64,
    },
}

/// A lookup that matched nothing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NotFoundError {
    #[error("Unknown material: {0}")]
    Material(String),

    #[error("No points found for user {0}")]
    User(UserId),

    #[error("No history found for user {0}")]
    History(UserId),

    #[error("No user data recorded yet")]
    NoLedgerData,

    #[error("No pickups scheduled yet")]
    NoPickups,

    #[error("No drop-off points added yet")]
    NoDropPoints,

    #[error("No drop-off locations within {radius_km} km ({registered} registered)")]
    NoneWithinRadius { radius_km: f64, registered: usize },
}

/// Top-level error returned by [`crate::Platform`] operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EcoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

impl EcoError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, EcoError>;
