//! Shared fixtures for unit tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::clock::FixedClock;
use crate::config::Config;
use crate::platform::Platform;

/// The instant every test platform sees as "now": 2029-06-01 10:00.
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2029, 6, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

/// Platform with default configuration and a frozen clock.
pub fn platform() -> Platform {
    platform_with(Config::for_test())
}

pub fn platform_with(config: Config) -> Platform {
    Platform::with_clock(config, FixedClock(fixed_now()))
}
