//! ecopoint: interactive community recycling platform
//!
//! Runs the menu shell over stdin/stdout against a fresh in-memory platform.
//! Nothing is persisted between runs.
//!
//! ## Configuration
//! - First argument: path to a YAML configuration file (optional)
//! - ECOPOINT_CONFIG: path to a YAML configuration file (optional)
//! - ECOPOINT__<SECTION>__<KEY>: per-setting overrides
//! - ECOPOINT_LOG: tracing filter (defaults to `logging.filter`, normally "warn")

use std::io;

use tracing::info;

use ecopoint::utils::bootstrap::init_tracing;
use ecopoint::{Config, Platform, Shell};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1);
    let config = Config::load(config_path.as_deref())?;

    init_tracing(&config.logging.filter);
    info!(
        pickup_points = config.rewards.pickup_points,
        referral_points = config.rewards.referral_points,
        log_referrals = config.rewards.log_referrals,
        "ecopoint started"
    );

    let stdin = io::stdin();
    let mut shell = Shell::new(Platform::new(config), stdin.lock(), io::stdout());
    shell.run()?;
    Ok(())
}
