//! Command handlers.
//!
//! Each handler validates one command and returns the records it produces.
//! Handlers never touch platform state, so a rejected command leaves the
//! ledger, schedule and registry exactly as they were.

mod log_recycling;
mod refer_friend;
mod register_drop_point;
mod schedule_pickup;

pub use log_recycling::handle_log_recycling;
pub use refer_friend::handle_refer_friend;
pub use register_drop_point::handle_register_drop_point;
pub use schedule_pickup::handle_schedule_pickup;
