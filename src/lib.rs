//! Tracks cumulative logged work hours against a monthly working-hours
//! target. The target comes from the French business-day calendar, adjusted
//! by user-declared bonus and gift days, and the result renders as a short
//! colored status line.
//!

pub mod account;
pub mod cli;
pub mod settings;
pub mod utils;
pub mod watch;
