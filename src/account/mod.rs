//! Monthly time-accounting engine. Computes French business-day targets,
//! aggregates raw per-day duration records into a monthly total, applies
//! bonus/gift day adjustments and renders the result as a status text with a
//! progress color. Every function here is a deterministic function of its
//! explicit inputs, the caller supplies "now" as a `(year, month)` pair.

pub mod aggregate;
pub mod display;
pub mod holidays;
pub mod monthly;
pub mod working_days;
