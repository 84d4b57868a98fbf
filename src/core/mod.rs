pub mod aggregator;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod engine;
pub mod ledger;
pub mod log;
pub mod reconcile;
pub mod state;

pub use calendar::{Calendar, DateValue};
pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::TimecardEngine;
pub use reconcile::DayCorrection;
