pub mod breaks;
pub mod day;
pub mod timecard;

pub use breaks::Break;
pub use day::{Day, DayState};
pub use timecard::{Timecard, WeekKey};
