pub mod date;
pub mod formatting;
pub mod time;

pub use formatting::{format_money, hours2readable};
