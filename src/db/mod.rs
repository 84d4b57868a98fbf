pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod rates;
pub mod store;

pub use rates::SqliteRates;
pub use store::SqliteStore;
