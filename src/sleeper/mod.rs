//! Sleeper API access: transport, raw record types and the stats capability.

pub mod http;
pub mod stats;
pub mod types;

pub use http::SleeperClient;
pub use stats::WeekStatsSource;
