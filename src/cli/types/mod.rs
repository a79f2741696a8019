//! Type-safe wrappers and enums for Sleeper Fantasy Football data.

pub mod ids;
pub mod players;
pub mod time;


pub use ids::{LeagueId, MatchupId, PlayerId, RosterId, UserId};
pub use players::{Sport, TrendType};
pub use time::{Season, SeasonType, Week};
