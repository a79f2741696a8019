//! Derived league views built by joining rosters, users and matchups.
//!
//! Everything here is a pure function over caller-supplied collections, except
//! [`team_score::get_team_score`] which pulls one week of stats through a
//! [`WeekStatsSource`](crate::sleeper::WeekStatsSource). Each call builds its
//! lookup tables from scratch.

pub mod close_games;
pub mod identity;
pub mod scoreboard;
pub mod standings;
pub mod team_score;

pub use close_games::get_close_games;
pub use identity::{map_roster_id_to_owner_id, map_users_to_team_name, OwnerIndex, TeamNameIndex};
pub use scoreboard::{get_scoreboards, get_scoreboards_json, TEAM_NAME_NOT_AVAILABLE};
pub use standings::get_standings;
pub use team_score::{get_team_score, get_team_score_for_season, team_score};
