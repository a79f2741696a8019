//! Error types for the Sleeper Fantasy Football client

use thiserror::Error;

use crate::cli::types::{MatchupId, RosterId, UserId};


pub type Result<T> = std::result::Result<T, SleeperError>;

#[derive(Error, Debug)]
pub enum SleeperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid season type: {value}")]
    InvalidSeasonType { value: String },

    #[error("Owner not found among league users: {owner_id}")]
    OwnerNotFound { owner_id: UserId },

    #[error("Roster not found in league: {roster_id}")]
    RosterNotFound { roster_id: RosterId },

    #[error("Matchup {matchup_id} does not have two teams")]
    IncompleteMatchup { matchup_id: MatchupId },

    #[error("Sleeper API returned no data")]
    NoData,
}
