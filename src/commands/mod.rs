//! Command implementations for the Sleeper Fantasy Football CLI

pub mod league_data;
pub mod players;
pub mod scoreboard;
pub mod standings;
pub mod team_score;

use serde::Serialize;

use crate::{error::SleeperError, LeagueId, Result, LEAGUE_ID_ENV_VAR};

/// Resolve league ID from option or environment variable
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    if let Some(id) = league_id {
        return Ok(id);
    }

    match std::env::var(LEAGUE_ID_ENV_VAR) {
        Ok(value) => value.parse(),
        Err(_) => Err(SleeperError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        }),
    }
}

/// Pretty-print any serializable payload to stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?); // tarpaulin::skip
    Ok(())
}
