//! Team score command implementation

use tracing::info;

use crate::{
    error::SleeperError,
    league::{
        get_team_score_for_season,
        team_score::{DEFAULT_STATS_SEASON, DEFAULT_STATS_SEASON_TYPE},
    },
    sleeper::SleeperClient,
    LeagueId, Result, RosterId, Season, SeasonType, Week,
};

use super::resolve_league_id;

/// Parameters for the team score command
#[derive(Debug)]
pub struct TeamScoreParams {
    pub league_id: Option<LeagueId>,
    pub roster_id: RosterId,
    pub score_type: String,
    pub week: Week,
    /// Stats season, [`DEFAULT_STATS_SEASON`] when unset
    pub season: Option<Season>,
    /// Stats season type, [`DEFAULT_STATS_SEASON_TYPE`] when unset
    pub season_type: Option<SeasonType>,
}

/// Handle the team score command
pub async fn handle_team_score(client: &SleeperClient, params: TeamScoreParams) -> Result<()> {
    let league_id = resolve_league_id(params.league_id)?;
    let season = params.season.unwrap_or(DEFAULT_STATS_SEASON);
    let season_type = params.season_type.unwrap_or(DEFAULT_STATS_SEASON_TYPE);

    // tarpaulin::skip - HTTP calls, tested via integration tests
    let rosters = client.rosters(league_id).await?;
    let roster = rosters
        .iter()
        .find(|r| r.roster_id == params.roster_id)
        .ok_or(SleeperError::RosterNotFound {
            roster_id: params.roster_id,
        })?;

    info!(
        %league_id,
        roster_id = %roster.roster_id,
        starters = roster.starters.len(),
        %season,
        %season_type,
        "scoring starters"
    );

    let score = get_team_score_for_season(
        client,
        season_type,
        season,
        &roster.starters,
        &params.score_type,
        params.week,
    )
    .await?;

    // tarpaulin::skip - console output
    println!(
        "Roster {} [week {}, {} {}] {}: {:.2}",
        roster.roster_id, params.week, season_type, season, params.score_type, score
    );

    Ok(())
}
