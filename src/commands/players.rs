//! Player research commands

use tracing::info;

use crate::{
    cli::types::{Sport, TrendType},
    sleeper::SleeperClient,
    Result, Season, SeasonType, Week,
};

use super::print_json;

/// Handle the trending players command
pub async fn handle_trending(
    client: &SleeperClient,
    trend: TrendType,
    lookback_hours: u32,
    limit: u32,
) -> Result<()> {
    info!(%trend, lookback_hours, limit, "fetching trending players");

    // tarpaulin::skip - HTTP call, tested via integration tests
    let trending = client
        .get_trending_players(Sport::Nfl, trend, lookback_hours, limit)
        .await?;
    print_json(&trending)
}

/// Handle the player ownership command
pub async fn handle_ownership(
    client: &SleeperClient,
    season_type: SeasonType,
    season: Season,
    week: Option<Week>,
) -> Result<()> {
    info!(%season_type, %season, ?week, "fetching player ownership");

    // tarpaulin::skip - HTTP call, tested via integration tests
    let ownership = client
        .get_players_ownership(season_type, season, week)
        .await?;
    print_json(&ownership)
}
