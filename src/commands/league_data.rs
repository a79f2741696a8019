//! Raw league endpoints, printed as the JSON Sleeper returned.

use tracing::info;

use crate::{sleeper::SleeperClient, LeagueId, Result, Week};

use super::{print_json, resolve_league_id};

/// League collection to dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeagueResource {
    League,
    Rosters,
    Users,
    Matchups(Week),
    WinnersBracket,
    LosersBracket,
    Transactions(Week),
    TradedPicks,
    Drafts,
}

/// Fetch one league resource and print it
pub async fn handle_league_data(
    client: &SleeperClient,
    league_id: Option<LeagueId>,
    resource: LeagueResource,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    info!(%league_id, ?resource, "fetching league data");

    // tarpaulin::skip - HTTP call, tested via integration tests
    let value = fetch_league_resource(client, league_id, resource).await?;
    print_json(&value)
}

pub async fn fetch_league_resource(
    client: &SleeperClient,
    league_id: LeagueId,
    resource: LeagueResource,
) -> Result<serde_json::Value> {
    match resource {
        LeagueResource::League => client.get_league(league_id).await,
        LeagueResource::Rosters => client.get_rosters(league_id).await,
        LeagueResource::Users => client.get_users(league_id).await,
        LeagueResource::Matchups(week) => client.get_matchups(league_id, week).await,
        LeagueResource::WinnersBracket => client.get_playoff_winners_bracket(league_id).await,
        LeagueResource::LosersBracket => client.get_playoff_losers_bracket(league_id).await,
        LeagueResource::Transactions(week) => client.get_transactions(league_id, week).await,
        LeagueResource::TradedPicks => client.get_traded_picks(league_id).await,
        LeagueResource::Drafts => client.get_all_drafts(league_id).await,
    }
}
