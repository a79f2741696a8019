//! Standings command implementation

use tracing::info;

use crate::{
    league::get_standings, sleeper::types::StandingsRow, sleeper::SleeperClient, LeagueId, Result,
};

use super::{print_json, resolve_league_id};

/// Handle the standings command
pub async fn handle_standings(
    client: &SleeperClient,
    league_id: Option<LeagueId>,
    as_json: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    info!(%league_id, "building standings");

    // tarpaulin::skip - HTTP calls, tested via integration tests
    let rosters = client.rosters(league_id).await?;
    let users = client.users(league_id).await?;
    let standings = get_standings(&rosters, &users)?;

    if as_json {
        print_json(&standings)?;
    } else {
        for line in format_standings(&standings) {
            println!("{}", line); // tarpaulin::skip - console output
        }
    }

    Ok(())
}

/// One text line per team: rank, name, record and points.
pub fn format_standings(standings: &[StandingsRow]) -> Vec<String> {
    standings
        .iter()
        .enumerate()
        .map(|(i, row)| {
            format!(
                "{:>2}. {} {}-{} ({} pts)",
                i + 1,
                row.team_name.as_deref().unwrap_or("(no owner)"),
                row.wins,
                row.losses,
                row.points
            )
        })
        .collect()
}
