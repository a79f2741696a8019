//! Scoreboard and close-game commands

use tracing::info;

use crate::{
    league::{get_close_games, get_scoreboards, scoreboard::summarize_scoreboards},
    sleeper::{types::MatchupSummary, SleeperClient},
    LeagueId, Result, Week,
};

use super::{print_json, resolve_league_id};

/// Handle the scoreboard command
pub async fn handle_scoreboard(
    client: &SleeperClient,
    league_id: Option<LeagueId>,
    week: Week,
    as_json: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    info!(%league_id, %week, "building scoreboard");

    // tarpaulin::skip - HTTP calls, tested via integration tests
    let rosters = client.rosters(league_id).await?;
    let users = client.users(league_id).await?;
    let matchups = client.matchups(league_id, week).await?;

    let summaries = get_scoreboards(&rosters, &matchups, &users)?
        .map(|scoreboards| summarize_scoreboards(&scoreboards))
        .unwrap_or_default();

    print_summaries(&summaries, week, as_json)
}

/// Handle the close-games command
pub async fn handle_close_games(
    client: &SleeperClient,
    league_id: Option<LeagueId>,
    week: Week,
    threshold: f64,
    as_json: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    info!(%league_id, %week, threshold, "looking for close games");

    // tarpaulin::skip - HTTP calls, tested via integration tests
    let rosters = client.rosters(league_id).await?;
    let users = client.users(league_id).await?;
    let matchups = client.matchups(league_id, week).await?;

    let summaries = match get_scoreboards(&rosters, &matchups, &users)? {
        Some(scoreboards) => summarize_scoreboards(&get_close_games(&scoreboards, threshold)?),
        None => Vec::new(),
    };

    print_summaries(&summaries, week, as_json)
}

fn print_summaries(summaries: &[MatchupSummary], week: Week, as_json: bool) -> Result<()> {
    if as_json {
        return print_json(summaries);
    }

    if summaries.is_empty() {
        println!("No matchups for week {}", week); // tarpaulin::skip
    }
    for line in format_summaries(summaries) {
        println!("{}", line); // tarpaulin::skip - console output
    }
    Ok(())
}

/// One text line per game, `team A score - score team B`.
pub fn format_summaries(summaries: &[MatchupSummary]) -> Vec<String> {
    summaries
        .iter()
        .map(|game| match (&game.team_b_name, game.team_b_points) {
            (Some(team_b), Some(points_b)) => format!(
                "[{}] {} {:.2} - {:.2} {}",
                game.matchup_id, game.team_a_name, game.team_a_points, points_b, team_b
            ),
            _ => format!(
                "[{}] {} {:.2} (bye)",
                game.matchup_id, game.team_a_name, game.team_a_points
            ),
        })
        .collect()
}
