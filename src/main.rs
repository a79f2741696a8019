//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use sleeper_ffl::{
    cli::{Commands, GetCmd, Sleeper},
    commands::{
        league_data::{handle_league_data, LeagueResource},
        players::{handle_ownership, handle_trending},
        scoreboard::{handle_close_games, handle_scoreboard},
        standings::handle_standings,
        team_score::{handle_team_score, TeamScoreParams},
    },
    core::init_logging,
    Result, SleeperClient,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let app = Sleeper::parse();
    let client = SleeperClient::new()?;

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::League { league } => {
                handle_league_data(&client, league.league_id, LeagueResource::League).await?
            }
            GetCmd::Rosters { league } => {
                handle_league_data(&client, league.league_id, LeagueResource::Rosters).await?
            }
            GetCmd::Users { league } => {
                handle_league_data(&client, league.league_id, LeagueResource::Users).await?
            }
            GetCmd::Matchups { args } => {
                handle_league_data(
                    &client,
                    args.league.league_id,
                    LeagueResource::Matchups(args.week),
                )
                .await?
            }
            GetCmd::WinnersBracket { league } => {
                handle_league_data(&client, league.league_id, LeagueResource::WinnersBracket)
                    .await?
            }
            GetCmd::LosersBracket { league } => {
                handle_league_data(&client, league.league_id, LeagueResource::LosersBracket)
                    .await?
            }
            GetCmd::Transactions { args } => {
                handle_league_data(
                    &client,
                    args.league.league_id,
                    LeagueResource::Transactions(args.week),
                )
                .await?
            }
            GetCmd::TradedPicks { league } => {
                handle_league_data(&client, league.league_id, LeagueResource::TradedPicks).await?
            }
            GetCmd::Drafts { league } => {
                handle_league_data(&client, league.league_id, LeagueResource::Drafts).await?
            }

            GetCmd::Standings { league, json } => {
                handle_standings(&client, league.league_id, json).await?
            }

            GetCmd::Scoreboard { args, json } => {
                handle_scoreboard(&client, args.league.league_id, args.week, json).await?
            }

            GetCmd::CloseGames {
                args,
                threshold,
                json,
            } => {
                handle_close_games(&client, args.league.league_id, args.week, threshold, json)
                    .await?
            }

            GetCmd::TeamScore {
                args,
                roster_id,
                score_type,
                season,
                season_type,
            } => {
                handle_team_score(
                    &client,
                    TeamScoreParams {
                        league_id: args.league.league_id,
                        roster_id,
                        score_type,
                        week: args.week,
                        season,
                        season_type,
                    },
                )
                .await?
            }

            GetCmd::Trending {
                trend,
                hours,
                limit,
            } => handle_trending(&client, trend, hours, limit).await?,

            GetCmd::Ownership {
                season_type,
                season,
                week,
            } => handle_ownership(&client, season_type, season, week).await?,
        },
    }

    Ok(())
}
