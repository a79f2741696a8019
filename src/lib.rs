//! Sleeper Fantasy Football Library
//!
//! A read-only client for the public Sleeper fantasy football API, plus the
//! views built on top of it: standings, weekly scoreboards, close games and
//! team scores.
//!
//! ## Features
//!
//! - **League Data**: league, rosters, users, matchups, brackets, transactions, drafts
//! - **Player Data**: full player list, trending adds/drops, ownership research
//! - **Standings**: rosters ranked by record and points, with team names resolved
//! - **Scoreboards**: matchup entries paired into head-to-head games
//! - **Close Games**: games decided by less than a chosen margin
//! - **Team Score**: a stat field summed over a roster's starters
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sleeper_ffl::{league, LeagueId, SleeperClient, Week};
//!
//! # async fn example() -> sleeper_ffl::Result<()> {
//! let client = SleeperClient::new()?;
//! let league_id = LeagueId::new(784516360429940736);
//!
//! let rosters = client.rosters(league_id).await?;
//! let users = client.users(league_id).await?;
//! let matchups = client.matchups(league_id, Week::new(1)).await?;
//!
//! for game in league::get_scoreboards_json(&rosters, &matchups, &users)? {
//!     println!("{} {} - {:?}", game.team_a_name, game.team_a_points, game.team_b_points);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your Sleeper league ID to avoid passing it in every command:
//! ```bash
//! export SLEEPER_LEAGUE_ID=784516360429940736
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod league;
pub mod sleeper;

// Re-export commonly used types
pub use cli::types::{LeagueId, MatchupId, PlayerId, RosterId, Season, SeasonType, UserId, Week};
pub use error::{Result, SleeperError};
pub use sleeper::{SleeperClient, WeekStatsSource};

pub const LEAGUE_ID_ENV_VAR: &str = "SLEEPER_LEAGUE_ID";
