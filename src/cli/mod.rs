//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{LeagueId, RosterId, Season, SeasonType, TrendType, Week};

/// League selection shared between commands
#[derive(Debug, Args)]
pub struct LeagueArgs {
    /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,
}

/// League selection plus the week to look at
#[derive(Debug, Args)]
pub struct LeagueWeekArgs {
    #[clap(flatten)]
    pub league: LeagueArgs,

    /// Week number.
    #[clap(long, short, default_value_t = Week::default())]
    pub week: Week,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// League metadata as returned by Sleeper
    League {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// Raw rosters of the league
    Rosters {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// Raw users of the league
    Users {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// Raw matchup entries for a week
    Matchups {
        #[clap(flatten)]
        args: LeagueWeekArgs,
    },

    /// Playoff winners bracket
    WinnersBracket {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// Playoff losers bracket
    LosersBracket {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// Transactions made during a week
    Transactions {
        #[clap(flatten)]
        args: LeagueWeekArgs,
    },

    /// Draft picks that changed hands
    TradedPicks {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// Every draft of the league
    Drafts {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// League standings by record and points
    Standings {
        #[clap(flatten)]
        league: LeagueArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Head-to-head scores for a week
    Scoreboard {
        #[clap(flatten)]
        args: LeagueWeekArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Games of a week decided by less than a point margin
    CloseGames {
        #[clap(flatten)]
        args: LeagueWeekArgs,

        /// Maximum point difference (exclusive) for a game to count as close.
        #[clap(long, short, default_value_t = 5.0)]
        threshold: f64,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Sum a stat field over a roster's starters for one week
    TeamScore {
        #[clap(flatten)]
        args: LeagueWeekArgs,

        /// Roster whose starters are scored.
        #[clap(long, short)]
        roster_id: RosterId,

        /// Stat field to sum (e.g. pts_ppr, pts_half_ppr, pts_std).
        #[clap(long, default_value = "pts_ppr")]
        score_type: String,

        /// Stats season year. Defaults to 2019.
        #[clap(long, short)]
        season: Option<Season>,

        /// Stats season type. Defaults to regular.
        #[clap(long)]
        season_type: Option<SeasonType>,
    },

    /// Players trending on waivers
    Trending {
        /// add or drop
        #[clap(long = "type", value_enum, default_value_t = TrendType::Add)]
        trend: TrendType,

        /// Look-back window in hours.
        #[clap(long, default_value_t = 24)]
        hours: u32,

        /// Number of players to return.
        #[clap(long, default_value_t = 25)]
        limit: u32,
    },

    /// Player ownership research for a season or week
    Ownership {
        #[clap(long, value_enum, default_value_t = SeasonType::Regular)]
        season_type: SeasonType,

        /// Season year (e.g. 2025).
        #[clap(long, short)]
        season: Season,

        /// Restrict to a single week.
        #[clap(long, short)]
        week: Option<Week>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "sleeper-ffl", about = "Sleeper Fantasy Football CLI")]
pub struct Sleeper {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from Sleeper Fantasy Football
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
