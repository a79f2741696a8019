//! Fantasy points for a set of starters in one week.

use crate::{
    cli::types::{PlayerId, Season, SeasonType, Week},
    error::Result,
    sleeper::{stats::WeekStatsSource, types::WeekStats},
};

/// Stats season used by [`get_team_score`].
///
/// Pinned to the 2019 regular season; use [`get_team_score_for_season`] for
/// any other year.
pub const DEFAULT_STATS_SEASON_TYPE: SeasonType = SeasonType::Regular;
pub const DEFAULT_STATS_SEASON: Season = Season(2019);

/// Sum `score_type` over `starters`. Players without a stat line, or without
/// that field, add nothing.
pub fn team_score(starters: &[PlayerId], score_type: &str, week_stats: &WeekStats) -> f64 {
    starters
        .iter()
        .filter_map(|player| week_stats.get(player))
        .filter_map(|stats| stats.get(score_type))
        .fold(0.0, |total, points| total + points)
}

/// Fetch one week of stats for the default stats season and score the starters.
pub async fn get_team_score<S>(
    stats: &S,
    starters: &[PlayerId],
    score_type: &str,
    week: Week,
) -> Result<f64>
where
    S: WeekStatsSource + ?Sized,
{
    get_team_score_for_season(
        stats,
        DEFAULT_STATS_SEASON_TYPE,
        DEFAULT_STATS_SEASON,
        starters,
        score_type,
        week,
    )
    .await
}

pub async fn get_team_score_for_season<S>(
    stats: &S,
    season_type: SeasonType,
    season: Season,
    starters: &[PlayerId],
    score_type: &str,
    week: Week,
) -> Result<f64>
where
    S: WeekStatsSource + ?Sized,
{
    let week_stats = stats.get_week_stats(season_type, season, week).await?;
    Ok(team_score(starters, score_type, &week_stats))
}
