//! Weekly player statistics capability.

use async_trait::async_trait;

use crate::{
    cli::types::{Season, SeasonType, Week},
    error::Result,
    sleeper::{
        http::{decode, SleeperClient},
        types::WeekStats,
    },
};

/// Source of per-player stat lines for one week.
///
/// [`SleeperClient`] is the production implementation; tests plug in fixtures.
#[async_trait]
pub trait WeekStatsSource: Send + Sync {
    async fn get_week_stats(
        &self,
        season_type: SeasonType,
        season: Season,
        week: Week,
    ) -> Result<WeekStats>;
}

#[async_trait]
impl WeekStatsSource for SleeperClient {
    async fn get_week_stats(
        &self,
        season_type: SeasonType,
        season: Season,
        week: Week,
    ) -> Result<WeekStats> {
        decode(self.get_week_stats_raw(season_type, season, week).await?)
    }
}
