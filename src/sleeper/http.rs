use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    cli::types::{LeagueId, Season, SeasonType, Sport, TrendType, Week},
    error::{Result, SleeperError},
    sleeper::types::{MatchupEntry, Roster, User},
};

#[cfg(test)]
mod tests;

/// Base path for the Sleeper v1 read API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Host serving the player research (ownership) data.
pub const SLEEPER_RESEARCH_URL: &str = "https://api.sleeper.com";

const USER_AGENT: &str = "sleeper-ffl/0.1";

/// Read-only client for the public Sleeper API.
///
/// Every call is a single GET: no auth, retry, caching or pagination.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    http: Client,
    base_url: String,
    research_url: String,
}

impl SleeperClient {
    pub fn new() -> Result<Self> {
        Self::with_base_urls(SLEEPER_BASE_URL, SLEEPER_RESEARCH_URL)
    }

    /// Point the client at other hosts (mock servers in tests).
    pub fn with_base_urls(base_url: &str, research_url: &str) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            research_url: research_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `url` and decode the body as JSON.
    pub async fn fetch(&self, url: &str) -> Result<Value> {
        debug!(%url, "GET");

        let res = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(res)
    }

    fn league_url(&self, league_id: LeagueId, path: &str) -> String {
        if path.is_empty() {
            format!("{}/league/{}", self.base_url, league_id)
        } else {
            format!("{}/league/{}/{}", self.base_url, league_id, path)
        }
    }

    pub async fn get_league(&self, league_id: LeagueId) -> Result<Value> {
        self.fetch(&self.league_url(league_id, "")).await
    }

    pub async fn get_rosters(&self, league_id: LeagueId) -> Result<Value> {
        self.fetch(&self.league_url(league_id, "rosters")).await
    }

    pub async fn get_users(&self, league_id: LeagueId) -> Result<Value> {
        self.fetch(&self.league_url(league_id, "users")).await
    }

    pub async fn get_matchups(&self, league_id: LeagueId, week: Week) -> Result<Value> {
        self.fetch(&self.league_url(league_id, &format!("matchups/{}", week)))
            .await
    }

    pub async fn get_playoff_winners_bracket(&self, league_id: LeagueId) -> Result<Value> {
        self.fetch(&self.league_url(league_id, "winners_bracket"))
            .await
    }

    pub async fn get_playoff_losers_bracket(&self, league_id: LeagueId) -> Result<Value> {
        self.fetch(&self.league_url(league_id, "losers_bracket"))
            .await
    }

    pub async fn get_transactions(&self, league_id: LeagueId, week: Week) -> Result<Value> {
        self.fetch(&self.league_url(league_id, &format!("transactions/{}", week)))
            .await
    }

    pub async fn get_traded_picks(&self, league_id: LeagueId) -> Result<Value> {
        self.fetch(&self.league_url(league_id, "traded_picks")).await
    }

    pub async fn get_all_drafts(&self, league_id: LeagueId) -> Result<Value> {
        self.fetch(&self.league_url(league_id, "drafts")).await
    }

    /// Rosters decoded into [`Roster`] records.
    pub async fn rosters(&self, league_id: LeagueId) -> Result<Vec<Roster>> {
        decode(self.get_rosters(league_id).await?)
    }

    /// Users decoded into [`User`] records.
    pub async fn users(&self, league_id: LeagueId) -> Result<Vec<User>> {
        decode(self.get_users(league_id).await?)
    }

    /// Matchup entries for a week decoded into [`MatchupEntry`] records.
    pub async fn matchups(&self, league_id: LeagueId, week: Week) -> Result<Vec<MatchupEntry>> {
        decode(self.get_matchups(league_id, week).await?)
    }

    /// Every NFL player Sleeper knows about. The payload is several megabytes.
    pub async fn get_all_players(&self) -> Result<Value> {
        self.fetch(&format!("{}/players/nfl", self.base_url)).await
    }

    pub async fn get_trending_players(
        &self,
        sport: Sport,
        trend: TrendType,
        lookback_hours: u32,
        limit: u32,
    ) -> Result<Value> {
        let url = format!(
            "{}/players/{}/trending/{}?lookback_hours={}&limit={}",
            self.base_url, sport, trend, lookback_hours, limit
        );
        self.fetch(&url).await
    }

    /// Ownership and rostering percentages, for a whole season or one week of it.
    pub async fn get_players_ownership(
        &self,
        season_type: SeasonType,
        season: Season,
        week: Option<Week>,
    ) -> Result<Value> {
        let mut url = format!(
            "{}/players/nfl/research/{}/{}",
            self.research_url, season_type, season
        );
        if let Some(week) = week {
            url.push_str(&format!("/{}", week));
        }
        self.fetch(&url).await
    }

    pub async fn get_week_stats_raw(
        &self,
        season_type: SeasonType,
        season: Season,
        week: Week,
    ) -> Result<Value> {
        let url = format!(
            "{}/stats/nfl/{}/{}/{}",
            self.base_url, season_type, season, week
        );
        self.fetch(&url).await
    }
}

/// Decode a payload, treating a bare `null` (unknown league, empty week) as no data.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    if value.is_null() {
        warn!("Sleeper API answered with null");
        return Err(SleeperError::NoData);
    }
    Ok(serde_json::from_value(value)?)
}
