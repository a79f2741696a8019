use crate::cli::types::{MatchupId, PlayerId, RosterId, UserId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;


/// Keep only the numeric entries of a stats object. Sleeper occasionally mixes
/// in non-numeric values, which count as absent stats; a `null` line is empty.
fn de_numeric_stats<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Value>> = Deserialize::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(k, v)| v.as_f64().map(|n| (k, n)))
        .collect())
}

/// Free-form user metadata; only the team name is of interest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

/// League member from `/league/{id}/users`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub user_id: UserId,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub metadata: Option<UserMetadata>,
}

impl User {
    /// Team name when set and non-empty, display name otherwise.
    pub fn team_name(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.team_name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(self.display_name.as_str())
    }
}

/// Season record carried on each roster
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RosterSettings {
    pub wins: u32,
    pub losses: u32,
    /// Kept as the JSON number Sleeper sent so it renders the way it arrived.
    pub fpts: Number,
}

/// Roster from `/league/{id}/rosters`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Roster {
    pub roster_id: RosterId,
    /// `None` for an orphaned roster nobody has claimed.
    #[serde(default)]
    pub owner_id: Option<UserId>,
    pub settings: RosterSettings,
    #[serde(default)]
    pub starters: Vec<PlayerId>,
}

/// One team's half of a game, from `/league/{id}/matchups/{week}`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MatchupEntry {
    /// `None` for a roster without a game that week (playoff weeks).
    #[serde(default)]
    pub matchup_id: Option<MatchupId>,
    pub roster_id: RosterId,
    #[serde(default)]
    pub points: Option<f64>,
}

/// Stat line for one player in one week, keyed by stat field (`pts_ppr`, `rec_yd`, ...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlayerWeekStats(#[serde(deserialize_with = "de_numeric_stats")] pub BTreeMap<String, f64>);

impl PlayerWeekStats {
    pub fn get(&self, field: &str) -> Option<f64> {
        self.0.get(field).copied()
    }
}

/// Payload of `/stats/nfl/{season_type}/{season}/{week}`
pub type WeekStats = BTreeMap<PlayerId, PlayerWeekStats>;

/// Standings line for display. Numbers are rendered text, not values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsRow {
    pub team_name: Option<String>,
    pub wins: String,
    pub losses: String,
    pub points: String,
}

/// One team's name and score inside a scoreboard group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreboardEntry {
    pub team_name: String,
    pub score: f64,
}

impl ScoreboardEntry {
    pub fn new(team_name: impl Into<String>, score: f64) -> Self {
        Self {
            team_name: team_name.into(),
            score,
        }
    }
}

/// Matchup id to the teams in that game, first-seen entry first.
pub type Scoreboards = BTreeMap<MatchupId, Vec<ScoreboardEntry>>;

/// Flat, JSON-friendly projection of one scoreboard group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupSummary {
    pub matchup_id: MatchupId,
    pub team_a_name: String,
    pub team_a_points: f64,
    pub team_b_name: Option<String>,
    pub team_b_points: Option<f64>,
}
