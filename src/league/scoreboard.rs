//! Weekly scoreboards: matchup entries paired into head-to-head games.

use crate::{
    error::Result,
    league::identity::{
        lookup_owner, lookup_team_name, map_roster_id_to_owner_id, map_users_to_team_name,
    },
    sleeper::types::{MatchupEntry, MatchupSummary, Roster, ScoreboardEntry, Scoreboards, User},
};

/// Shown in place of a team name when the roster has no owner.
pub const TEAM_NAME_NOT_AVAILABLE: &str = "Team name not available";

/// Group a week's matchup entries by matchup id, resolving team names.
///
/// Returns `Ok(None)` when there are no matchups at all. Within a group, teams
/// keep the order their entries appeared in `matchups`; a missing score is 0.
/// Entries without a matchup id are not part of any game and are left out.
pub fn get_scoreboards(
    rosters: &[Roster],
    matchups: &[MatchupEntry],
    users: &[User],
) -> Result<Option<Scoreboards>> {
    if matchups.is_empty() {
        return Ok(None);
    }

    let owners = map_roster_id_to_owner_id(rosters);
    let team_names = map_users_to_team_name(users);

    let mut scoreboards = Scoreboards::new();
    for entry in matchups {
        let Some(matchup_id) = entry.matchup_id else {
            continue;
        };

        let team_name = match lookup_owner(&owners, entry.roster_id)? {
            Some(owner) => lookup_team_name(&team_names, owner)?.to_string(),
            None => TEAM_NAME_NOT_AVAILABLE.to_string(),
        };

        scoreboards
            .entry(matchup_id)
            .or_default()
            .push(ScoreboardEntry::new(team_name, entry.points.unwrap_or(0.0)));
    }

    Ok(Some(scoreboards))
}

/// Flat per-game view of [`get_scoreboards`], ordered by matchup id.
///
/// Unlike `get_scoreboards`, a week without matchups yields an empty list.
pub fn get_scoreboards_json(
    rosters: &[Roster],
    matchups: &[MatchupEntry],
    users: &[User],
) -> Result<Vec<MatchupSummary>> {
    match get_scoreboards(rosters, matchups, users)? {
        Some(scoreboards) => Ok(summarize_scoreboards(&scoreboards)),
        None => Ok(Vec::new()),
    }
}

/// Project grouped scoreboards into team A / team B rows. Byes have no team B.
pub fn summarize_scoreboards(scoreboards: &Scoreboards) -> Vec<MatchupSummary> {
    scoreboards
        .iter()
        .filter_map(|(matchup_id, teams)| {
            let (team_a, rest) = teams.split_first()?;
            let team_b = rest.first();
            Some(MatchupSummary {
                matchup_id: *matchup_id,
                team_a_name: team_a.team_name.clone(),
                team_a_points: team_a.score,
                team_b_name: team_b.map(|t| t.team_name.clone()),
                team_b_points: team_b.map(|t| t.score),
            })
        })
        .collect()
}
