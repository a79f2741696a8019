//! League standings ranked by record and points.

use std::cmp::Ordering;

use crate::{
    error::Result,
    league::identity::{lookup_team_name, map_users_to_team_name},
    sleeper::types::{Roster, StandingsRow, User},
};

/// Rank rosters by `(wins, losses, points, team name)`, all descending.
///
/// Orphaned rosters get no team name. An owner missing from `users` is an
/// error. Numbers come back as display text in the format the API sent them.
pub fn get_standings(rosters: &[Roster], users: &[User]) -> Result<Vec<StandingsRow>> {
    let team_names = map_users_to_team_name(users);

    let mut ranked = rosters
        .iter()
        .map(|roster| -> Result<_> {
            let team_name = roster
                .owner_id
                .as_ref()
                .map(|owner| lookup_team_name(&team_names, owner))
                .transpose()?;
            Ok((roster, team_name))
        })
        .collect::<Result<Vec<_>>>()?;

    ranked.sort_by(|(a, a_name), (b, b_name)| {
        b.settings
            .wins
            .cmp(&a.settings.wins)
            .then(b.settings.losses.cmp(&a.settings.losses))
            .then_with(|| compare_points(b, a))
            .then_with(|| b_name.cmp(a_name))
    });

    Ok(ranked
        .into_iter()
        .map(|(roster, team_name)| StandingsRow {
            team_name: team_name.map(str::to_string),
            wins: roster.settings.wins.to_string(),
            losses: roster.settings.losses.to_string(),
            points: roster.settings.fpts.to_string(),
        })
        .collect())
}

fn compare_points(a: &Roster, b: &Roster) -> Ordering {
    let a = a.settings.fpts.as_f64().unwrap_or(0.0);
    let b = b.settings.fpts.as_f64().unwrap_or(0.0);
    a.total_cmp(&b)
}
