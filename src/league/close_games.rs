//! Close-game detection over a week's scoreboards.

use crate::{
    error::{Result, SleeperError},
    sleeper::types::Scoreboards,
};

/// Keep the games whose first two teams are separated by less than `threshold` points.
///
/// A group with fewer than two teams (a bye) cannot be compared and fails the
/// whole call with [`SleeperError::IncompleteMatchup`].
pub fn get_close_games(scoreboards: &Scoreboards, threshold: f64) -> Result<Scoreboards> {
    let mut close_games = Scoreboards::new();

    for (matchup_id, teams) in scoreboards {
        let [first, second, ..] = teams.as_slice() else {
            return Err(SleeperError::IncompleteMatchup {
                matchup_id: *matchup_id,
            });
        };

        if (first.score - second.score).abs() < threshold {
            close_games.insert(*matchup_id, teams.clone());
        }
    }

    Ok(close_games)
}
