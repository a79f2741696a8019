//! Lookup tables from users and rosters.

use std::collections::BTreeMap;

use crate::{
    cli::types::{RosterId, UserId},
    error::{Result, SleeperError},
    sleeper::types::{Roster, User},
};

/// user id -> team name (or display name when no team name is set)
pub type TeamNameIndex = BTreeMap<UserId, String>;

/// roster id -> owning user id, `None` for orphaned rosters
pub type OwnerIndex = BTreeMap<RosterId, Option<UserId>>;

pub fn map_users_to_team_name(users: &[User]) -> TeamNameIndex {
    users
        .iter()
        .map(|user| (user.user_id.clone(), user.team_name().to_string()))
        .collect()
}

pub fn map_roster_id_to_owner_id(rosters: &[Roster]) -> OwnerIndex {
    rosters
        .iter()
        .map(|roster| (roster.roster_id, roster.owner_id.clone()))
        .collect()
}

pub(crate) fn lookup_team_name<'a>(index: &'a TeamNameIndex, owner_id: &UserId) -> Result<&'a str> {
    index
        .get(owner_id)
        .map(String::as_str)
        .ok_or_else(|| SleeperError::OwnerNotFound {
            owner_id: owner_id.clone(),
        })
}

pub(crate) fn lookup_owner(index: &OwnerIndex, roster_id: RosterId) -> Result<Option<&UserId>> {
    index
        .get(&roster_id)
        .map(Option::as_ref)
        .ok_or(SleeperError::RosterNotFound { roster_id })
}
