//! Enums used by the player endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sport segment of the player endpoints. Sleeper only publishes NFL data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    #[default]
    Nfl,
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sport::Nfl => write!(f, "nfl"),
        }
    }
}

/// Direction of a trending-players query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TrendType {
    Add,
    Drop,
}

impl fmt::Display for TrendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendType::Add => write!(f, "add"),
            TrendType::Drop => write!(f, "drop"),
        }
    }
}
