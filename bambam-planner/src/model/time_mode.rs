use std::fmt::Display;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// selects how the query timestamp is interpreted by the server.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimeMode {
    /// the timestamp is the earliest departure time
    #[default]
    Departure,
    /// the timestamp is the latest arrival time
    Arrival,
}

impl TimeMode {
    pub fn is_arrive_by(&self) -> bool {
        matches!(self, TimeMode::Arrival)
    }

    pub fn from_arrive_by(arrive_by: bool) -> TimeMode {
        if arrive_by {
            TimeMode::Arrival
        } else {
            TimeMode::Departure
        }
    }
}

impl Display for TimeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeMode::Departure => write!(f, "departure"),
            TimeMode::Arrival => write!(f, "arrival"),
        }
    }
}
