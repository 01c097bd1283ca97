use std::fmt::Display;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// how a change of the auxiliary distance affects route fetching. the
/// distance is never sent to the router.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuxiliaryTrigger {
    /// the distance is stored and nothing else happens
    #[default]
    Ignore,
    /// setting a new distance re-sends the current request even though
    /// the request itself did not change
    Refetch,
}

impl AuxiliaryTrigger {
    pub fn forces_refetch(&self, distance: Option<f64>) -> bool {
        matches!(self, AuxiliaryTrigger::Refetch) && distance.is_some()
    }
}

impl Display for AuxiliaryTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuxiliaryTrigger::Ignore => write!(f, "ignore"),
            AuxiliaryTrigger::Refetch => write!(f, "refetch"),
        }
    }
}
