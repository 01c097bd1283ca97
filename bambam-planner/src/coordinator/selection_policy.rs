use std::fmt::Display;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// rules applied when the user explicitly picks a route.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// any path in range may be selected, including impossible ones
    #[default]
    Permissive,
    /// only paths marked as possible may be selected
    FeasibleOnly,
}

impl Display for SelectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionPolicy::Permissive => write!(f, "permissive"),
            SelectionPolicy::FeasibleOnly => write!(f, "feasible_only"),
        }
    }
}
