use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FetchStatus {
    /// nothing has been dispatched yet
    #[default]
    Idle,
    Fetching,
    Succeeded,
    Failed,
}

impl Display for FetchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchStatus::Idle => write!(f, "idle"),
            FetchStatus::Fetching => write!(f, "fetching"),
            FetchStatus::Succeeded => write!(f, "succeeded"),
            FetchStatus::Failed => write!(f, "failed"),
        }
    }
}
