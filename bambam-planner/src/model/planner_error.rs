use thiserror::Error;

use crate::{client::ClientError, codec::CodecError};

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("cannot select route {index}, only {count} routes available")]
    SelectionOutOfRange { index: usize, count: usize },
    #[error("cannot select route {0}, it is not a possible route")]
    InfeasibleSelection(usize),
    #[error("invalid planner configuration: {0}")]
    Configuration(String),
    #[error("planner is inert: {0}")]
    Inert(String),
    #[error("route request failed: {0}")]
    RouteRequestFailed(String),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("failure running planner session: {0}")]
    Runtime(String),
}
