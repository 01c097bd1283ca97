use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// a single candidate itinerary returned by the router. only feasibility and
/// selection are interpreted here, everything else is carried through as
/// the server sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RoutePathRecord")]
pub struct RoutePath {
    #[serde(rename = "isPossible")]
    pub is_possible: bool,
    #[serde(rename = "isSelected")]
    pub is_selected: bool,
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl RoutePath {
    pub fn new(is_possible: bool) -> RoutePath {
        RoutePath {
            is_possible,
            is_selected: false,
            properties: Map::new(),
        }
    }
}

/// wire format of a path. the router reports feasibility either directly as
/// `isPossible` or inverted as `impossible`; the former wins when both exist.
/// selection is client state, so any `isSelected` sent by a server is dropped.
#[derive(Deserialize)]
struct RoutePathRecord {
    #[serde(rename = "isPossible", default)]
    is_possible: Option<bool>,
    #[serde(default)]
    impossible: Option<bool>,
    #[serde(rename = "isSelected", default)]
    _is_selected: Option<bool>,
    #[serde(flatten)]
    properties: Map<String, Value>,
}

impl From<RoutePathRecord> for RoutePath {
    fn from(value: RoutePathRecord) -> Self {
        let is_possible = value
            .is_possible
            .or(value.impossible.map(|impossible| !impossible))
            .unwrap_or(true);
        RoutePath {
            is_possible,
            is_selected: false,
            properties: value.properties,
        }
    }
}
