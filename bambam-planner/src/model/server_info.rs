use geo::{coord, Coord, Intersects, Rect};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::GeoPoint;

/// capability descriptor returned by `GET /info`. the planner stays inert
/// until one of these has been received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// coverage of the routing graph as `[min_lon, min_lat, max_lon, max_lat]`
    #[serde(default)]
    pub bbox: Vec<f64>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub build_date: Option<String>,
    #[serde(default)]
    pub profiles: Vec<Value>,
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl ServerInfo {
    pub fn coverage(&self) -> Option<Rect<f64>> {
        match self.bbox.as_slice() {
            [min_lon, min_lat, max_lon, max_lat] => Some(Rect::new(
                coord! { x: *min_lon, y: *min_lat },
                coord! { x: *max_lon, y: *max_lat },
            )),
            _ => None,
        }
    }

    /// true if the point lies within the coverage of the server. a server
    /// that reports no usable bbox is assumed to cover everything.
    pub fn covers(&self, point: &GeoPoint) -> bool {
        match self.coverage() {
            Some(rect) => rect.intersects(&Coord::from(*point)),
            None => true,
        }
    }
}
