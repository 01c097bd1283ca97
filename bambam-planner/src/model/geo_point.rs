use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::codec::CodecError;

/// a WGS84 coordinate. the routing server expects latitude first, so
/// [`Display`] and [`FromStr`] both use `lat,lon` ordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Result<GeoPoint, CodecError> {
        let lat = check_range(lat, -90.0, 90.0).map_err(CodecError::InvalidLatitude)?;
        let lon = check_range(lon, -180.0, 180.0).map_err(CodecError::InvalidLongitude)?;
        Ok(GeoPoint { lat, lon })
    }
}

impl From<GeoPoint> for geo::Coord<f64> {
    fn from(value: GeoPoint) -> Self {
        geo::coord! { x: value.lon, y: value.lat }
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

impl FromStr for GeoPoint {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        match parts.as_slice() {
            [lat, lon] => {
                let lat = parse_num(lat).map_err(CodecError::InvalidLatitude)?;
                let lon = parse_num(lon).map_err(CodecError::InvalidLongitude)?;
                GeoPoint::new(lat, lon)
            }
            _ => Err(CodecError::InvalidPoint(s.to_string())),
        }
    }
}

fn parse_num(s: &str) -> Result<f64, String> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| format!("not a number: {s}"))
}

fn check_range(v: f64, min: f64, max: f64) -> Result<f64, String> {
    if !v.is_finite() || v < min || max < v {
        Err(format!(
            "number '{v}' is not valid, must be in range [{min},{max}]"
        ))
    } else {
        Ok(v)
    }
}
