use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ZoneError};

/// A point on the Earth's surface in decimal degrees.
///
/// Latitude is kept within [-90, 90] and longitude within [-180, 180].
/// Fields are private so a constructed value always satisfies that range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(ZoneError::invalid(format!(
                "coordinate ({}, {}) is not a finite number",
                lat, lon
            )));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ZoneError::invalid(format!(
                "latitude {} is outside [-90, 90]",
                lat
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(ZoneError::invalid(format!(
                "longitude {} is outside [-180, 180]",
                lon
            )));
        }
        Ok(Self { lat, lon })
    }

    /// Build from values the projector already guarantees to be in range,
    /// wrapping a longitude that crossed the antimeridian.
    pub(crate) fn wrapped(lat: f64, lon: f64) -> Self {
        let lon = if (-180.0..=180.0).contains(&lon) {
            lon
        } else {
            (lon + 180.0).rem_euclid(360.0) - 180.0
        };
        Self {
            lat: lat.clamp(-90.0, 90.0),
            lon,
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*},{:.*}", p, self.lat, p, self.lon),
            None => write!(f, "{},{}", self.lat, self.lon),
        }
    }
}

/// Parses the "lat,lon" form copied out of web map apps, e.g.
/// `-33.8688, 151.2093`.
impl FromStr for Coordinate {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split(',').collect();
        if parts.len() != 2 {
            return Err(ZoneError::invalid(format!(
                "expected 'Lat, Lon' but got '{}'",
                s
            )));
        }
        let lat = parse_degrees(parts[0], "latitude")?;
        let lon = parse_degrees(parts[1], "longitude")?;
        Coordinate::new(lat, lon)
    }
}

fn parse_degrees(s: &str, what: &str) -> Result<f64> {
    let s = s.trim();
    s.parse::<f64>()
        .map_err(|_| ZoneError::invalid(format!("{} '{}' is not a valid number", what, s)))
}
