use serde::Serialize;
use std::fmt;

use super::coordinate::Coordinate;
use super::projector::{normalize_bearing, project};
use crate::error::{Result, ZoneError};

/// Direction labels sit this far out, as a multiple of the total radius.
pub const DEFAULT_LABEL_DISTANCE_FACTOR: f64 = 1.2;

/// Half of a 45 degree sector. Dividers sit this far anticlockwise of the
/// direction they bound so each sector is centred on its compass point.
pub const SECTOR_HALF_WIDTH_DEG: f64 = 22.5;

/// Sector boundary bearings, index-paired with [`LABEL_BEARINGS`].
pub const DIVIDER_BEARINGS: [f64; 8] = [337.5, 22.5, 67.5, 112.5, 157.5, 202.5, 247.5, 292.5];

/// Sector centre bearings, one per [`CompassDirection::ALL`] entry.
pub const LABEL_BEARINGS: [f64; 8] = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum CompassDirection {
    #[default]
    #[serde(rename = "N")]
    North,
    #[serde(rename = "NE")]
    NorthEast,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "SE")]
    SouthEast,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "SW")]
    SouthWest,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "NW")]
    NorthWest,
}

impl CompassDirection {
    pub const ALL: [CompassDirection; 8] = [
        CompassDirection::North,
        CompassDirection::NorthEast,
        CompassDirection::East,
        CompassDirection::SouthEast,
        CompassDirection::South,
        CompassDirection::SouthWest,
        CompassDirection::West,
        CompassDirection::NorthWest,
    ];

    pub fn abbreviation(&self) -> &'static str {
        match self {
            CompassDirection::North => "N",
            CompassDirection::NorthEast => "NE",
            CompassDirection::East => "E",
            CompassDirection::SouthEast => "SE",
            CompassDirection::South => "S",
            CompassDirection::SouthWest => "SW",
            CompassDirection::West => "W",
            CompassDirection::NorthWest => "NW",
        }
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Boundary line from the centre out to the total radius circle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SectorDivider {
    pub bearing: f64,
    pub endpoint: Coordinate,
}

impl SectorDivider {
    pub fn caption(&self) -> String {
        format!("Wind Direction Sector Boundary: {} degrees", self.bearing)
    }
}

/// Compass label marking the middle of a sector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DirectionLabel {
    pub direction: CompassDirection,
    pub bearing: f64,
    pub position: Coordinate,
}

impl DirectionLabel {
    pub fn caption(&self) -> String {
        format!("Wind Direction: {}", self.direction)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorLayout {
    pub dividers: [SectorDivider; 8],
    pub labels: [DirectionLabel; 8],
}

impl SectorLayout {
    /// Each sector as its anticlockwise boundary and its label.
    pub fn sectors(&self) -> impl Iterator<Item = (&SectorDivider, &DirectionLabel)> {
        self.dividers.iter().zip(self.labels.iter())
    }
}

/// True when every divider sits exactly half a sector anticlockwise of its
/// paired label.
const fn pairing_holds() -> bool {
    let mut i = 0;
    while i < DIVIDER_BEARINGS.len() {
        let mut expected = LABEL_BEARINGS[i] - SECTOR_HALF_WIDTH_DEG;
        if expected < 0.0 {
            expected += 360.0;
        }
        if expected != DIVIDER_BEARINGS[i] {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(pairing_holds(), "divider and label bearings drifted apart");

/// Project the eight sector dividers onto the `total_radius` circle around
/// `center`, and the eight direction labels onto a circle
/// `label_distance_factor` times larger.
pub fn build_sectors(
    center: Coordinate,
    total_radius: f64,
    label_distance_factor: f64,
) -> Result<SectorLayout> {
    if !label_distance_factor.is_finite() || label_distance_factor < 0.0 {
        return Err(ZoneError::invalid(format!(
            "label distance factor {} must be a non-negative number",
            label_distance_factor
        )));
    }
    let label_distance = total_radius * label_distance_factor;

    let mut dividers = [SectorDivider::default(); 8];
    let mut labels = [DirectionLabel::default(); 8];
    for i in 0..8 {
        dividers[i] = SectorDivider {
            bearing: DIVIDER_BEARINGS[i],
            endpoint: project(center, total_radius, DIVIDER_BEARINGS[i])?,
        };
        labels[i] = DirectionLabel {
            direction: CompassDirection::ALL[i],
            bearing: LABEL_BEARINGS[i],
            position: project(center, label_distance, LABEL_BEARINGS[i])?,
        };
    }

    Ok(SectorLayout { dividers, labels })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::EARTH_RADIUS_M;

    fn center() -> Coordinate {
        Coordinate::new(-33.8688, 151.2093).unwrap()
    }

    #[test]
    fn test_pairing_invariant() {
        assert!(pairing_holds());
        for (d, l) in DIVIDER_BEARINGS.iter().zip(LABEL_BEARINGS.iter()) {
            assert_eq!(normalize_bearing(l - d), SECTOR_HALF_WIDTH_DEG);
        }
    }

    #[test]
    fn test_bearings_distinct() {
        for bearings in [DIVIDER_BEARINGS, LABEL_BEARINGS] {
            for i in 0..8 {
                for j in (i + 1)..8 {
                    assert_ne!(bearings[i], bearings[j]);
                }
            }
        }
    }

    #[test]
    fn test_direction_order() {
        let layout = build_sectors(center(), 1500.0, DEFAULT_LABEL_DISTANCE_FACTOR).unwrap();
        let names: Vec<&str> = layout.labels.iter().map(|l| l.direction.abbreviation()).collect();
        assert_eq!(names, ["N", "NE", "E", "SE", "S", "SW", "W", "NW"]);
        for (i, (divider, label)) in layout.sectors().enumerate() {
            assert_eq!(divider.bearing, DIVIDER_BEARINGS[i]);
            assert_eq!(label.bearing, LABEL_BEARINGS[i]);
        }
    }

    #[test]
    fn test_points_at_expected_distance() {
        let layout = build_sectors(center(), 1500.0, 1.2).unwrap();
        let c = center();
        let dist = |p: Coordinate| {
            let (lat1, lat2) = (c.lat().to_radians(), p.lat().to_radians());
            let dlon = (p.lon() - c.lon()).to_radians();
            let h = ((lat2 - lat1) / 2.0).sin().powi(2)
                + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
            2.0 * h.sqrt().asin() * EARTH_RADIUS_M
        };
        for divider in &layout.dividers {
            assert!((dist(divider.endpoint) - 1500.0).abs() < 1e-6);
        }
        for label in &layout.labels {
            assert!((dist(label.position) - 1800.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_north_label_due_north() {
        let layout = build_sectors(center(), 700.0, 1.2).unwrap();
        let north = layout.labels[0];
        assert!(north.position.lat() > center().lat());
        assert!((north.position.lon() - center().lon()).abs() < 1e-9);
        let south = layout.labels[4];
        assert!(south.position.lat() < center().lat());
    }

    #[test]
    fn test_negative_radius_propagates() {
        assert!(matches!(
            build_sectors(center(), -1.0, 1.2),
            Err(ZoneError::InvalidInput(_))
        ));
        assert!(build_sectors(center(), 700.0, -0.5).is_err());
        assert!(build_sectors(center(), 700.0, f64::NAN).is_err());
    }

    #[test]
    fn test_captions() {
        let layout = build_sectors(center(), 700.0, 1.2).unwrap();
        assert_eq!(
            layout.dividers[0].caption(),
            "Wind Direction Sector Boundary: 337.5 degrees"
        );
        assert_eq!(layout.labels[3].caption(), "Wind Direction: SE");
    }
}
