use serde::Serialize;
use tracing::debug;

use super::coordinate::Coordinate;
use super::rings::{plan_rings, RingSet};
use super::sectors::{
    build_sectors, DirectionLabel, SectorDivider, SectorLayout, DEFAULT_LABEL_DISTANCE_FACTOR,
};
use super::zone::{derive_zone, ZoneParameters};
use crate::error::{Result, ZoneError};

/// Popup text for the marker at the site itself.
pub const CENTER_CAPTION: &str = "Circle Center";

/// Everything a renderer needs to draw one influence zone.
///
/// Built in one go by [`build_scene`]; there are no setters, so a scene
/// handed to a renderer is exactly what was computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentScene {
    center: Coordinate,
    height: f64,
    zone: ZoneParameters,
    label_distance: f64,
    rings: RingSet,
    #[serde(flatten)]
    sectors: SectorLayout,
}

impl AssessmentScene {
    /// Build a scene from raw user text: `"lat,lon"` and a roof height in
    /// metres.
    pub fn from_input(center: &str, height: &str, label_distance_factor: f64) -> Result<Self> {
        let center: Coordinate = center.parse()?;
        let height = height.trim();
        let height: f64 = height.parse().map_err(|_| {
            ZoneError::invalid(format!("height '{}' is not a valid number", height))
        })?;
        build_scene_with(center, height, label_distance_factor)
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn center_caption(&self) -> &'static str {
        CENTER_CAPTION
    }

    /// Average roof height the zone was derived from, in metres.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn zone(&self) -> &ZoneParameters {
        &self.zone
    }

    pub fn rings(&self) -> &RingSet {
        &self.rings
    }

    pub fn dividers(&self) -> &[SectorDivider; 8] {
        &self.sectors.dividers
    }

    pub fn labels(&self) -> &[DirectionLabel; 8] {
        &self.sectors.labels
    }

    pub fn sectors(&self) -> &SectorLayout {
        &self.sectors
    }

    /// Distance from the centre to the direction labels, in metres.
    pub fn label_distance(&self) -> f64 {
        self.label_distance
    }
}

/// Build the full scene for a site with the default label placement.
pub fn build_scene(center: Coordinate, height: f64) -> Result<AssessmentScene> {
    build_scene_with(center, height, DEFAULT_LABEL_DISTANCE_FACTOR)
}

/// Build the full scene for a site, placing direction labels at
/// `label_distance_factor` times the total radius.
pub fn build_scene_with(
    center: Coordinate,
    height: f64,
    label_distance_factor: f64,
) -> Result<AssessmentScene> {
    let zone = derive_zone(height)?;
    let rings = plan_rings(zone.lag_distance, zone.total_radius);
    let sectors = build_sectors(center, zone.total_radius, label_distance_factor)?;

    debug!(
        "Zone at {}: lag {:.1}m, averaging {:.1}m, total {:.1}m, {} rings",
        center,
        zone.lag_distance,
        zone.averaging_distance,
        zone.total_radius,
        rings.len()
    );

    Ok(AssessmentScene {
        center,
        height,
        zone,
        label_distance: zone.total_radius * label_distance_factor,
        rings,
        sectors,
    })
}
