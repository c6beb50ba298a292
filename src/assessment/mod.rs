//! Influence zone geometry.
//!
//! Leaves first: [`zone`] turns a roof height into distances, [`projector`]
//! places points on the sphere, [`rings`] and [`sectors`] lay out the grid,
//! and [`scene`] bundles everything for a renderer.

mod coordinate;
mod projector;
mod rings;
mod scene;
mod sectors;
mod zone;

pub use coordinate::Coordinate;
pub use projector::{normalize_bearing, project, EARTH_RADIUS_M};
pub use rings::{plan_rings, RingSet, RING_COLLISION_TOLERANCE, RING_INTERVAL};
pub use scene::{build_scene, build_scene_with, AssessmentScene, CENTER_CAPTION};
pub use sectors::{
    build_sectors, CompassDirection, DirectionLabel, SectorDivider, SectorLayout,
    DEFAULT_LABEL_DISTANCE_FACTOR, DIVIDER_BEARINGS, LABEL_BEARINGS, SECTOR_HALF_WIDTH_DEG,
};
pub use zone::{derive_zone, ZoneParameters, AVERAGING_FLOOR_M};
