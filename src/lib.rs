//! # windzone
//!
//! Geometry of the AS1170.2 terrain-category influence zone around a site:
//! lag and averaging distances derived from roof height, eight compass
//! sectors and 100 m grid rings, projected onto a spherical Earth.

pub mod assessment;
pub mod error;

pub use assessment::{
    build_scene, build_scene_with, build_sectors, derive_zone, plan_rings, project,
    AssessmentScene, CompassDirection, Coordinate, DirectionLabel, RingSet, SectorDivider,
    SectorLayout, ZoneParameters, DEFAULT_LABEL_DISTANCE_FACTOR, EARTH_RADIUS_M,
    RING_COLLISION_TOLERANCE, RING_INTERVAL,
};
pub use error::{Result, ZoneError};
