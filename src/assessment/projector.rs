//! Great-circle destination points.
//!
//! The Earth is treated as a sphere of radius [`EARTH_RADIUS_M`]. Over the
//! few kilometres an influence zone spans, the difference from a full
//! ellipsoidal solution is well under a metre, so no geodetic correction is
//! applied. Longitude becomes unstable within a hair of either pole; sites
//! there are not supported.

use super::coordinate::Coordinate;
use crate::error::{Result, ZoneError};

/// WGS-84 equatorial radius, used as the radius of a spherical Earth.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Normalize a bearing in degrees to [0, 360).
pub fn normalize_bearing(bearing_deg: f64) -> f64 {
    let b = bearing_deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if b >= 360.0 {
        0.0
    } else {
        b
    }
}

/// Point reached by travelling `distance_m` metres from `origin` along the
/// great circle that starts at `bearing_deg` (clockwise from true north).
///
/// The bearing may be any finite value; it is reduced modulo 360.
pub fn project(origin: Coordinate, distance_m: f64, bearing_deg: f64) -> Result<Coordinate> {
    if !distance_m.is_finite() || distance_m < 0.0 {
        return Err(ZoneError::invalid(format!(
            "distance {}m must be a non-negative number",
            distance_m
        )));
    }
    if !bearing_deg.is_finite() {
        return Err(ZoneError::invalid(format!(
            "bearing {} is not a finite number",
            bearing_deg
        )));
    }
    if distance_m == 0.0 {
        return Ok(origin);
    }

    let lat = origin.lat().to_radians();
    let lon = origin.lon().to_radians();
    let bearing = normalize_bearing(bearing_deg).to_radians();
    let delta = distance_m / EARTH_RADIUS_M;

    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_delta, cos_delta) = delta.sin_cos();

    let new_lat = (sin_lat * cos_delta + cos_lat * sin_delta * bearing.cos())
        .clamp(-1.0, 1.0)
        .asin();
    let new_lon = lon
        + (bearing.sin() * sin_delta * cos_lat).atan2(cos_delta - sin_lat * new_lat.sin());

    Ok(Coordinate::wrapped(new_lat.to_degrees(), new_lon.to_degrees()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE_DEG: f64 = 1e-9;

    fn sydney() -> Coordinate {
        Coordinate::new(-33.8688, 151.2093).unwrap()
    }

    /// Great-circle angle between two points, in radians.
    fn central_angle(a: Coordinate, b: Coordinate) -> f64 {
        let (lat1, lat2) = (a.lat().to_radians(), b.lat().to_radians());
        let dlat = lat2 - lat1;
        let dlon = (b.lon() - a.lon()).to_radians();
        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * h.sqrt().asin()
    }

    #[test]
    fn test_zero_distance_is_origin() {
        for bearing in [0.0, 45.0, 181.0, -720.0] {
            let p = project(sydney(), 0.0, bearing).unwrap();
            assert!((p.lat() - sydney().lat()).abs() < TOLERANCE_DEG);
            assert!((p.lon() - sydney().lon()).abs() < TOLERANCE_DEG);
        }
    }

    #[test]
    fn test_due_north_keeps_longitude() {
        for distance in [1.0, 500.0, 1500.0, 25_000.0] {
            let p = project(sydney(), distance, 0.0).unwrap();
            assert!(p.lat() > sydney().lat());
            assert!((p.lon() - sydney().lon()).abs() < TOLERANCE_DEG);
        }
    }

    #[test]
    fn test_north_distance_matches_arc_length() {
        let p = project(sydney(), 1000.0, 0.0).unwrap();
        let expected = (1000.0 / EARTH_RADIUS_M).to_degrees();
        assert!((p.lat() - sydney().lat() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_east_on_equator() {
        let origin = Coordinate::new(0.0, 0.0).unwrap();
        let p = project(origin, 1000.0, 90.0).unwrap();
        assert!(p.lat().abs() < TOLERANCE_DEG);
        let expected = (1000.0 / EARTH_RADIUS_M).to_degrees();
        assert!((p.lon() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_bearing_is_normalized() {
        let a = project(sydney(), 800.0, 45.0).unwrap();
        let b = project(sydney(), 800.0, 405.0).unwrap();
        let c = project(sydney(), 800.0, -315.0).unwrap();
        assert!((a.lat() - b.lat()).abs() < TOLERANCE_DEG);
        assert!((a.lon() - b.lon()).abs() < TOLERANCE_DEG);
        assert!((a.lat() - c.lat()).abs() < TOLERANCE_DEG);
        assert!((a.lon() - c.lon()).abs() < TOLERANCE_DEG);
    }

    #[test]
    fn test_projected_distance_preserved() {
        for bearing in [0.0, 22.5, 90.0, 157.5, 270.0, 337.5] {
            let p = project(sydney(), 1500.0, bearing).unwrap();
            let travelled = central_angle(sydney(), p) * EARTH_RADIUS_M;
            assert!((travelled - 1500.0).abs() < 1e-6, "bearing {}", bearing);
        }
    }

    /// Going out along b and back along b+180 does not land on the origin:
    /// the forward path arrives at a bearing rotated by meridian convergence,
    /// so the return leg is a different great circle. The miss is about
    /// d^2 * |sin b| * |tan lat| / R, i.e. ~0.24 m for 1.5 km at Sydney.
    #[test]
    fn test_round_trip_close_to_origin() {
        let tan_lat = sydney().lat().to_radians().tan().abs();
        for distance in [100.0, 1500.0, 10_000.0] {
            for bearing in [0.0, 33.0, 90.0, 200.0, 315.0] {
                let out = project(sydney(), distance, bearing).unwrap();
                let back = project(out, distance, normalize_bearing(bearing + 180.0)).unwrap();
                let miss = central_angle(sydney(), back) * EARTH_RADIUS_M;
                let bound = 1.1 * distance * distance * tan_lat / EARTH_RADIUS_M + 1e-6;
                assert!(miss < bound, "d={} b={} miss={}m", distance, bearing, miss);
            }
        }
    }

    #[test]
    fn test_antimeridian_wraps() {
        let origin = Coordinate::new(0.0, 179.9999).unwrap();
        let p = project(origin, 1000.0, 90.0).unwrap();
        assert!(p.lon() < 0.0 && p.lon() >= -180.0);
    }

    #[test]
    fn test_rejects_negative_distance() {
        assert!(matches!(
            project(sydney(), -10.0, 0.0),
            Err(ZoneError::InvalidInput(_))
        ));
        assert!(project(sydney(), f64::NAN, 0.0).is_err());
        assert!(project(sydney(), 10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_normalize_bearing() {
        assert_eq!(normalize_bearing(0.0), 0.0);
        assert_eq!(normalize_bearing(360.0), 0.0);
        assert_eq!(normalize_bearing(-22.5), 337.5);
        assert_eq!(normalize_bearing(765.0), 45.0);
        assert!(normalize_bearing(-1e-20) < 360.0);
    }
}
