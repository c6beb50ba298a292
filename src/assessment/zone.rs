use serde::Serialize;

use crate::error::{Result, ZoneError};

/// Lag distance multiplier on average roof height (AS1170.2 Fig. 4.1).
pub const LAG_HEIGHT_FACTOR: f64 = 20.0;

/// Averaging distance multiplier on average roof height.
pub const AVERAGING_HEIGHT_FACTOR: f64 = 40.0;

/// Averaging distance never drops below this, whatever the height.
pub const AVERAGING_FLOOR_M: f64 = 500.0;

/// Distances derived from a structure's average roof height, in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneParameters {
    pub lag_distance: f64,
    pub averaging_distance: f64,
    pub total_radius: f64,
}

impl ZoneParameters {
    /// Popup text for the outer (total radius) circle.
    pub fn assessment_caption(&self) -> String {
        format!("Assessment Zone ({}m)", self.averaging_distance)
    }

    /// Popup text for the lag distance circle.
    pub fn lag_caption(&self) -> String {
        format!("Lag Distance Zone ({:.1}m)", self.lag_distance)
    }
}

/// Derive the lag distance, averaging distance and total assessment radius
/// for an average roof height in metres.
pub fn derive_zone(height: f64) -> Result<ZoneParameters> {
    if !height.is_finite() {
        return Err(ZoneError::invalid(format!(
            "height {} is not a finite number",
            height
        )));
    }
    if height < 0.0 {
        return Err(ZoneError::invalid(format!(
            "height {}m is negative",
            height
        )));
    }

    let lag_distance = LAG_HEIGHT_FACTOR * height;
    let averaging_distance = AVERAGING_FLOOR_M.max(AVERAGING_HEIGHT_FACTOR * height);

    Ok(ZoneParameters {
        lag_distance,
        averaging_distance,
        total_radius: lag_distance + averaging_distance,
    })
}
