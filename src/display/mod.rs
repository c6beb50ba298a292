pub mod terminal;

use windzone::{Coordinate, EARTH_RADIUS_M};

/// Terminal cells are roughly twice as tall as they are wide.
pub const CELL_ASPECT_RATIO: f64 = 2.0;

/// Offset of `point` from `center` in metres east (x) and north (y).
///
/// Equirectangular about the centre latitude. Good to well under a cell at
/// the few-kilometre scale of a zone, which is all the preview needs.
pub fn to_local(center: Coordinate, point: Coordinate) -> (f64, f64) {
    let dlon = (point.lon() - center.lon() + 540.0).rem_euclid(360.0) - 180.0;
    let dlat = point.lat() - center.lat();
    let x = dlon.to_radians() * EARTH_RADIUS_M * center.lat().to_radians().cos();
    let y = dlat.to_radians() * EARTH_RADIUS_M;
    (x, y)
}

/// Canvas bounds that show at least `half_extent` metres either side of the
/// centre while keeping circles round on a `cols` x `rows` cell area.
pub fn fit_bounds(cols: u16, rows: u16, half_extent: f64) -> ([f64; 2], [f64; 2]) {
    let cols = cols.max(1) as f64;
    let rows = rows.max(1) as f64 * CELL_ASPECT_RATIO;
    let (half_x, half_y) = if cols >= rows {
        (half_extent * cols / rows, half_extent)
    } else {
        (half_extent, half_extent * rows / cols)
    };
    ([-half_x, half_x], [-half_y, half_y])
}
