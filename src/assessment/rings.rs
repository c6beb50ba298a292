use serde::Serialize;

/// Spacing between grid rings, in metres.
pub const RING_INTERVAL: f64 = 100.0;

/// A ring this close to the outer boundary (or closer) is dropped, since it
/// would draw on top of the total radius circle.
pub const RING_COLLISION_TOLERANCE: f64 = 10.0;

/// Grid ring radii in metres, strictly increasing, all strictly between the
/// lag distance and the total radius.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RingSet(Vec<f64>);

impl RingSet {
    pub fn radii(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Popup text a map layer shows for a ring.
    pub fn caption(radius: f64) -> String {
        format!("100m Grid Ring ({:.0}m from center)", radius)
    }
}

impl<'a> IntoIterator for &'a RingSet {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Rings every [`RING_INTERVAL`] metres from `lag_distance` outward, stopping
/// short of `total_radius` and skipping any within
/// [`RING_COLLISION_TOLERANCE`] of it.
///
/// Planning stops early once `f64` can no longer tell one ring from the
/// previous (lag distances around 1e18 m and up), so radii stay strictly
/// increasing and strictly greater than the lag distance.
pub fn plan_rings(lag_distance: f64, total_radius: f64) -> RingSet {
    let mut radii = Vec::new();
    let mut step = 1.0;
    let mut prev = lag_distance;
    // Multiply rather than accumulate so fractional lag distances don't drift
    let mut r = lag_distance + RING_INTERVAL;
    while r < total_radius && r > prev {
        if r < total_radius - RING_COLLISION_TOLERANCE {
            radii.push(r);
        }
        prev = r;
        step += 1.0;
        r = lag_distance + RING_INTERVAL * step;
    }
    RingSet(radii)
}
