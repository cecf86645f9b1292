//! State discretization: collapsing raw observations into a finite key space.
//!
//! Two strategies are supported:
//!
//! - [`PolarEncoder`] quantizes a continuous observation (agent pose plus goal
//!   position) into a bearing bucket and a distance bucket.
//! - [`encode_cell`] is the identity encoding for grid worlds: the cell is the
//!   state.
//!
//! Encoders are pure functions of their inputs. The set of reachable keys is
//! finite and bounded by the bucket counts, which is what keeps the tabular
//! value store small.

use std::f32::consts::TAU;

use crate::geometry::Vec2;

/// A discrete state identifier: a hashable pair of small integers.
///
/// Opaque to the value store; only the encoder that produced a key knows what
/// its components mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey(u16, u16);

impl StateKey {
    #[must_use]
    pub const fn new(a: u16, b: u16) -> Self {
        Self(a, b)
    }
}

/// Identity encoding for grid worlds.
#[must_use]
pub const fn encode_cell(row: u16, col: u16) -> StateKey {
    StateKey::new(row, col)
}

/// Quantizes a swarm agent's view of the goal into `(bearing, distance)`
/// buckets.
///
/// The bearing is taken relative to the agent's heading, so the key describes
/// "where the goal is from the agent's point of view" rather than an absolute
/// direction. Distance buckets are uniform up to the last one, which is
/// open-ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarEncoder {
    angle_buckets: u16,
    distance_bucket_width: f32,
    distance_buckets: u16,
}

impl PolarEncoder {
    /// # Panics
    ///
    /// Panics if a bucket count is zero or the bucket width is not positive.
    #[must_use]
    pub fn new(angle_buckets: u16, distance_bucket_width: f32, distance_buckets: u16) -> Self {
        assert!(angle_buckets > 0 && distance_buckets > 0);
        assert!(distance_bucket_width > 0.0);
        Self {
            angle_buckets,
            distance_bucket_width,
            distance_buckets,
        }
    }

    /// Number of distinct keys this encoder can produce.
    #[must_use]
    pub fn state_space(&self) -> usize {
        usize::from(self.angle_buckets) * usize::from(self.distance_buckets)
    }

    /// Encodes an agent pose against the goal position.
    ///
    /// The relative bearing is wrapped into [0, 2π) with `rem_euclid`, so a
    /// slightly negative angle lands in the top bucket instead of producing a
    /// bogus index. The final `min` guards against the wrap rounding up to 2π
    /// exactly.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn encode(&self, position: Vec2, heading: f32, goal: Vec2) -> StateKey {
        let relative = (position.bearing(goal) - heading).rem_euclid(TAU);
        let bucket_width = TAU / f32::from(self.angle_buckets);
        let angle_bucket = ((relative / bucket_width) as u16).min(self.angle_buckets - 1);

        let distance = position.distance(goal);
        let distance_bucket =
            ((distance / self.distance_bucket_width) as u16).min(self.distance_buckets - 1);

        StateKey::new(angle_bucket, distance_bucket)
    }
}

impl Default for PolarEncoder {
    /// 8 bearing buckets of π/4, 3 distance buckets 50 world units wide.
    fn default() -> Self {
        Self::new(8, 50.0, 3)
    }
}
