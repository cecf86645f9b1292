use rand::Rng;

use crate::geometry::{Bounds, Vec2};

/// The shared environment for swarm agents: world bounds and the single goal.
///
/// Every agent reads the goal each tick. Capturing it relocates it, and the
/// new position is what every later step sees; the tick loop is sequential,
/// so no further coordination is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct Arena {
    bounds: Bounds,
    wall_margin: f32,
    goal_margin: f32,
    capture_radius: f32,
    goal: Vec2,
}

impl Arena {
    /// Creates an arena with the goal at the center of the bounds.
    #[must_use]
    pub fn new(bounds: Bounds, wall_margin: f32, goal_margin: f32, capture_radius: f32) -> Self {
        Self {
            bounds,
            wall_margin,
            goal_margin,
            capture_radius,
            goal: bounds.center(),
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn goal(&self) -> Vec2 {
        self.goal
    }

    #[must_use]
    pub fn capture_radius(&self) -> f32 {
        self.capture_radius
    }

    #[must_use]
    pub fn distance_to_goal(&self, position: Vec2) -> f32 {
        position.distance(self.goal)
    }

    /// True when `position` is strictly within the capture radius of the goal.
    #[must_use]
    pub fn is_captured(&self, position: Vec2) -> bool {
        self.distance_to_goal(position) < self.capture_radius
    }

    /// Clamps an agent position against the walls.
    #[must_use]
    pub fn clamp(&self, position: Vec2) -> Vec2 {
        self.bounds.clamp_with_margin(position, self.wall_margin)
    }

    /// Moves the goal to a fresh uniform random position, inset by the goal
    /// margin so it never spawns flush against a wall.
    pub fn relocate_goal<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.goal = self.bounds.random_point(self.goal_margin, rng);
    }
}
