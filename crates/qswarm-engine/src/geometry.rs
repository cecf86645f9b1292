use rand::Rng;

/// A 2D position in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.hypot(dy)
    }

    /// Absolute bearing from `self` toward `other`, in radians.
    ///
    /// The result is in atan2's native (-π, π] range; callers that need a
    /// [0, 2π) angle must wrap it themselves.
    #[must_use]
    pub fn bearing(self, other: Self) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

/// Axis-aligned world bounds with the origin in one corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamps `position` into the bounds inset by `margin` on every side.
    #[must_use]
    pub fn clamp_with_margin(self, position: Vec2, margin: f32) -> Vec2 {
        Vec2::new(
            position.x.clamp(margin, self.width - margin),
            position.y.clamp(margin, self.height - margin),
        )
    }

    /// Uniform random point inset by `margin` on every side.
    pub fn random_point<R>(self, margin: f32, rng: &mut R) -> Vec2
    where
        R: Rng + ?Sized,
    {
        Vec2::new(
            rng.random_range(margin..=self.width - margin),
            rng.random_range(margin..=self.height - margin),
        )
    }

    #[must_use]
    pub fn contains(self, position: Vec2) -> bool {
        (0.0..=self.width).contains(&position.x) && (0.0..=self.height).contains(&position.y)
    }
}
