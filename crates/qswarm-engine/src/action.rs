/// Actions available to a swarm agent steering through continuous space.
///
/// The set is fixed: advance along the current heading, or rotate in place.
/// Action-value tables index their vectors by [`Self::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SteerAction {
    Forward,
    TurnLeft,
    TurnRight,
}

impl SteerAction {
    pub const LEN: usize = 3;

    pub const ALL: [Self; Self::LEN] = [Self::Forward, Self::TurnLeft, Self::TurnRight];

    /// # Panics
    ///
    /// Panics if `index >= Self::LEN`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Actions available to a grid-world agent: one cell in a cardinal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridAction {
    Up,
    Down,
    Left,
    Right,
}

impl GridAction {
    pub const LEN: usize = 4;

    pub const ALL: [Self; Self::LEN] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// # Panics
    ///
    /// Panics if `index >= Self::LEN`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}
