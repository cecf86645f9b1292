use crate::{
    action::GridAction,
    observe::{StateKey, encode_cell},
};

/// A rows × cols board with one agent and a fixed goal in the far corner.
///
/// The agent starts at the origin cell (0, 0); the goal sits at
/// (rows − 1, cols − 1). Moves into a wall are suppressed, so the agent can
/// never leave the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridWorld {
    rows: u16,
    cols: u16,
    row: u16,
    col: u16,
}

impl GridWorld {
    /// Reward for standing on the goal cell.
    pub const GOAL_REWARD: f32 = 100.0;
    /// Reward for standing anywhere else.
    pub const STEP_PENALTY: f32 = -1.0;

    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        assert!(rows > 0 && cols > 0);
        Self {
            rows,
            cols,
            row: 0,
            col: 0,
        }
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Current agent cell as `(row, col)`.
    #[must_use]
    pub fn position(&self) -> (u16, u16) {
        (self.row, self.col)
    }

    /// Goal cell as `(row, col)`.
    #[must_use]
    pub fn goal(&self) -> (u16, u16) {
        (self.rows - 1, self.cols - 1)
    }

    /// Moves the agent one cell; moves into a wall leave it in place.
    pub fn apply(&mut self, action: GridAction) {
        match action {
            GridAction::Up => self.row = self.row.saturating_sub(1),
            GridAction::Down => self.row = (self.row + 1).min(self.rows - 1),
            GridAction::Left => self.col = self.col.saturating_sub(1),
            GridAction::Right => self.col = (self.col + 1).min(self.cols - 1),
        }
    }

    #[must_use]
    pub fn at_goal(&self) -> bool {
        (self.row, self.col) == self.goal()
    }

    /// Sparse reward: [`Self::GOAL_REWARD`] exactly on the goal cell,
    /// [`Self::STEP_PENALTY`] everywhere else.
    #[must_use]
    pub fn reward(&self) -> f32 {
        if self.at_goal() {
            Self::GOAL_REWARD
        } else {
            Self::STEP_PENALTY
        }
    }

    /// Puts the agent back on the origin cell.
    pub fn reset_position(&mut self) {
        self.row = 0;
        self.col = 0;
    }

    /// Identity state encoding: the cell is the state.
    #[must_use]
    pub fn state_key(&self) -> StateKey {
        encode_cell(self.row, self.col)
    }
}
