use qswarm_engine::{GridAction, GridWorld, SimSeed, encode_cell};
use qswarm_policy::QTable;
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::config::{ConfigError, GridConfig};

/// Action-value table sized for the four grid moves.
pub type GridTable = QTable<{ GridAction::LEN }>;

/// Summary of one [`GridTrainer::train`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrainReport {
    /// Decision cycles executed.
    pub steps: u64,
    /// Times the goal cell was reached.
    pub goal_visits: u64,
    /// Sum of all rewards observed.
    pub total_reward: f32,
}

/// Trains a single persistent grid agent by repeated episodes.
///
/// No population mechanics: the same table accumulates value across every
/// call. Reaching the goal resets the agent to the origin and the run
/// continues, so one `train` call spans many episodes.
#[derive(Debug, Clone)]
pub struct GridTrainer {
    world: GridWorld,
    table: GridTable,
    rng: Pcg32,
}

impl GridTrainer {
    /// Creates a trainer with a random seed.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, rand::rng().random())
    }

    /// Like [`Self::new`], but seeded for a reproducible run.
    pub fn with_seed(config: GridConfig, seed: SimSeed) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            world: GridWorld::new(config.rows, config.cols),
            table: GridTable::new(config.learning_rate, config.discount, config.epsilon),
            rng: Pcg32::from_seed(seed.bytes()),
        })
    }

    #[must_use]
    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    #[must_use]
    pub fn table(&self) -> &GridTable {
        &self.table
    }

    /// Runs `steps` decision cycles, resetting to the origin at each goal.
    pub fn train(&mut self, steps: u64) -> TrainReport {
        let mut report = TrainReport::default();
        for _ in 0..steps {
            let state = self.world.state_key();
            let action = GridAction::from_index(self.table.choose_action(state, &mut self.rng));
            self.world.apply(action);

            let reward = self.world.reward();
            let next_state = self.world.state_key();
            self.table.update(state, action.index(), reward, next_state);

            report.steps += 1;
            report.total_reward += reward;
            if self.world.at_goal() {
                report.goal_visits += 1;
                self.world.reset_position();
            }
        }
        report
    }

    /// Greedy action for a cell, for policy inspection; unvisited cells read
    /// as all-zero and yield the first action.
    #[must_use]
    pub fn greedy_action(&self, row: u16, col: u16) -> GridAction {
        GridAction::from_index(self.table.greedy_action(encode_cell(row, col)))
    }
}
