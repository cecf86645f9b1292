//! Configuration for the swarm simulation and the grid trainer.

use std::f32::consts::PI;

use qswarm_engine::Bounds;

/// Errors produced when validating a simulation or trainer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("population size must be at least 1")]
    ZeroPopulation,
    #[display("selection fraction must be within (0, 1]")]
    SelectionFractionOutOfRange,
    #[display("ticks per generation must be at least 1")]
    ZeroGenerationInterval,
    #[display("arena bounds must exceed twice the wall margin")]
    DegenerateBounds,
    #[display("mutation rate must be within [0, 1]")]
    MutationRateOutOfRange,
    #[display("exploration rate must be within [0, 1]")]
    EpsilonOutOfRange,
    #[display("grid must have at least one row and one column")]
    EmptyGrid,
}

/// Swarm simulation parameters.
///
/// Fixed at construction of a [`Simulation`](crate::Simulation); there is no
/// runtime mutation surface. Defaults reproduce the reference sandbox setup.
#[derive(Debug, Clone, PartialEq)]
pub struct SwarmConfig {
    /// Agents per generation.
    pub population_size: usize,
    /// Energy an agent spawns with, and is restored to on goal capture.
    pub initial_energy: f32,
    /// Energy spent per decision cycle.
    pub energy_decay: f32,
    /// Distance covered by one forward step.
    pub speed: f32,
    /// Heading change of one turn action, in radians.
    pub turn_angle: f32,
    /// World bounds.
    pub bounds: Bounds,
    /// Inset agents are clamped into, away from the walls.
    pub wall_margin: f32,
    /// Inset for freshly relocated goals.
    pub goal_margin: f32,
    /// Distance under which the goal counts as captured.
    pub capture_radius: f32,
    /// Fitness bonus for a capture.
    pub capture_bonus: f32,
    /// Divisor applied to the distance-to-goal when computing the per-step
    /// reward.
    pub distance_reward_scale: f32,
    /// Ticks between generation transitions.
    pub ticks_per_generation: u64,
    /// Fraction of the ranked cohort retained as breeding parents.
    pub selection_fraction: f32,
    /// Per-value probability of perturbing a bred table.
    pub mutation_rate: f32,
    /// Q-learning rate α.
    pub learning_rate: f32,
    /// Discount factor γ.
    pub discount: f32,
    /// Exploration rate ε.
    pub epsilon: f32,
    /// Bearing buckets of the polar state encoding.
    pub angle_buckets: u16,
    /// Distance buckets of the polar state encoding.
    pub distance_buckets: u16,
    /// Width of one distance bucket, in world units.
    pub distance_bucket_width: f32,
}

impl SwarmConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulation);
        }
        if !(self.selection_fraction > 0.0 && self.selection_fraction <= 1.0) {
            return Err(ConfigError::SelectionFractionOutOfRange);
        }
        if self.ticks_per_generation == 0 {
            return Err(ConfigError::ZeroGenerationInterval);
        }
        if self.bounds.width <= 2.0 * self.wall_margin || self.bounds.height <= 2.0 * self.wall_margin
        {
            return Err(ConfigError::DegenerateBounds);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange);
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(ConfigError::EpsilonOutOfRange);
        }
        Ok(())
    }
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            initial_energy: 200.0,
            energy_decay: 0.5,
            speed: 2.0,
            turn_angle: PI / 8.0,
            bounds: Bounds::new(800.0, 600.0),
            wall_margin: 10.0,
            goal_margin: 20.0,
            capture_radius: 20.0,
            capture_bonus: 1000.0,
            distance_reward_scale: 100.0,
            ticks_per_generation: 300,
            selection_fraction: 0.2,
            mutation_rate: 0.1,
            learning_rate: 0.1,
            discount: 0.9,
            epsilon: 0.2,
            angle_buckets: 8,
            distance_buckets: 3,
            distance_bucket_width: 50.0,
        }
    }
}

/// Grid trainer parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub rows: u16,
    pub cols: u16,
    /// Q-learning rate α.
    pub learning_rate: f32,
    /// Discount factor γ.
    pub discount: f32,
    /// Exploration rate ε.
    pub epsilon: f32,
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(ConfigError::EpsilonOutOfRange);
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            learning_rate: 0.1,
            discount: 0.9,
            epsilon: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SwarmConfig::default().validate(), Ok(()));
        assert_eq!(GridConfig::default().validate(), Ok(()));
    }

    #[test]
    fn invalid_swarm_configs_are_rejected() {
        let zero_population = SwarmConfig {
            population_size: 0,
            ..SwarmConfig::default()
        };
        assert_eq!(
            zero_population.validate(),
            Err(ConfigError::ZeroPopulation)
        );

        let bad_fraction = SwarmConfig {
            selection_fraction: 1.5,
            ..SwarmConfig::default()
        };
        assert_eq!(
            bad_fraction.validate(),
            Err(ConfigError::SelectionFractionOutOfRange)
        );

        let zero_interval = SwarmConfig {
            ticks_per_generation: 0,
            ..SwarmConfig::default()
        };
        assert_eq!(
            zero_interval.validate(),
            Err(ConfigError::ZeroGenerationInterval)
        );

        let tiny_bounds = SwarmConfig {
            bounds: Bounds::new(15.0, 600.0),
            ..SwarmConfig::default()
        };
        assert_eq!(tiny_bounds.validate(), Err(ConfigError::DegenerateBounds));

        let bad_mutation = SwarmConfig {
            mutation_rate: -0.1,
            ..SwarmConfig::default()
        };
        assert_eq!(
            bad_mutation.validate(),
            Err(ConfigError::MutationRateOutOfRange)
        );
    }

    #[test]
    fn invalid_grid_configs_are_rejected() {
        let empty = GridConfig {
            rows: 0,
            ..GridConfig::default()
        };
        assert_eq!(empty.validate(), Err(ConfigError::EmptyGrid));

        let bad_epsilon = GridConfig {
            epsilon: 2.0,
            ..GridConfig::default()
        };
        assert_eq!(bad_epsilon.validate(), Err(ConfigError::EpsilonOutOfRange));
    }
}
