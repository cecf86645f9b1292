use qswarm_engine::{Arena, PolarEncoder, SimSeed, Vec2};
use qswarm_stats::descriptive::DescriptiveStats;
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::{
    agent::Agent,
    config::{ConfigError, SwarmConfig},
    population::Population,
};

/// Whether [`Simulation::tick`] advances the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum RunState {
    Running,
    Paused,
}

/// The tick-driven swarm simulation.
///
/// Owns every piece of mutable state — arena, population, RNG, counters —
/// so a host can run several simulations side by side. An external driver
/// (renderer, timer, test loop) calls [`Self::tick`] repeatedly; each call
/// processes all agents to completion, so pausing between ticks never leaves
/// an agent mid-update.
///
/// Generation turnover is checked once per tick: when the configured
/// interval has elapsed, the cohort is bred before the tick's agent pass.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SwarmConfig,
    arena: Arena,
    encoder: PolarEncoder,
    population: Population,
    rng: Pcg32,
    run_state: RunState,
    ticks: u64,
    ticks_in_generation: u64,
    generation: u64,
}

impl Simulation {
    /// Creates a paused simulation with a random seed.
    pub fn new(config: SwarmConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, rand::rng().random())
    }

    /// Like [`Self::new`], but seeded for a reproducible run.
    pub fn with_seed(config: SwarmConfig, seed: SimSeed) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = Pcg32::from_seed(seed.bytes());
        let arena = Arena::new(
            config.bounds,
            config.wall_margin,
            config.goal_margin,
            config.capture_radius,
        );
        let encoder = PolarEncoder::new(
            config.angle_buckets,
            config.distance_bucket_width,
            config.distance_buckets,
        );
        let population = Population::seed(&config, &mut rng);
        Ok(Self {
            config,
            arena,
            encoder,
            population,
            rng,
            run_state: RunState::Paused,
            ticks: 0,
            ticks_in_generation: 0,
            generation: 0,
        })
    }

    pub fn start(&mut self) {
        self.run_state = RunState::Running;
    }

    pub fn stop(&mut self) {
        self.run_state = RunState::Paused;
    }

    #[must_use]
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    #[must_use]
    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    /// Generation counter; increments only at generation transitions.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Total ticks processed since construction or the last reset.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The live agents, for rendering: position, heading, energy, fitness.
    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        self.population.live()
    }

    #[must_use]
    pub fn goal(&self) -> Vec2 {
        self.arena.goal()
    }

    /// Fitness distribution of the current cohort, retired agents included.
    #[must_use]
    pub fn fitness_stats(&self) -> Option<DescriptiveStats> {
        self.population.fitness_stats()
    }

    /// Advances the simulation by one logical step. No-op while paused.
    pub fn tick(&mut self) {
        if self.run_state.is_paused() {
            return;
        }
        if self.ticks_in_generation >= self.config.ticks_per_generation {
            self.population.next_generation(&self.config, &mut self.rng);
            self.generation += 1;
            self.ticks_in_generation = 0;
        }
        self.population
            .tick(&mut self.arena, &self.encoder, &self.config, &mut self.rng);
        self.ticks += 1;
        self.ticks_in_generation += 1;
    }

    /// Returns to the initial state: goal at the center, counters cleared,
    /// a fresh paused cohort with empty brains. The RNG stream continues,
    /// so a reset is not a replay.
    pub fn reset(&mut self) {
        self.arena = Arena::new(
            self.config.bounds,
            self.config.wall_margin,
            self.config.goal_margin,
            self.config.capture_radius,
        );
        self.population = Population::seed(&self.config, &mut self.rng);
        self.run_state = RunState::Paused;
        self.ticks = 0;
        self.ticks_in_generation = 0;
        self.generation = 0;
    }
}
