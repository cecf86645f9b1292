//! Training drivers for the Q-learning sandbox.
//!
//! Two training regimes share one tabular learning core
//! (`qswarm-policy`):
//!
//! - **Swarm** — a [`Simulation`] runs a cohort of continuous-space
//!   [`Agent`]s, each learning online while it lives; a genetic algorithm
//!   breeds the next cohort from the fittest brains at a fixed tick
//!   interval.
//! - **Grid** — a [`GridTrainer`] trains a single persistent agent on a
//!   grid world by repeated episodes, with no population mechanics.
//!
//! # Evolution cycle
//!
//! ```text
//! Population (live agents)
//!     ↓ tick: sense → act → learn, retire the exhausted
//! Fitness ranking (live + retired)
//!     ↓ selection: top fraction become parents
//! Crossover + mutation (genetic operators)
//!     ↓ produces
//! Next cohort (fresh spawns, bred brains)
//! ```
//!
//! Both drivers take a [`SimSeed`](qswarm_engine::SimSeed): every random
//! draw flows through one owned, seedable generator, so runs are exactly
//! reproducible.
//!
//! # Example
//!
//! ```
//! use qswarm_training::{Simulation, SwarmConfig};
//!
//! let mut simulation = Simulation::new(SwarmConfig::default()).unwrap();
//! simulation.start();
//! for _ in 0..100 {
//!     simulation.tick();
//! }
//! assert_eq!(simulation.agents().len(), 50);
//! ```

pub use self::{
    agent::{Agent, SteerTable},
    config::{ConfigError, GridConfig, SwarmConfig},
    grid_trainer::{GridTable, GridTrainer, TrainReport},
    population::Population,
    simulation::{RunState, Simulation},
};

pub mod agent;
pub mod config;
pub mod genetic;
pub mod grid_trainer;
pub mod population;
pub mod simulation;
