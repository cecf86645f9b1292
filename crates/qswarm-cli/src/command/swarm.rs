use std::path::PathBuf;

use chrono::Utc;
use qswarm_engine::SimSeed;
use qswarm_training::{Simulation, SwarmConfig};
use rand::Rng as _;

use crate::record::{GenerationRecord, RunRecord};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SwarmArg {
    /// Number of generations to evolve
    #[arg(long, default_value_t = 20)]
    generations: u64,
    /// Agents per generation
    #[arg(long, default_value_t = 50)]
    population: usize,
    /// Ticks between generation transitions
    #[arg(long, default_value_t = 300)]
    ticks_per_generation: u64,
    /// 32-hex-character seed for a reproducible run
    #[arg(long)]
    seed: Option<SimSeed>,
    /// Write a JSON record of the run
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SwarmArg) -> anyhow::Result<()> {
    let config = SwarmConfig {
        population_size: arg.population,
        ticks_per_generation: arg.ticks_per_generation,
        ..SwarmConfig::default()
    };
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let mut simulation = Simulation::with_seed(config, seed)?;
    simulation.start();

    let mut generations = Vec::new();
    for generation in 0..arg.generations {
        for _ in 0..arg.ticks_per_generation {
            simulation.tick();
        }
        let stats = simulation.fitness_stats();
        let live_agents = simulation.agents().len();
        match &stats {
            Some(stats) => eprintln!(
                "Generation #{generation}: {live_agents} live, fitness mean {:.2}, max {:.2}",
                stats.mean, stats.max
            ),
            None => eprintln!("Generation #{generation}: no agents ranked"),
        }
        generations.push(GenerationRecord {
            generation,
            live_agents,
            fitness: stats.map(Into::into),
        });
    }

    if let Some(path) = &arg.output {
        let record = RunRecord {
            recorded_at: Utc::now(),
            seed,
            population_size: arg.population,
            ticks_per_generation: arg.ticks_per_generation,
            generations,
        };
        record.save(path)?;
        eprintln!("Run record written to {}", path.display());
    }

    Ok(())
}
