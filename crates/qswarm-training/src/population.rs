use std::mem;

use qswarm_engine::{Arena, PolarEncoder};
use qswarm_stats::descriptive::DescriptiveStats;
use rand::{Rng, seq::IndexedRandom};

use crate::{agent::Agent, config::SwarmConfig, genetic};

/// The current cohort plus the agents it retired mid-generation.
///
/// Agents whose energy runs out are moved to the retired list the same tick,
/// not discarded: their fitness still ranks them at the next generation
/// transition, and their brains remain available for breeding.
#[derive(Debug, Clone, Default)]
pub struct Population {
    live: Vec<Agent>,
    retired: Vec<Agent>,
}

impl Population {
    /// Fresh cohort of agents with empty brains.
    pub fn seed<R>(config: &SwarmConfig, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self {
            live: (0..config.population_size)
                .map(|_| Agent::spawn_fresh(config, rng))
                .collect(),
            retired: Vec::new(),
        }
    }

    #[must_use]
    pub fn live(&self) -> &[Agent] {
        &self.live
    }

    #[must_use]
    pub fn retired(&self) -> &[Agent] {
        &self.retired
    }

    /// Steps every live agent in sequence, then retires the exhausted ones.
    pub fn tick<R>(
        &mut self,
        arena: &mut Arena,
        encoder: &PolarEncoder,
        config: &SwarmConfig,
        rng: &mut R,
    ) where
        R: Rng + ?Sized,
    {
        for agent in &mut self.live {
            agent.step(arena, encoder, config, rng);
        }
        let (exhausted, live): (Vec<_>, Vec<_>) = mem::take(&mut self.live)
            .into_iter()
            .partition(Agent::is_exhausted);
        self.live = live;
        self.retired.extend(exhausted);
    }

    /// Fitness distribution over every ranked agent, live and retired.
    #[must_use]
    pub fn fitness_stats(&self) -> Option<DescriptiveStats> {
        DescriptiveStats::new(self.live.iter().chain(&self.retired).map(Agent::fitness))
    }

    /// Replaces the cohort with a bred next generation.
    ///
    /// Live and retired agents are ranked together by fitness; the top
    /// [`SwarmConfig::selection_fraction`] become breeding parents. Each
    /// child brain comes from two parents drawn uniformly with replacement,
    /// crossed over and mutated. If no agent is left to rank, the cohort is
    /// reseeded from scratch instead.
    pub fn next_generation<R>(&mut self, config: &SwarmConfig, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        if self.live.is_empty() && self.retired.is_empty() {
            *self = Self::seed(config, rng);
            return;
        }

        let mut ranked: Vec<&Agent> = self.live.iter().chain(&self.retired).collect();
        ranked.sort_by(|a, b| b.fitness().partial_cmp(&a.fitness()).unwrap());
        let parents = &ranked[..parent_share(ranked.len(), config.selection_fraction)];

        let next = (0..config.population_size)
            .map(|_| {
                let first = *parents.choose(rng).expect("parent pool is non-empty");
                let second = *parents.choose(rng).expect("parent pool is non-empty");
                let mut brain = genetic::crossover(first.brain(), second.brain());
                genetic::mutate(&mut brain, config.mutation_rate, rng);
                Agent::spawn(brain, config, rng)
            })
            .collect();

        self.live = next;
        self.retired.clear();
    }
}

/// Number of ranked agents retained as parents: the floor of the fraction,
/// but never zero while any agent is ranked.
#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parent_share(ranked: usize, fraction: f32) -> usize {
    ((ranked as f32 * fraction) as usize).clamp(1, ranked)
}
