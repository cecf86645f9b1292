use std::f32::consts::TAU;

use qswarm_engine::{Arena, PolarEncoder, SteerAction, Vec2};
use qswarm_policy::QTable;
use rand::Rng;

use crate::config::SwarmConfig;

/// Action-value table sized for the steering action set.
pub type SteerTable = QTable<{ SteerAction::LEN }>;

/// One navigating agent: a pose, an energy budget, and an owned brain.
///
/// The agent earns a dense negative reward proportional to its distance from
/// the goal, so fitness grows fastest for agents that close in quickly.
/// Capturing the goal pays a large bonus, refills the energy budget, and
/// relocates the goal, which starts a fresh sub-episode within the same
/// lifetime.
#[derive(Debug, Clone)]
pub struct Agent {
    position: Vec2,
    heading: f32,
    energy: f32,
    fitness: f32,
    brain: SteerTable,
}

impl Agent {
    /// Spawns at a uniform random pose with the given brain.
    pub fn spawn<R>(brain: SteerTable, config: &SwarmConfig, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self {
            position: config.bounds.random_point(0.0, rng),
            heading: rng.random_range(0.0..TAU),
            energy: config.initial_energy,
            fitness: 0.0,
            brain,
        }
    }

    /// Spawns with a fresh all-zero brain.
    pub fn spawn_fresh<R>(config: &SwarmConfig, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let brain = SteerTable::new(config.learning_rate, config.discount, config.epsilon);
        Self::spawn(brain, config, rng)
    }

    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[must_use]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    #[must_use]
    pub fn energy(&self) -> f32 {
        self.energy
    }

    #[must_use]
    pub fn fitness(&self) -> f32 {
        self.fitness
    }

    #[must_use]
    pub fn brain(&self) -> &SteerTable {
        &self.brain
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.energy <= 0.0
    }

    /// One decision cycle: sense, act, learn, pay the energy cost.
    ///
    /// No-op once the energy budget is exhausted.
    pub fn step<R>(
        &mut self,
        arena: &mut Arena,
        encoder: &PolarEncoder,
        config: &SwarmConfig,
        rng: &mut R,
    ) where
        R: Rng + ?Sized,
    {
        if self.is_exhausted() {
            return;
        }

        let state = encoder.encode(self.position, self.heading, arena.goal());
        let action = SteerAction::from_index(self.brain.choose_action(state, rng));
        self.perform(action, arena, config);

        let reward = -arena.distance_to_goal(self.position) / config.distance_reward_scale;
        let next_state = encoder.encode(self.position, self.heading, arena.goal());
        self.brain.update(state, action.index(), reward, next_state);

        self.energy -= config.energy_decay;
        self.fitness += reward;

        if arena.is_captured(self.position) {
            self.fitness += config.capture_bonus;
            self.energy = config.initial_energy;
            arena.relocate_goal(rng);
        }
    }

    fn perform(&mut self, action: SteerAction, arena: &Arena, config: &SwarmConfig) {
        match action {
            SteerAction::Forward => {
                self.position.x += self.heading.cos() * config.speed;
                self.position.y += self.heading.sin() * config.speed;
            }
            SteerAction::TurnLeft => self.heading -= config.turn_angle,
            SteerAction::TurnRight => self.heading += config.turn_angle,
        }
        self.position = arena.clamp(self.position);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn config() -> SwarmConfig {
        SwarmConfig::default()
    }

    fn rng() -> Pcg32 {
        Pcg32::from_seed([11; 16])
    }

    fn agent_at(position: Vec2, heading: f32, config: &SwarmConfig) -> Agent {
        Agent {
            position,
            heading,
            energy: config.initial_energy,
            fitness: 0.0,
            brain: SteerTable::new(config.learning_rate, config.discount, config.epsilon),
        }
    }

    #[test]
    fn spawn_is_inside_bounds_with_full_energy() {
        let config = config();
        let mut rng = rng();
        for _ in 0..20 {
            let agent = Agent::spawn_fresh(&config, &mut rng);
            assert!(config.bounds.contains(agent.position()));
            assert_eq!(agent.energy(), config.initial_energy);
            assert_eq!(agent.fitness(), 0.0);
            assert!(agent.brain().is_empty());
        }
    }

    #[test]
    fn position_stays_clamped_after_any_step() {
        let config = config();
        let mut arena = Arena::new(config.bounds, config.wall_margin, config.goal_margin, 20.0);
        let encoder = PolarEncoder::default();
        let mut rng = rng();
        // pointed straight at a wall, one step away from it
        let mut agent = agent_at(Vec2::new(11.0, 300.0), std::f32::consts::PI, &config);
        for _ in 0..100 {
            agent.step(&mut arena, &encoder, &config, &mut rng);
            let position = agent.position();
            assert!((10.0..=790.0).contains(&position.x));
            assert!((10.0..=590.0).contains(&position.y));
        }
    }

    #[test]
    fn step_costs_energy_and_accumulates_reward() {
        let config = config();
        let mut arena = Arena::new(config.bounds, config.wall_margin, config.goal_margin, 20.0);
        let encoder = PolarEncoder::default();
        let mut rng = rng();
        let mut agent = agent_at(Vec2::new(100.0, 100.0), 0.0, &config);

        agent.step(&mut arena, &encoder, &config, &mut rng);
        assert_eq!(agent.energy(), config.initial_energy - config.energy_decay);
        let expected = -arena.distance_to_goal(agent.position()) / config.distance_reward_scale;
        assert!((agent.fitness() - expected).abs() < 1e-5);
        assert!(!agent.brain().is_empty());
    }

    #[test]
    fn exhausted_agents_do_not_move_or_learn() {
        let config = config();
        let mut arena = Arena::new(config.bounds, config.wall_margin, config.goal_margin, 20.0);
        let encoder = PolarEncoder::default();
        let mut rng = rng();
        let mut agent = agent_at(Vec2::new(100.0, 100.0), 0.0, &config);
        agent.energy = 0.0;

        let before = agent.position();
        agent.step(&mut arena, &encoder, &config, &mut rng);
        assert_eq!(agent.position(), before);
        assert_eq!(agent.fitness(), 0.0);
        assert!(agent.brain().is_empty());
        assert!(agent.is_exhausted());
    }

    #[test]
    fn capture_pays_the_bonus_refills_energy_and_moves_the_goal() {
        let config = config();
        let mut arena = Arena::new(config.bounds, config.wall_margin, config.goal_margin, 20.0);
        let encoder = PolarEncoder::default();
        let mut rng = rng();
        let goal = arena.goal();
        // 19 units out with the capture radius at 20: any action leaves the
        // agent captured (one forward step covers 2 units)
        let mut agent = agent_at(Vec2::new(goal.x - 19.0, goal.y), 0.0, &config);
        agent.energy = 50.0;

        agent.step(&mut arena, &encoder, &config, &mut rng);
        assert!(agent.fitness() > 900.0);
        assert_eq!(agent.energy(), config.initial_energy);
        assert_ne!(arena.goal(), goal);
        let relocated = arena.goal();
        assert!((config.goal_margin..=config.bounds.width - config.goal_margin)
            .contains(&relocated.x));
        assert!((config.goal_margin..=config.bounds.height - config.goal_margin)
            .contains(&relocated.y));
    }

    #[test]
    fn reward_near_the_goal_is_near_zero() {
        let config = config();
        let mut arena = Arena::new(config.bounds, config.wall_margin, config.goal_margin, 0.0);
        let encoder = PolarEncoder::default();
        let mut rng = rng();
        // capture radius 0 keeps the bonus out of the fitness sum
        let mut agent = agent_at(arena.goal(), 0.0, &config);

        agent.step(&mut arena, &encoder, &config, &mut rng);
        // one action moves at most `speed` units away, so the dense reward
        // is at worst -speed / scale
        assert!(agent.fitness() <= 0.0);
        assert!(agent.fitness() >= -config.speed / config.distance_reward_scale);
    }
}
