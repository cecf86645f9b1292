use std::{fs::File, io::BufWriter, path::Path};

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use qswarm_engine::SimSeed;
use qswarm_stats::descriptive::DescriptiveStats;
use serde::Serialize;

/// Fitness distribution of one completed generation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FitnessSummary {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
    pub median: f32,
    pub std_dev: f32,
}

impl From<DescriptiveStats> for FitnessSummary {
    fn from(stats: DescriptiveStats) -> Self {
        Self {
            min: stats.min,
            max: stats.max,
            mean: stats.mean,
            median: stats.median,
            std_dev: stats.std_dev,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationRecord {
    pub generation: u64,
    pub live_agents: usize,
    pub fitness: Option<FitnessSummary>,
}

/// A completed headless swarm run, for offline inspection.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    pub recorded_at: DateTime<Utc>,
    pub seed: SimSeed,
    pub population_size: usize,
    pub ticks_per_generation: u64,
    pub generations: Vec<GenerationRecord>,
}

impl RunRecord {
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}
