use qswarm_engine::{GridAction, SimSeed};
use qswarm_training::{GridConfig, GridTrainer};
use rand::Rng as _;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GridArg {
    /// Grid rows and columns
    #[arg(long, default_value_t = 10)]
    size: u16,
    /// Training steps to run
    #[arg(long, default_value_t = 10_000)]
    steps: u64,
    /// 32-hex-character seed for a reproducible run
    #[arg(long)]
    seed: Option<SimSeed>,
}

pub(crate) fn run(arg: &GridArg) -> anyhow::Result<()> {
    let config = GridConfig {
        rows: arg.size,
        cols: arg.size,
        ..GridConfig::default()
    };
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let mut trainer = GridTrainer::with_seed(config, seed)?;

    let report = trainer.train(arg.steps);
    println!(
        "Trained {} steps: {} goal visits, total reward {:.1}, {} states visited",
        report.steps,
        report.goal_visits,
        report.total_reward,
        trainer.table().len()
    );

    println!("Greedy policy:");
    for row in 0..arg.size {
        let line: String = (0..arg.size)
            .map(|col| {
                if (row, col) == trainer.world().goal() {
                    'G'
                } else {
                    arrow(trainer.greedy_action(row, col))
                }
            })
            .collect();
        println!("{line}");
    }

    Ok(())
}

fn arrow(action: GridAction) -> char {
    match action {
        GridAction::Up => '^',
        GridAction::Down => 'v',
        GridAction::Left => '<',
        GridAction::Right => '>',
    }
}
