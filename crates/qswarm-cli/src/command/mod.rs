use clap::{Parser, Subcommand};

use self::{grid::GridArg, swarm::SwarmArg};

mod grid;
mod swarm;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Evolve a swarm of navigating agents across generations
    Swarm(#[clap(flatten)] SwarmArg),
    /// Train a single grid-world agent by repeated episodes
    Grid(#[clap(flatten)] GridArg),
}

pub fn run() -> anyhow::Result<()> {
    match CommandArgs::parse().mode {
        Mode::Swarm(arg) => swarm::run(&arg),
        Mode::Grid(arg) => grid::run(&arg),
    }
}
