use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use maze_runners::algorithms::pathfinding::Algorithm;

#[derive(Parser, Debug)]
#[command(name = "maze-runners")]
#[command(about = "Grid maze explorer with interchangeable search strategies")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Maze file to load (start line, goal line, then rows with `+` walls)
    #[arg(short, long, value_name = "FILE")]
    pub map: Option<PathBuf>,

    /// Width of a generated maze
    #[arg(long, default_value_t = 20)]
    pub width: usize,

    /// Height of a generated maze
    #[arg(long, default_value_t = 10)]
    pub height: usize,

    /// Chance for each generated tile to be a wall
    #[arg(long, default_value_t = 0.25)]
    pub wall_ratio: f64,

    /// Seed for the maze generator (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Search the whole reachable area instead of stopping at the goal
    #[arg(long)]
    pub no_goal: bool,

    /// Delay between visited cells in milliseconds (0 = no delay)
    #[arg(short, long, default_value_t = 0)]
    pub delay: u64,

    /// Stop after this many visits (or lockstep ticks)
    #[arg(long)]
    pub max_steps: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Step one runner through the maze and report its path
    Solve {
        /// Search strategy to use
        #[arg(value_enum)]
        algorithm: Algorithm,
    },

    /// Advance several runners side by side, one visit per tick
    Race {
        /// Strategies to race (all of them when omitted)
        #[arg(value_enum)]
        algorithms: Vec<Algorithm>,
    },

    /// Run every strategy to completion and compare them
    Benchmark,
}
