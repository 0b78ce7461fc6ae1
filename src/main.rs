mod cli;
mod logging;

use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use eyre::Result;
use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};

use cli::{Args, Command};
use logging::Logger;
use maze_runners::algorithms::pathfinding::{
    Algorithm, Lockstep, SearchReport, SearchRunner, SearchStatus,
};
use maze_runners::maze::{self, Cell, Grid};

fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    let grid = build_grid(&args)?;
    info!(
        "{}x{} maze: {} -> {}",
        grid.rows(),
        grid.cols(),
        grid.start(),
        grid.goal()
            .map_or_else(|| "anywhere".to_string(), |g| g.to_string())
    );
    for row in grid.tile_rows() {
        debug!("|{}|", row);
    }

    match &args.command {
        Command::Solve { algorithm } => run_solver(&grid, *algorithm, &args)?,
        Command::Race { algorithms } => run_race(&grid, algorithms, &args)?,
        Command::Benchmark => run_benchmark(&grid)?,
    }

    Ok(())
}

fn build_grid(args: &Args) -> Result<Grid> {
    let mut grid = if let Some(ref path) = args.map {
        info!("loading map: {}", path.display());
        maze::load(path)?
    } else {
        let seed = args.seed.unwrap_or_else(rand::random);
        info!(
            "generating {}x{} maze (wall ratio {}, seed {})",
            args.height, args.width, args.wall_ratio, seed
        );
        let mut rng = StdRng::seed_from_u64(seed);
        maze::generate(args.width, args.height, args.wall_ratio, &mut rng)?
    };

    if args.no_goal {
        debug!("dropping goal, runners will flood the maze");
        grid.set_goal(None)?;
    }

    Ok(grid)
}

fn pause(delay_ms: u64) {
    if delay_ms > 0 {
        thread::sleep(Duration::from_millis(delay_ms));
    }
}

// ========== Solve ==========

fn run_solver(grid: &Grid, algorithm: Algorithm, args: &Args) -> Result<()> {
    info!("solving with {}", algorithm.name());
    if args.delay > 0 {
        debug!("delay: {}ms", args.delay);
    }

    let mut runner = algorithm.runner();
    let budget = args.max_steps.unwrap_or(usize::MAX);
    let started = Instant::now();

    for (step, cell) in runner.search(grid)?.take(budget).enumerate() {
        pause(args.delay);
        debug!("step {}: {}", step + 1, cell);
    }

    print_outcome(runner.as_ref(), started.elapsed());
    Ok(())
}

fn print_outcome(runner: &dyn SearchRunner, elapsed: Duration) {
    match (runner.status(), runner.path()) {
        (SearchStatus::Found, Some(path)) => {
            info!(
                "{}: {} moves after {} visits ({:?})",
                runner.name(),
                path.len() - 1,
                runner.visited(),
                elapsed
            );
            info!("path: {}", format_path(path));
        }
        (SearchStatus::Exhausted, _) => {
            warn!(
                "{}: no path, explored {} cells",
                runner.name(),
                runner.visited()
            );
        }
        _ => {
            warn!(
                "{}: stopped after {} visits without finishing",
                runner.name(),
                runner.visited()
            );
        }
    }
}

fn format_path(path: &[Cell]) -> String {
    path.iter()
        .map(Cell::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

// ========== Race ==========

fn runnable(grid: &Grid, algorithm: Algorithm) -> bool {
    if algorithm.requires_goal() && grid.goal().is_none() {
        warn!("skipping {}: the maze has no goal", algorithm.name());
        return false;
    }
    true
}

fn run_race(grid: &Grid, algorithms: &[Algorithm], args: &Args) -> Result<()> {
    let chosen: Vec<Algorithm> = if algorithms.is_empty() {
        Algorithm::all().collect()
    } else {
        algorithms.to_vec()
    };

    let mut runners: Vec<Box<dyn SearchRunner>> = chosen
        .into_iter()
        .filter(|&algorithm| runnable(grid, algorithm))
        .map(Algorithm::runner)
        .collect();
    if runners.is_empty() {
        eyre::bail!("nothing to race");
    }

    info!(
        "racing {}",
        runners
            .iter()
            .map(|r| r.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let started = Instant::now();
    {
        let count = runners.len();
        let mut lockstep = Lockstep::new(&mut runners, grid)?;

        while !lockstep.is_finished() && args.max_steps.is_none_or(|max| lockstep.ticks() < max) {
            let moving = lockstep.step();
            pause(args.delay);
            debug!("tick {}: {} runners moved", lockstep.ticks(), moving);
        }

        let shared = lockstep
            .visits()
            .values()
            .filter(|visitors| visitors.len() == count)
            .count();
        info!(
            "{} ticks, {} cells visited, {} by every runner",
            lockstep.ticks(),
            lockstep.visits().len(),
            shared
        );
    }
    let elapsed = started.elapsed();

    for runner in &runners {
        print_outcome(runner.as_ref(), elapsed);
    }

    Ok(())
}

// ========== Benchmark ==========

fn run_benchmark(grid: &Grid) -> Result<()> {
    info!("benchmarking all strategies");

    let mut completed_results = Vec::new();

    for algorithm in Algorithm::all().filter(|&a| runnable(grid, a)) {
        debug!("testing {}", algorithm.name());

        let mut runner = algorithm.runner();
        let report = SearchReport::measure(runner.as_mut(), grid)?;
        completed_results.push((algorithm.name(), report));
    }

    print_benchmark_summary(&completed_results);
    Ok(())
}

fn print_benchmark_summary(results: &[(&str, SearchReport)]) {
    info!("benchmark results:");
    info!(
        "{:<24} {:>8}  {:>8}  {:>12}",
        "algorithm", "visited", "path", "time"
    );
    info!("{:-<58}", "");

    for (name, report) in results {
        let path = report
            .path_length
            .map_or_else(|| "-".to_string(), |len| len.to_string());
        info!(
            "{:<24} {:>8}  {:>8}  {:>12?}",
            name, report.visited, path, report.elapsed
        );
    }

    if let Some((name, report)) = results
        .iter()
        .filter(|(_, r)| r.path_length.is_some())
        .min_by_key(|(_, r)| r.path_length)
    {
        info!(
            "shortest: {} ({} cells)",
            name,
            report.path_length.unwrap_or_default()
        );
    }

    if let Some((name, report)) = results.iter().min_by_key(|(_, r)| r.visited) {
        info!("most focused: {} ({} visits)", name, report.visited);
    }

    if let Some((name, report)) = results.iter().min_by_key(|(_, r)| r.elapsed) {
        info!("fastest: {} ({:?})", name, report.elapsed);
    }
}
