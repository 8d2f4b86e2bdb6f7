use std::time::Duration;

use gridpath::{
    config::Config,
    generators::generate_maze,
    solvers::{Solver, solve},
};
use tracing_subscriber::EnvFilter;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(100)
        .max(1);
    let seed = args.next().and_then(|s| s.parse::<u64>().ok()).or(Some(0));

    let config = Config::default();
    let mut grid = config.build_grid().map_err(std::io::Error::other)?;
    let walls = generate_maze(&mut grid, seed);
    tracing::info!(
        "Profiling on a {}x{} maze with {} walls (seed {:?}), {} iterations per solver",
        grid.rows(),
        grid.cols(),
        walls.len(),
        seed,
        num_iters
    );

    for solver in Solver::ALL {
        let mut total = Duration::ZERO;
        let mut last = None;
        for _ in 0..num_iters {
            let trace = solve(&mut grid, solver);
            total += trace.elapsed;
            last = Some(trace);
        }
        if let Some(trace) = last {
            println!(
                "{:<22} mean {:>10}  visited {:>5}  path {:>4}  {:?}",
                solver.to_string(),
                format!("{:.2?}", total / num_iters),
                trace.visited.len(),
                trace.path.len(),
                trace.status
            );
        }
    }
    Ok(())
}
