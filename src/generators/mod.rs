use rand::{SeedableRng, rngs::StdRng};

mod recur_div;

use crate::grid::{Coord, Grid};
use recur_div::recursive_division;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Clears the grid and lays out a recursive-division maze on it.
///
/// Returns the cells that were turned into walls, border first, in the order they were
/// placed, so a caller can reveal them one at a time. The start and goal are never walled.
pub fn generate_maze(grid: &mut Grid, seed: Option<u64>) -> Vec<Coord> {
    grid.reset_all();
    let mut rng = get_rng(seed);
    let walls = recursive_division(grid, &mut rng);
    tracing::debug!(
        "[maze] generated {} walls on a {}x{} grid (seed {:?})",
        walls.len(),
        grid.rows(),
        grid.cols(),
        seed
    );
    walls
}
