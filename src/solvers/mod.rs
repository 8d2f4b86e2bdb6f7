use std::time::{Duration, Instant};

mod astar;
mod bfs;
mod dfs;
mod dijkstra;

use crate::grid::{Coord, Grid};
use astar::solve_astar;
use bfs::solve_bfs;
use dfs::solve_dfs;
use dijkstra::solve_dijkstra;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Dijkstra,
    Bfs,
    Dfs,
    AStar,
}

impl Solver {
    /// Every available solver, in menu order.
    pub const ALL: [Solver; 4] = [Solver::Dijkstra, Solver::Bfs, Solver::Dfs, Solver::AStar];

    /// Short tag used on the command line and in logs.
    pub fn id(&self) -> &'static str {
        match self {
            Solver::Dijkstra => "dijkstra",
            Solver::Bfs => "bfs",
            Solver::Dfs => "dfs",
            Solver::AStar => "astar",
        }
    }

    /// Looks up a solver by its tag. Unknown tags fall back to Dijkstra.
    pub fn from_id(id: &str) -> Solver {
        Solver::ALL
            .into_iter()
            .find(|solver| solver.id() == id)
            .unwrap_or(Solver::Dijkstra)
    }

    /// What the algorithm guarantees about the path it finds.
    pub fn description(&self) -> &'static str {
        match self {
            Solver::Dijkstra => "Guarantees the shortest path",
            Solver::Bfs => "Guarantees the shortest path (unweighted)",
            Solver::Dfs => "Does not guarantee the shortest path",
            Solver::AStar => "Guarantees the shortest path (uses heuristics)",
        }
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dijkstra => write!(f, "Dijkstra's Algorithm"),
            Solver::Bfs => write!(f, "Breadth-First Search"),
            Solver::Dfs => write!(f, "Depth-First Search"),
            Solver::AStar => write!(f, "A* Algorithm"),
        }
    }
}

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The goal was reached and the path trace is non-empty.
    Succeeded,
    /// Every reachable cell was explored without reaching the goal.
    Exhausted,
}

/// Result of one search run.
#[derive(Debug, Clone)]
pub struct SearchTrace {
    pub solver: Solver,
    /// Cells in the order the search visited them, start first.
    pub visited: Vec<Coord>,
    /// Cells from the start (excluded) to the goal (included). Empty when no path exists.
    pub path: Vec<Coord>,
    pub status: SearchStatus,
    /// Time spent computing the traces.
    pub elapsed: Duration,
}

impl SearchTrace {
    pub fn is_success(&self) -> bool {
        self.status == SearchStatus::Succeeded
    }
}

/// Manhattan distance between two cells.
pub fn heuristic(a: Coord, b: Coord) -> u32 {
    a.0.abs_diff(b.0) as u32 + a.1.abs_diff(b.1) as u32
}

/// Walks predecessor links back from `goal` and returns the cells from the start
/// (excluded) to `goal` (included). Empty if `goal` has no predecessor.
pub fn reconstruct_path(grid: &Grid, goal: Coord) -> Vec<Coord> {
    let mut path = Vec::new();
    let mut current = goal;
    while let Some(predecessor) = grid[current].predecessor {
        path.push(current);
        current = predecessor;
    }
    path.reverse();
    path
}

/// Resets the grid's search state, runs `solver` from the grid's start to its goal and
/// marks the path cells. The grid's search fields are left as the run produced them.
pub fn solve(grid: &mut Grid, solver: Solver) -> SearchTrace {
    grid.reset_search_state();

    let started = Instant::now();
    let mut visited = Vec::new();
    let goal_reached = match solver {
        Solver::Dijkstra => solve_dijkstra(grid, &mut visited),
        Solver::Bfs => solve_bfs(grid, &mut visited),
        Solver::Dfs => solve_dfs(grid, &mut visited),
        Solver::AStar => solve_astar(grid, &mut visited),
    };
    let (path, status) = if goal_reached {
        (reconstruct_path(grid, grid.goal()), SearchStatus::Succeeded)
    } else {
        (Vec::new(), SearchStatus::Exhausted)
    };
    let elapsed = started.elapsed();

    path.iter().for_each(|&coord| grid[coord].is_path = true);

    tracing::debug!(
        "[search] {} finished: {:?}, visited {} cells, path length {}, took {:?}",
        solver.id(),
        status,
        visited.len(),
        path.len(),
        elapsed
    );

    SearchTrace {
        solver,
        visited,
        path,
        status,
        elapsed,
    }
}
