use std::{cmp::Reverse, collections::BinaryHeap};

use crate::grid::{Coord, Grid, get_unvisited_non_wall_neighbors};

/// Dijkstra over the unit-cost lattice. Pushes visited cells onto `visited` in the order
/// they are finalized and returns whether the goal was reached.
///
/// The frontier is a min-heap keyed on `(distance, insertion order)` with lazy deletion:
/// an entry whose distance no longer matches its cell is stale and skipped. An empty heap
/// means every remaining cell is at infinite distance.
///
/// Relaxation overwrites a neighbor's distance and predecessor without comparing against
/// the old value. This is only correct because every edge costs 1, so cells are finalized
/// in non-decreasing distance order and an unvisited neighbor is never improved on by a
/// later cell. Weighted edges would need a min-comparison here.
pub fn solve_dijkstra(grid: &mut Grid, visited: &mut Vec<Coord>) -> bool {
    let start = grid.start();
    let goal = grid.goal();

    // Using Reverse to turn the max-heap into a min-heap
    let mut frontier: BinaryHeap<Reverse<(u32, u64, Coord)>> = BinaryHeap::new();
    let mut insertions = 0u64;
    grid[start].distance = 0;
    frontier.push(Reverse((0, insertions, start)));

    while let Some(Reverse((distance, _, current))) = frontier.pop() {
        let cell = &grid[current];
        if cell.is_visited || cell.is_wall() || cell.distance != distance {
            continue;
        }

        grid[current].is_visited = true;
        visited.push(current);

        if current == goal {
            return true;
        }

        let neighbors = get_unvisited_non_wall_neighbors(current, grid).collect::<Vec<_>>();
        for neighbor in neighbors {
            grid[neighbor].distance = distance + 1;
            grid[neighbor].predecessor = Some(current);
            insertions += 1;
            frontier.push(Reverse((distance + 1, insertions, neighbor)));
        }
    }

    false
}
