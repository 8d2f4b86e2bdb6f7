use std::collections::VecDeque;

use crate::grid::{Coord, Grid, get_unvisited_non_wall_neighbors};

/// Level-order search. Cells are marked visited and given their predecessor when they
/// are enqueued, so each cell enters the queue once and the first route found to the
/// goal is a shortest one. `visited` records dequeue order.
pub fn solve_bfs(grid: &mut Grid, visited: &mut Vec<Coord>) -> bool {
    let start = grid.start();
    let goal = grid.goal();

    grid[start].is_visited = true;
    grid[start].distance = 0;
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        visited.push(current);

        if current == goal {
            return true;
        }

        let distance = grid[current].distance + 1;
        let neighbors = get_unvisited_non_wall_neighbors(current, grid).collect::<Vec<_>>();
        for neighbor in neighbors {
            let cell = &mut grid[neighbor];
            cell.is_visited = true;
            cell.distance = distance;
            cell.predecessor = Some(current);
            queue.push_back(neighbor);
        }
    }

    false
}
