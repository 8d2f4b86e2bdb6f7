use crate::grid::{Coord, Grid, get_unvisited_non_wall_neighbors};

/// Iterative depth-first search. A cell is marked visited when it is popped, and cells
/// already visited by then are skipped. Neighbors are pushed in reverse canonical order
/// so they come off the stack up, right, down, left.
///
/// A cell keeps the predecessor that first pushed it. Does not guarantee a shortest path.
pub fn solve_dfs(grid: &mut Grid, visited: &mut Vec<Coord>) -> bool {
    let start = grid.start();
    let goal = grid.goal();

    grid[start].distance = 0;
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if grid[current].is_visited {
            continue;
        }

        grid[current].is_visited = true;
        visited.push(current);

        if current == goal {
            return true;
        }

        let distance = grid[current].distance + 1;
        let neighbors = get_unvisited_non_wall_neighbors(current, grid).collect::<Vec<_>>();
        for neighbor in neighbors.into_iter().rev() {
            let cell = &mut grid[neighbor];
            if cell.predecessor.is_none() {
                cell.predecessor = Some(current);
                cell.distance = distance;
            }
            stack.push(neighbor);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::reconstruct_path;

    #[test]
    fn test_goes_deep_first() {
        // Goal is below the start, but DFS heads up first
        let mut grid = Grid::new(3, 3, (1, 1), (2, 1)).unwrap();
        let mut visited = Vec::new();
        assert!(solve_dfs(&mut grid, &mut visited));
        assert_eq!(&visited[..4], &[(1, 1), (0, 1), (0, 2), (1, 2)]);
        assert_eq!(visited.last(), Some(&(2, 1)));
    }

    #[test]
    fn test_adjacent_goal_keeps_first_predecessor() {
        let mut grid = Grid::new(3, 3, (1, 1), (2, 1)).unwrap();
        let mut visited = Vec::new();
        assert!(solve_dfs(&mut grid, &mut visited));
        assert_eq!(reconstruct_path(&grid, (2, 1)), vec![(2, 1)]);
    }

    #[test]
    fn test_path_is_connected() {
        let mut grid = Grid::new(6, 7, (0, 0), (5, 6)).unwrap();
        let mut visited = Vec::new();
        assert!(solve_dfs(&mut grid, &mut visited));
        let path = reconstruct_path(&grid, (5, 6));
        let mut previous = (0, 0);
        for &coord in &path {
            assert_eq!(crate::solvers::heuristic(previous, coord), 1);
            previous = coord;
        }
        assert_eq!(previous, (5, 6));
        assert!(path.len() >= 11);
    }
}
