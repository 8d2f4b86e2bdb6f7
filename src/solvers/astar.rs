use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashSet},
};

use super::heuristic;
use crate::grid::{Coord, Grid, get_non_wall_neighbors};

/// A* with the Manhattan heuristic. Closed cells are the visited ones.
///
/// The open set is a min-heap on `(score, insertion order)`. When a neighbor's distance
/// improves it is pushed again rather than updated in place; the older entry has a
/// higher score and is discarded by the closed check once popped.
pub fn solve_astar(grid: &mut Grid, visited: &mut Vec<Coord>) -> bool {
    let start = grid.start();
    let goal = grid.goal();

    let mut open: BinaryHeap<Reverse<(u32, u64, Coord)>> = BinaryHeap::new();
    let mut in_open: HashSet<Coord> = HashSet::new();
    let mut insertions = 0u64;

    grid[start].distance = 0;
    grid[start].score = heuristic(start, goal);
    open.push(Reverse((grid[start].score, insertions, start)));
    in_open.insert(start);

    while let Some(Reverse((_, _, current))) = open.pop() {
        in_open.remove(&current);
        if grid[current].is_visited {
            continue;
        }

        grid[current].is_visited = true;
        visited.push(current);

        if current == goal {
            return true;
        }

        let tentative_distance = grid[current].distance + 1;
        let neighbors = get_non_wall_neighbors(current, grid)
            .filter(|&c| !grid[c].is_visited)
            .collect::<Vec<_>>();
        for neighbor in neighbors {
            let is_in_open = in_open.contains(&neighbor);
            if is_in_open && tentative_distance >= grid[neighbor].distance {
                continue;
            }
            let score = tentative_distance + heuristic(neighbor, goal);
            let cell = &mut grid[neighbor];
            cell.predecessor = Some(current);
            cell.distance = tentative_distance;
            cell.score = score;
            insertions += 1;
            open.push(Reverse((score, insertions, neighbor)));
            in_open.insert(neighbor);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Role;

    #[test]
    fn test_straight_line_visits_only_the_line() {
        let mut grid = Grid::new(5, 8, (2, 1), (2, 6)).unwrap();
        let mut visited = Vec::new();
        assert!(solve_astar(&mut grid, &mut visited));
        assert_eq!(
            visited,
            vec![(2, 1), (2, 2), (2, 3), (2, 4), (2, 5), (2, 6)]
        );
        assert_eq!(grid[(2, 6)].distance, 5);
        assert_eq!(grid[(2, 6)].score, 5);
    }

    #[test]
    fn test_finds_optimal_detour() {
        // . . . . .
        // S # # # G
        // . . . . .
        let mut grid = Grid::new(3, 5, (1, 0), (1, 4)).unwrap();
        (1..4).for_each(|col| {
            grid.set_role((1, col), Role::Wall).unwrap();
        });
        let mut visited = Vec::new();
        assert!(solve_astar(&mut grid, &mut visited));
        assert_eq!(grid[(1, 4)].distance, 6);
    }

    #[test]
    fn test_unreachable_goal_closes_component() {
        let mut grid = Grid::new(3, 3, (0, 0), (2, 2)).unwrap();
        grid.set_role((1, 2), Role::Wall).unwrap();
        grid.set_role((2, 1), Role::Wall).unwrap();
        let mut visited = Vec::new();
        assert!(!solve_astar(&mut grid, &mut visited));
        assert_eq!(visited.len(), 6);
        assert!(!visited.contains(&(2, 2)));
    }
}
