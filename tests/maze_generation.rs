use std::collections::{HashSet, VecDeque};

use gridpath::{
    generators::generate_maze,
    grid::{Coord, Grid, Role, get_non_wall_neighbors},
};

/// Open cells reachable from the start.
fn reachable_from_start(grid: &Grid) -> HashSet<Coord> {
    let mut seen = HashSet::from([grid.start()]);
    let mut queue = VecDeque::from([grid.start()]);
    while let Some(coord) = queue.pop_front() {
        for neighbor in get_non_wall_neighbors(coord, grid) {
            if seen.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    seen
}

#[test]
fn test_never_walls_start_or_goal() {
    let layouts: [(u16, u16, Coord, Coord); 4] = [
        (20, 50, (10, 10), (10, 40)),
        (20, 50, (0, 0), (19, 49)),
        (9, 9, (1, 1), (7, 7)),
        (15, 31, (7, 0), (3, 30)),
    ];
    for (rows, cols, start, goal) in layouts {
        for seed in 0..100 {
            let mut grid = Grid::new(rows, cols, start, goal).unwrap();
            let walls = generate_maze(&mut grid, Some(seed));
            assert!(!grid[start].is_wall(), "seed {}", seed);
            assert!(!grid[goal].is_wall(), "seed {}", seed);
            assert!(!walls.contains(&start));
            assert!(!walls.contains(&goal));
        }
    }
}

#[test]
fn test_returned_walls_match_grid() {
    let mut grid = Grid::new(20, 50, (10, 10), (10, 40)).unwrap();
    let walls = generate_maze(&mut grid, Some(3));
    let mut sorted = walls.clone();
    sorted.sort();
    assert_eq!(sorted, grid.walls().collect::<Vec<_>>());
}

#[test]
fn test_generation_replaces_existing_walls() {
    let mut grid = Grid::new(20, 50, (10, 10), (10, 40)).unwrap();
    let first = generate_maze(&mut grid, Some(5));
    grid.set_role((10, 11), Role::Wall).unwrap();
    let second = generate_maze(&mut grid, Some(5));
    assert_eq!(first, second);
    assert_eq!(grid.walls().count(), second.len());
}

#[test]
fn test_grid_too_small_to_divide() {
    let mut grid = Grid::new(2, 2, (0, 0), (1, 1)).unwrap();
    let walls = generate_maze(&mut grid, Some(0));
    assert_eq!(walls, vec![(0, 1), (1, 0)]);
}

#[test]
fn test_every_open_cell_reachable() {
    // Start and goal inside, on the border, and on even and odd positions
    let layouts: [(u16, u16, Coord, Coord); 5] = [
        (20, 50, (10, 10), (10, 40)),
        (20, 50, (0, 7), (19, 42)),
        (9, 9, (1, 1), (7, 7)),
        (15, 31, (7, 0), (3, 30)),
        (21, 40, (2, 3), (18, 36)),
    ];
    for (rows, cols, start, goal) in layouts {
        for seed in 0..200 {
            let mut grid = Grid::new(rows, cols, start, goal).unwrap();
            generate_maze(&mut grid, Some(seed));
            let reachable = reachable_from_start(&grid);
            let open = grid
                .coords()
                .filter(|&c| !grid[c].is_wall())
                .collect::<HashSet<_>>();
            assert_eq!(reachable, open, "{}x{} seed {}", rows, cols, seed);
        }
    }
}
