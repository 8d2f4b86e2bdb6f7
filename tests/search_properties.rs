use std::collections::HashSet;

use gridpath::{
    generators::generate_maze,
    grid::{Coord, Grid, Role},
    solvers::{SearchStatus, SearchTrace, Solver, heuristic, solve},
};

fn reference_grid() -> Grid {
    Grid::new(20, 50, (10, 10), (10, 40)).unwrap()
}

/// Path must step between 4-connected neighbors from the start to the goal, over open cells.
fn assert_connected(grid: &Grid, trace: &SearchTrace) {
    let mut previous = grid.start();
    for &coord in &trace.path {
        assert_eq!(
            heuristic(previous, coord),
            1,
            "{}: jump from {:?} to {:?}",
            trace.solver,
            previous,
            coord
        );
        assert!(!grid[coord].is_wall(), "{}: path crosses a wall", trace.solver);
        previous = coord;
    }
    assert_eq!(previous, grid.goal(), "{}: path does not end at goal", trace.solver);
}

#[test]
fn test_open_grid_reference_scenario() {
    let mut grid = reference_grid();
    for solver in [Solver::Bfs, Solver::Dijkstra, Solver::AStar] {
        let trace = solve(&mut grid, solver);
        assert_eq!(trace.status, SearchStatus::Succeeded);
        assert_eq!(trace.path.len(), 30, "{}", solver);
        assert_eq!(trace.visited.first(), Some(&(10, 10)));
        assert_eq!(trace.visited.last(), Some(&(10, 40)));
        assert_connected(&grid, &trace);
    }

    let trace = solve(&mut grid, Solver::Dfs);
    assert!(trace.is_success());
    assert!(trace.path.len() >= 30);
    assert_connected(&grid, &trace);
}

#[test]
fn test_open_grid_path_is_manhattan() {
    let pairs: [(Coord, Coord); 5] = [
        ((0, 0), (19, 49)),
        ((19, 0), (0, 49)),
        ((5, 30), (6, 2)),
        ((12, 12), (12, 13)),
        ((3, 44), (17, 44)),
    ];
    for (start, goal) in pairs {
        let mut grid = Grid::new(20, 50, start, goal).unwrap();
        for solver in [Solver::Bfs, Solver::Dijkstra, Solver::AStar] {
            let trace = solve(&mut grid, solver);
            assert_eq!(trace.path.len() as u32, heuristic(start, goal), "{}", solver);
            assert_connected(&grid, &trace);
        }
    }
}

#[test]
fn test_full_height_wall_blocks_everything() {
    let mut grid = reference_grid();
    (0..20).for_each(|row| {
        grid.set_role((row, 25), Role::Wall).unwrap();
    });
    let reachable = grid
        .coords()
        .filter(|&(_, col)| col < 25)
        .collect::<HashSet<_>>();

    for solver in Solver::ALL {
        let trace = solve(&mut grid, solver);
        assert_eq!(trace.status, SearchStatus::Exhausted, "{}", solver);
        assert!(trace.path.is_empty(), "{}", solver);
        let visited = trace.visited.iter().copied().collect::<HashSet<_>>();
        assert_eq!(visited.len(), trace.visited.len(), "{}: revisits", solver);
        assert_eq!(visited, reachable, "{}", solver);
    }
}

#[test]
fn test_adjacent_goal_in_every_direction() {
    let goals = [(4, 5), (5, 6), (6, 5), (5, 4)];
    for goal in goals {
        let mut grid = Grid::new(11, 11, (5, 5), goal).unwrap();
        for solver in Solver::ALL {
            let trace = solve(&mut grid, solver);
            assert_eq!(trace.path, vec![goal], "{} towards {:?}", solver, goal);
        }
    }
}

#[test]
fn test_rerun_is_idempotent() {
    let mut grid = reference_grid();
    generate_maze(&mut grid, Some(11));
    for solver in Solver::ALL {
        let first = solve(&mut grid, solver);
        grid.reset_search_state();
        let second = solve(&mut grid, solver);
        assert_eq!(first.visited, second.visited, "{}", solver);
        assert_eq!(first.path, second.path, "{}", solver);
        assert_eq!(first.status, second.status, "{}", solver);
    }
}

#[test]
fn test_solvers_agree_on_mazes() {
    for seed in 0..40 {
        let mut grid = reference_grid();
        generate_maze(&mut grid, Some(seed));

        let bfs = solve(&mut grid, Solver::Bfs);
        let dijkstra = solve(&mut grid, Solver::Dijkstra);
        let astar = solve(&mut grid, Solver::AStar);
        let dfs = solve(&mut grid, Solver::Dfs);

        for trace in [&bfs, &dijkstra, &astar, &dfs] {
            assert!(trace.is_success(), "seed {}: {} found no path", seed, trace.solver);
        }

        assert_eq!(astar.path.len(), dijkstra.path.len(), "seed {}", seed);
        assert_eq!(bfs.path.len(), dijkstra.path.len(), "seed {}", seed);
        assert!(dfs.path.len() >= bfs.path.len(), "seed {}", seed);
        for trace in [&bfs, &dijkstra, &astar, &dfs] {
            assert_connected(&grid, trace);
        }
    }
}

#[test]
fn test_astar_explores_no_more_than_dijkstra_on_open_grid() {
    let mut grid = reference_grid();
    let dijkstra = solve(&mut grid, Solver::Dijkstra);
    let astar = solve(&mut grid, Solver::AStar);
    assert!(astar.visited.len() < dijkstra.visited.len());
}
