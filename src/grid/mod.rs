pub mod cell;
mod error;

pub use cell::{Cell, CellKind, INFINITY};
pub use error::GridError;

/// A cell position as `(row, col)`.
pub type Coord = (u16, u16);

/// The four lattice directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Canonical neighbor order. Every search walks neighbors in this order, and DFS
    /// pushes them in reverse so they come off its stack in this order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];
}

/// Role assignable to a cell through [`Grid::set_role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Start,
    Goal,
    Wall,
    /// Clears a wall. Has no effect on the start or goal cell.
    Empty,
}

/// Fixed-size lattice of cells with exactly one start and one distinct goal.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Box<[Cell]>,
    rows: u16,
    cols: u16,
    start: Coord,
    goal: Coord,
}

impl Grid {
    /// Creates an empty grid with the start and goal at the given cells.
    pub fn new(rows: u16, cols: u16, start: Coord, goal: Coord) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }
        let mut grid = Grid {
            cells: vec![Cell::default(); rows as usize * cols as usize].into_boxed_slice(),
            rows,
            cols,
            start,
            goal,
        };
        grid.check_bounds(start)?;
        grid.check_bounds(goal)?;
        if start == goal {
            return Err(GridError::StartEqualsGoal(start));
        }
        grid[start].set_start(true);
        grid[goal].set_goal(true);
        Ok(grid)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Number of cells in the grid.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: construction rejects empty dimensions.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.rows && coord.1 < self.cols
    }

    pub fn is_boundary(&self, coord: Coord) -> bool {
        coord.0 == 0 || coord.1 == 0 || coord.0 == self.rows - 1 || coord.1 == self.cols - 1
    }

    fn check_bounds(&self, coord: Coord) -> Result<(), GridError> {
        if self.is_in_bounds(coord) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        coord.0 as usize * self.cols as usize + coord.1 as usize
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (rows, cols) = (self.rows, self.cols);
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    /// Coordinates of all wall cells in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(|&coord| self[coord].is_wall())
    }

    /// The cell one step from `coord` in `direction`, if it is inside the grid.
    pub fn step(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        if !self.is_in_bounds(coord) {
            return None;
        }
        let (row, col) = coord;
        // NOTE: Stepping back from 0 wraps to u16::MAX and stepping forward saturates at u16::MAX.
        // The largest valid index is u16::MAX - 1, so both land out of bounds.
        let next = match direction {
            Direction::Up => (row.wrapping_sub(1), col),
            Direction::Right => (row, col.saturating_add(1)),
            Direction::Down => (row.saturating_add(1), col),
            Direction::Left => (row, col.wrapping_sub(1)),
        };
        self.is_in_bounds(next).then_some(next)
    }

    /// Assigns a role to a cell and returns whether anything changed.
    ///
    /// Moving the start or goal clears the previous holder's flag and any wall on the
    /// target cell. Walls are never placed on the start or goal; such requests are
    /// ignored. Putting start and goal on the same cell is rejected and the grid is
    /// left untouched.
    pub fn set_role(&mut self, coord: Coord, role: Role) -> Result<bool, GridError> {
        self.check_bounds(coord)?;
        match role {
            Role::Start => {
                if coord == self.goal {
                    return Err(GridError::StartEqualsGoal(coord));
                }
                if coord == self.start {
                    return Ok(false);
                }
                let old = self.start;
                self[old].set_start(false);
                self[coord].set_start(true);
                self.start = coord;
                Ok(true)
            }
            Role::Goal => {
                if coord == self.start {
                    return Err(GridError::StartEqualsGoal(coord));
                }
                if coord == self.goal {
                    return Ok(false);
                }
                let old = self.goal;
                self[old].set_goal(false);
                self[coord].set_goal(true);
                self.goal = coord;
                Ok(true)
            }
            Role::Wall => {
                let was_wall = self[coord].is_wall();
                Ok(self[coord].set_wall(true) && !was_wall)
            }
            Role::Empty => {
                let was_wall = self[coord].is_wall();
                self[coord].set_wall(false);
                Ok(was_wall)
            }
        }
    }

    /// Flips the wall flag of a cell. The start and goal cells are left alone.
    pub fn toggle_wall(&mut self, coord: Coord) -> Result<bool, GridError> {
        self.check_bounds(coord)?;
        let role = if self[coord].is_wall() {
            Role::Empty
        } else {
            Role::Wall
        };
        self.set_role(coord, role)
    }

    /// Clears visited/path marks, distances, scores and predecessors on every cell.
    /// Roles and walls are preserved.
    pub fn reset_search_state(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset_search_state);
    }

    /// Like [`Grid::reset_search_state`], and also removes every wall.
    pub fn reset_all(&mut self) {
        self.cells.iter_mut().for_each(|cell| {
            cell.reset_search_state();
            cell.set_wall(false);
        });
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.cells[self.ravel_index(index)]
    }
}

impl std::ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.cells[idx]
    }
}

/// In-bounds 4-connected neighbors of a cell, in [`Direction::ALL`] order.
pub fn get_neighbors(coord: Coord, grid: &Grid) -> impl Iterator<Item = Coord> + '_ {
    Direction::ALL
        .into_iter()
        .filter_map(move |direction| grid.step(coord, direction))
}

/// Neighbors that are neither walls nor visited. Used by Dijkstra, BFS and DFS.
pub fn get_unvisited_non_wall_neighbors(
    coord: Coord,
    grid: &Grid,
) -> impl Iterator<Item = Coord> + '_ {
    get_neighbors(coord, grid).filter(|&c| !grid[c].is_wall() && !grid[c].is_visited)
}

/// Neighbors that are not walls, visited or not. A* needs these to improve
/// the distance of cells it has already discovered.
pub fn get_non_wall_neighbors(coord: Coord, grid: &Grid) -> impl Iterator<Item = Coord> + '_ {
    get_neighbors(coord, grid).filter(|&c| !grid[c].is_wall())
}
