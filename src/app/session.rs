use crate::{
    generators::generate_maze,
    grid::{Coord, Direction, Grid, GridError, Role},
    solvers::{SearchTrace, Solver, solve},
};

/// What applying the cursor does to the cell under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    Start,
    Goal,
    Wall,
}

impl std::fmt::Display for PlacementMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementMode::Start => write!(f, "Start"),
            PlacementMode::Goal => write!(f, "Goal"),
            PlacementMode::Wall => write!(f, "Wall"),
        }
    }
}

/// Editing state of one visualizer session: the grid plus everything the user has
/// selected. All front-end actions go through here.
pub struct Session {
    grid: Grid,
    mode: PlacementMode,
    solver: Solver,
    cursor: Coord,
    last_trace: Option<SearchTrace>,
    /// Seed for the next generated maze, advanced after each use
    seed: Option<u64>,
}

impl Session {
    pub fn new(grid: Grid, seed: Option<u64>) -> Self {
        let cursor = grid.start();
        Session {
            grid,
            mode: PlacementMode::Wall,
            solver: Solver::Dijkstra,
            cursor,
            last_trace: None,
            seed,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: PlacementMode) {
        self.mode = mode;
    }

    pub fn solver(&self) -> Solver {
        self.solver
    }

    pub fn set_solver(&mut self, solver: Solver) {
        self.solver = solver;
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn last_trace(&self) -> Option<&SearchTrace> {
        self.last_trace.as_ref()
    }

    /// Moves the cursor one cell, staying put at the grid edge.
    /// Returns the previous cursor position.
    pub fn move_cursor(&mut self, direction: Direction) -> Coord {
        let previous = self.cursor;
        if let Some(next) = self.grid.step(self.cursor, direction) {
            self.cursor = next;
        }
        previous
    }

    /// Applies the placement mode to a cell and returns the cells whose look changed.
    ///
    /// Start and goal moves clear any wall on the target; wall mode toggles the wall and
    /// ignores the start and goal cells. Any change discards the last search.
    pub fn apply(&mut self, coord: Coord) -> Result<Vec<Coord>, GridError> {
        let (previous_start, previous_goal) = (self.grid.start(), self.grid.goal());
        let changed = match self.mode {
            PlacementMode::Start => self.grid.set_role(coord, Role::Start)?,
            PlacementMode::Goal => self.grid.set_role(coord, Role::Goal)?,
            PlacementMode::Wall => self.grid.toggle_wall(coord)?,
        };
        if !changed {
            return Ok(Vec::new());
        }
        tracing::debug!("[session] {} placed at {:?}", self.mode, coord);

        let mut dirty = vec![coord];
        match self.mode {
            PlacementMode::Start => dirty.push(previous_start),
            PlacementMode::Goal => dirty.push(previous_goal),
            PlacementMode::Wall => {}
        }
        if self.last_trace.take().is_some() {
            // Search marks are stale once the grid changes
            self.grid.reset_search_state();
        }
        Ok(dirty)
    }

    pub fn apply_at_cursor(&mut self) -> Result<Vec<Coord>, GridError> {
        self.apply(self.cursor)
    }

    /// Runs the selected solver and keeps the resulting trace.
    pub fn run_search(&mut self) -> &SearchTrace {
        let trace = solve(&mut self.grid, self.solver);
        tracing::info!(
            "[session] {} {}: visited {}, path {}",
            self.solver,
            if trace.is_success() {
                "reached the goal"
            } else {
                "found no path"
            },
            trace.visited.len(),
            trace.path.len()
        );
        self.last_trace.insert(trace)
    }

    /// Replaces the grid's walls with a freshly generated maze.
    /// Returns the walls in placement order.
    pub fn generate_maze(&mut self) -> Vec<Coord> {
        self.last_trace = None;
        let seed = self.seed;
        self.seed = seed.map(|s| s.wrapping_add(1));
        let walls = generate_maze(&mut self.grid, seed);
        tracing::info!("[session] generated maze with {} walls", walls.len());
        walls
    }

    /// Clears search marks, keeping walls.
    pub fn reset_search(&mut self) {
        self.last_trace = None;
        self.grid.reset_search_state();
    }

    /// Clears search marks and all walls. Start and goal stay where they are.
    pub fn reset(&mut self) {
        self.last_trace = None;
        self.grid.reset_all();
        tracing::info!("[session] grid reset");
    }
}
