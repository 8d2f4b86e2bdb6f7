use crossterm::style::{Color, StyledContent, Stylize};

use std::fmt;

/// Marks a distance or score that has not been reached yet.
pub const INFINITY: u32 = u32::MAX;

/// One addressable position of the grid.
///
/// The role flags (start, goal, wall) are only changed through [`super::Grid::set_role`]
/// so the grid can keep them mutually exclusive. The remaining fields are per-run
/// search scratch and are reset by [`super::Grid::reset_search_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    is_start: bool,
    is_goal: bool,
    is_wall: bool,
    /// Set once a search has finalized (or, for BFS, discovered) this cell.
    pub is_visited: bool,
    /// Set on cells of the reconstructed path after a successful search.
    pub is_path: bool,
    /// Cost from the start cell, [`INFINITY`] until reached.
    pub distance: u32,
    /// A* only: `distance + heuristic`, [`INFINITY`] until reached.
    pub score: u32,
    /// The cell this one was reached from during the current run.
    pub predecessor: Option<(u16, u16)>,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            is_start: false,
            is_goal: false,
            is_wall: false,
            is_visited: false,
            is_path: false,
            distance: INFINITY,
            score: INFINITY,
            predecessor: None,
        }
    }
}

impl Cell {
    pub fn is_start(&self) -> bool {
        self.is_start
    }

    pub fn is_goal(&self) -> bool {
        self.is_goal
    }

    pub fn is_wall(&self) -> bool {
        self.is_wall
    }

    pub(super) fn set_start(&mut self, is_start: bool) {
        self.is_start = is_start;
        if is_start {
            self.is_wall = false;
        }
    }

    pub(super) fn set_goal(&mut self, is_goal: bool) {
        self.is_goal = is_goal;
        if is_goal {
            self.is_wall = false;
        }
    }

    /// Returns false if the cell holds the start or goal role and cannot become a wall.
    pub(super) fn set_wall(&mut self, is_wall: bool) -> bool {
        if is_wall && (self.is_start || self.is_goal) {
            return false;
        }
        self.is_wall = is_wall;
        true
    }

    /// Clear the search scratch fields, keeping the roles.
    pub(super) fn reset_search_state(&mut self) {
        self.is_visited = false;
        self.is_path = false;
        self.distance = INFINITY;
        self.score = INFINITY;
        self.predecessor = None;
    }

    /// The kind shown for this cell, ignoring search marks.
    pub fn role_kind(&self) -> CellKind {
        if self.is_start {
            CellKind::Start
        } else if self.is_goal {
            CellKind::Goal
        } else if self.is_wall {
            CellKind::Wall
        } else {
            CellKind::Empty
        }
    }

    /// The kind shown for this cell. Roles take precedence over search marks,
    /// and path takes precedence over visited.
    pub fn kind(&self) -> CellKind {
        match self.role_kind() {
            CellKind::Empty if self.is_path => CellKind::Path,
            CellKind::Empty if self.is_visited => CellKind::Visited,
            kind => kind,
        }
    }
}

/// What a cell looks like on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Start,
    Goal,
    Wall,
    Path,
    Visited,
    Empty,
    /// The editing cursor, drawn over whatever lies beneath it.
    Cursor,
}

impl CellKind {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    fn styled(&self) -> StyledContent<&'static str> {
        match self {
            CellKind::Start => "🟩".with(Color::Green),
            CellKind::Goal => "🟥".with(Color::Red),
            CellKind::Wall => "⬜".with(Color::White),
            CellKind::Path => "🟨".with(Color::Yellow),
            CellKind::Visited => "* ".with(Color::Blue),
            CellKind::Empty => "  ".with(Color::Reset),
            CellKind::Cursor => "[]".with(Color::Magenta),
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = self.styled();

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                CellKind::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
