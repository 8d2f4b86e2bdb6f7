//! Grid construction and editing errors.

/// Rejected grid construction or role assignment.
///
/// A grid always has exactly one start and one distinct goal, so anything that
/// would break that is refused up front instead of being searched around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Rows or columns is zero.
    EmptyDimensions { rows: u16, cols: u16 },
    /// The coordinate lies outside `[0, rows) x [0, cols)`.
    OutOfBounds {
        coord: (u16, u16),
        rows: u16,
        cols: u16,
    },
    /// Start and goal would share a cell.
    StartEqualsGoal((u16, u16)),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDimensions { rows, cols } => {
                write!(f, "grid dimensions must be non-zero, got {rows}x{cols}")
            }
            Self::OutOfBounds { coord, rows, cols } => write!(
                f,
                "cell ({}, {}) is outside the {rows}x{cols} grid",
                coord.0, coord.1
            ),
            Self::StartEqualsGoal(coord) => write!(
                f,
                "start and goal cannot share cell ({}, {})",
                coord.0, coord.1
            ),
        }
    }
}

impl std::error::Error for GridError {}
