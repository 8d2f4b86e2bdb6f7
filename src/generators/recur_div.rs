use crate::grid::{Coord, Grid, Role};
use rand::{Rng, rngs::StdRng};

/// Walls the border, then recursively splits the interior `[1, rows-2] x [1, cols-2]`
/// with single-cell-thick wall lines, each leaving one hole.
///
/// Lines sit on even rows and columns and holes on odd ones, so a later line never
/// runs across an earlier hole. Lines also keep clear of the start and goal and of
/// their neighbors, which leaves every open cell reachable from the start unless the
/// start or goal sits in a corner of the border.
pub fn recursive_division(grid: &mut Grid, rng: &mut StdRng) -> Vec<Coord> {
    let mut walls = Vec::new();

    // Wall the border
    let border = grid
        .coords()
        .filter(|&coord| grid.is_boundary(coord))
        .collect::<Vec<_>>();
    for coord in border {
        place_wall(grid, coord, &mut walls);
    }

    // Grids under 3 cells in either direction have no interior to divide
    if grid.rows() >= 3 && grid.cols() >= 3 {
        divide(
            grid,
            (1, grid.rows() - 2),
            (1, grid.cols() - 2),
            rng,
            &mut walls,
        );
    }
    walls
}

fn place_wall(grid: &mut Grid, coord: Coord, walls: &mut Vec<Coord>) {
    if coord == grid.start() || coord == grid.goal() {
        return;
    }
    // Only errors out of bounds, which callers never pass
    if let Ok(true) = grid.set_role(coord, Role::Wall) {
        walls.push(coord);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Horizontal,
    Vertical,
}

/// Whether `point` lies on, or next to, the line at `at` spanning the inclusive `span`.
fn touches(point: (u16, u16), at: u16, span: (u16, u16)) -> bool {
    let (along, across) = point;
    let off_line = across.abs_diff(at);
    let off_span = span.0.saturating_sub(along) + along.saturating_sub(span.1);
    off_line.saturating_add(off_span) <= 1
}

/// Even positions strictly inside `range` where a line stays clear of start and goal.
/// `range` starts on an odd position.
fn line_positions(
    grid: &Grid,
    orientation: Orientation,
    range: (u16, u16),
    span: (u16, u16),
) -> Vec<u16> {
    let keep_clear = [grid.start(), grid.goal()].map(|(row, col)| match orientation {
        Orientation::Horizontal => (col, row),
        Orientation::Vertical => (row, col),
    });
    (range.0 + 1..range.1)
        .step_by(2)
        .filter(|&at| !keep_clear.iter().any(|&point| touches(point, at, span)))
        .collect()
}

/// Divide the region spanning the inclusive `rows` and `cols` ranges.
/// Both ranges start on an odd position.
fn divide(
    grid: &mut Grid,
    rows: (u16, u16),
    cols: (u16, u16),
    rng: &mut StdRng,
    walls: &mut Vec<Coord>,
) {
    let (top, bottom) = rows;
    let (left, right) = cols;
    // Stop once either side spans fewer than 3 cells. An inverted range saturates to 0.
    if bottom.saturating_sub(top) < 2 || right.saturating_sub(left) < 2 {
        return;
    }

    let preferred = if rng.random_bool(0.5) {
        [Orientation::Horizontal, Orientation::Vertical]
    } else {
        [Orientation::Vertical, Orientation::Horizontal]
    };
    // Fall back to the other orientation when start or goal rules out every line
    let Some((orientation, positions)) = preferred.into_iter().find_map(|orientation| {
        let positions = match orientation {
            Orientation::Horizontal => line_positions(grid, orientation, rows, cols),
            Orientation::Vertical => line_positions(grid, orientation, cols, rows),
        };
        (!positions.is_empty()).then_some((orientation, positions))
    }) else {
        return;
    };
    let at = positions[rng.random_range(0..positions.len())];

    match orientation {
        Orientation::Horizontal => {
            // Hole on an odd column so no later vertical line can cover it
            let hole = left + 2 * rng.random_range(0..=(right - left) / 2);
            for col in left..=right {
                if col != hole {
                    place_wall(grid, (at, col), walls);
                }
            }

            // Recursively divide the regions above and below the wall
            divide(grid, (top, at - 1), cols, rng, walls);
            divide(grid, (at + 1, bottom), cols, rng, walls);
        }
        Orientation::Vertical => {
            let hole = top + 2 * rng.random_range(0..=(bottom - top) / 2);
            for row in top..=bottom {
                if row != hole {
                    place_wall(grid, (row, at), walls);
                }
            }

            // Recursively divide the regions left and right of the wall
            divide(grid, rows, (left, at - 1), rng, walls);
            divide(grid, rows, (at + 1, right), rng, walls);
        }
    }
}
