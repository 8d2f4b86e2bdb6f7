use std::{
    io::{Stdout, Write},
    time::Duration,
};

use crossterm::{
    QueueableCommand, cursor,
    event::{self, KeyEventKind},
    queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};
use unicode_truncate::UnicodeTruncateStr;

use crate::{
    app::session::Session,
    grid::{CellKind, Coord},
};

/// How much of the grid state to show when redrawing everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridView {
    /// Start and goal only, as the backdrop for revealing a maze.
    Blank,
    /// Roles and walls, without search marks, as the backdrop for replaying a search.
    Roles,
    /// Everything, including visited and path marks.
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererStatus {
    Completed,
    /// A key was pressed during a replay and the rest of the trace was dropped.
    Cancelled,
}

pub struct Renderer {
    /// Standard output handle to write to the terminal
    stdout: Stdout,
}

impl Renderer {
    /// Rows below the grid reserved for status, message and help lines
    pub const NUM_STATUS_ROWS: u16 = 4;

    pub fn new() -> Self {
        Self {
            stdout: std::io::stdout(),
        }
    }

    /// Check if the terminal can show a grid of the given size together with the status rows.
    pub fn fits(rows: u16, cols: u16) -> std::io::Result<bool> {
        let (term_width, term_height) = terminal::size()?;
        Ok(term_width >= cols.saturating_mul(CellKind::CELL_WIDTH)
            && term_height >= rows.saturating_add(Renderer::NUM_STATUS_ROWS))
    }

    fn kind_at(session: &Session, coord: Coord, view: GridView) -> CellKind {
        if coord == session.cursor() {
            return CellKind::Cursor;
        }
        let cell = &session.grid()[coord];
        match view {
            GridView::Full => cell.kind(),
            GridView::Roles => cell.role_kind(),
            GridView::Blank => match cell.role_kind() {
                CellKind::Wall => CellKind::Empty,
                kind => kind,
            },
        }
    }

    fn queue_cell(&mut self, coord: Coord, kind: CellKind) -> std::io::Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(coord.1 * CellKind::CELL_WIDTH, coord.0),
            style::Print(kind)
        )
    }

    /// Redraw the whole grid and the status rows.
    pub fn draw_grid(
        &mut self,
        session: &Session,
        view: GridView,
        message: Option<&str>,
    ) -> std::io::Result<()> {
        queue!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        for coord in session.grid().coords() {
            self.queue_cell(coord, Renderer::kind_at(session, coord, view))?;
        }
        self.queue_status(session, message)?;
        self.stdout.flush()
    }

    /// Redraw a few cells in full view, e.g. after an edit or a cursor move.
    pub fn draw_cells(
        &mut self,
        session: &Session,
        coords: &[Coord],
        message: Option<&str>,
    ) -> std::io::Result<()> {
        for &coord in coords {
            self.queue_cell(coord, Renderer::kind_at(session, coord, GridView::Full))?;
        }
        self.queue_status(session, message)?;
        self.stdout.flush()
    }

    fn queue_status(&mut self, session: &Session, message: Option<&str>) -> std::io::Result<()> {
        let (term_width, _) = terminal::size()?;
        let width = term_width as usize;
        let top = session.grid().rows() + 1;

        let solver = session.solver();
        let under_cursor = session.grid()[session.cursor()].kind();
        let mut status = format!(
            "Cursor: {:?} {:?} | Mode: {} | {} ({})",
            session.cursor(),
            under_cursor,
            session.mode(),
            solver,
            solver.description()
        );
        if let Some(trace) = session.last_trace() {
            status.push_str(&format!(
                " | Visited: {} | Path: {} | Time: {:.2?}",
                trace.visited.len(),
                trace.path.len(),
                trace.elapsed
            ));
        }
        let help = "Arrows: move  Space: place  s/g/w: mode  1-4: algorithm  \
Enter: run  m: maze  r: reset  c: clear  Esc: exit";

        let (status, _) = status.unicode_truncate(width);
        let (message, _) = message.unwrap_or("").unicode_truncate(width);
        let (help, _) = help.unicode_truncate(width);

        queue!(
            self.stdout,
            cursor::MoveTo(0, top),
            terminal::Clear(ClearType::FromCursorDown),
            style::PrintStyledContent(status.with(Color::Green).attribute(Attribute::Bold)),
            cursor::MoveTo(0, top + 1),
            style::PrintStyledContent(message.with(Color::Yellow)),
            cursor::MoveTo(0, top + 2),
            style::PrintStyledContent(help.with(Color::DarkGrey)),
        )
    }

    /// Reveal `coords` one at a time as `kind`, waiting `delay` between cells.
    /// Start and goal cells keep their own glyph.
    ///
    /// Any key press stops the replay early. The caller is expected to redraw the final
    /// state afterwards either way.
    pub fn replay(
        &mut self,
        session: &Session,
        coords: &[Coord],
        kind: CellKind,
        delay: Duration,
    ) -> std::io::Result<RendererStatus> {
        let grid = session.grid();
        for &coord in coords {
            if coord == grid.start() || coord == grid.goal() {
                continue;
            }
            self.queue_cell(coord, kind)?;
            self.stdout.flush()?;

            // Wait out the delay, returning early on a key press
            if event::poll(delay)? {
                if let event::Event::Key(key_event) = event::read()? {
                    if key_event.kind == KeyEventKind::Press {
                        tracing::debug!("[render] replay cancelled by {:?}", key_event.code);
                        return Ok(RendererStatus::Cancelled);
                    }
                }
            }
        }
        Ok(RendererStatus::Completed)
    }

    /// Show a message under the grid without touching the grid itself.
    pub fn show_message(&mut self, session: &Session, message: &str) -> std::io::Result<()> {
        self.queue_status(session, Some(message))?;
        self.stdout.flush()
    }

    /// Print a standalone notice, used before the grid is drawn.
    pub fn notice(&mut self, message: &str) -> std::io::Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        queue!(
            self.stdout,
            terminal::Clear(ClearType::All),
            style::PrintStyledContent(message.with(Color::Yellow).attribute(Attribute::Bold)),
            style::PrintStyledContent(
                "\r\nPress Esc to exit...\r\n"
                    .with(Color::Blue)
                    .attribute(Attribute::Bold)
            )
        )?;
        self.stdout.flush()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
