mod renderer;
mod session;

use std::io::{Stdout, Write};

use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyEventKind},
    queue,
    terminal::{self, ClearType},
};

pub use renderer::{GridView, Renderer, RendererStatus};
pub use session::{PlacementMode, Session};

use crate::{
    config::Config,
    grid::{CellKind, Direction, GridError},
    solvers::Solver,
};

/// Whether the event loop should keep going after handling a key.
enum Flow {
    Continue,
    Exit,
}

pub struct App {
    config: Config,
    session: Session,
    renderer: Renderer,
}

impl App {
    pub fn new(config: Config) -> Result<Self, GridError> {
        let grid = config.build_grid()?;
        let session = Session::new(grid, config.seed);
        Ok(App {
            config,
            session,
            renderer: Renderer::new(),
        })
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Main event loop. Returns when the user presses Esc.
    pub fn run(&mut self) -> std::io::Result<()> {
        let (rows, cols) = (self.session.grid().rows(), self.session.grid().cols());
        if !Renderer::fits(rows, cols)? {
            let msg = format!(
                "Terminal size is too small for a {}x{} grid. Please resize the terminal.",
                rows, cols
            );
            tracing::info!("{}", msg);
            self.renderer.notice(&msg)?;
            App::wait_for_esc()?;
            return Ok(());
        }

        tracing::info!("Started main app loop on a {}x{} grid", rows, cols);
        self.renderer
            .draw_grid(&self.session, GridView::Full, None)?;

        loop {
            let flow = match event::read()? {
                event::Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key(key_event)?
                }
                event::Event::Resize(_, _) => {
                    self.renderer
                        .draw_grid(&self.session, GridView::Full, None)?;
                    Flow::Continue
                }
                _ => Flow::Continue,
            };
            if let Flow::Exit = flow {
                break;
            }
        }
        tracing::info!("Exiting main app loop");
        Ok(())
    }

    fn handle_key(&mut self, key_event: KeyEvent) -> std::io::Result<Flow> {
        let direction = match key_event.code {
            KeyCode::Up => Some(Direction::Up),
            KeyCode::Right => Some(Direction::Right),
            KeyCode::Down => Some(Direction::Down),
            KeyCode::Left => Some(Direction::Left),
            _ => None,
        };
        if let Some(direction) = direction {
            let previous = self.session.move_cursor(direction);
            let current = self.session.cursor();
            self.renderer
                .draw_cells(&self.session, &[previous, current], None)?;
            return Ok(Flow::Continue);
        }

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                tracing::debug!("[app loop] exit key pressed");
                return Ok(Flow::Exit);
            }
            KeyCode::Char(' ') => self.place()?,
            KeyCode::Char('s') => self.switch_mode(PlacementMode::Start)?,
            KeyCode::Char('g') => self.switch_mode(PlacementMode::Goal)?,
            KeyCode::Char('w') => self.switch_mode(PlacementMode::Wall)?,
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.session.set_solver(Solver::ALL[index]);
                self.renderer.show_message(
                    &self.session,
                    &format!("Selected {}", Solver::ALL[index]),
                )?;
            }
            KeyCode::Enter => self.visualize_search()?,
            KeyCode::Char('m') => self.visualize_maze()?,
            KeyCode::Char('r') => {
                self.session.reset_search();
                self.renderer
                    .draw_grid(&self.session, GridView::Full, None)?;
            }
            KeyCode::Char('c') => {
                self.session.reset();
                self.renderer
                    .draw_grid(&self.session, GridView::Full, Some("Grid cleared"))?;
            }
            _ => {}
        }
        Ok(Flow::Continue)
    }

    fn switch_mode(&mut self, mode: PlacementMode) -> std::io::Result<()> {
        self.session.set_mode(mode);
        self.renderer
            .show_message(&self.session, &format!("Placing {}", mode))
    }

    /// Apply the placement mode at the cursor
    fn place(&mut self) -> std::io::Result<()> {
        let had_trace = self.session.last_trace().is_some();
        match self.session.apply_at_cursor() {
            Ok(dirty) if dirty.is_empty() => Ok(()),
            // The edit wiped the search marks, so every cell may have changed
            Ok(_) if had_trace => self
                .renderer
                .draw_grid(&self.session, GridView::Full, None),
            Ok(dirty) => self.renderer.draw_cells(&self.session, &dirty, None),
            Err(e) => {
                tracing::debug!("[app loop] placement rejected: {}", e);
                self.renderer.show_message(&self.session, &e.to_string())
            }
        }
    }

    /// Run the selected solver and replay its visited cells, then its path.
    fn visualize_search(&mut self) -> std::io::Result<()> {
        let trace = self.session.run_search().clone();
        self.renderer
            .draw_grid(&self.session, GridView::Roles, None)?;

        let mut status = self.renderer.replay(
            &self.session,
            &trace.visited,
            CellKind::Visited,
            self.config.visit_delay,
        )?;
        if status == RendererStatus::Completed {
            status = self.renderer.replay(
                &self.session,
                &trace.path,
                CellKind::Path,
                self.config.path_delay,
            )?;
        }

        let msg = match (status, trace.is_success()) {
            (RendererStatus::Cancelled, _) => "Animation skipped",
            (_, true) => "Path found!",
            (_, false) => "No path found.",
        };
        self.renderer
            .draw_grid(&self.session, GridView::Full, Some(msg))
    }

    /// Generate a maze and reveal its walls in placement order.
    fn visualize_maze(&mut self) -> std::io::Result<()> {
        let walls = self.session.generate_maze();
        self.renderer
            .draw_grid(&self.session, GridView::Blank, None)?;
        self.renderer.replay(
            &self.session,
            &walls,
            CellKind::Wall,
            self.config.wall_delay,
        )?;
        self.renderer
            .draw_grid(&self.session, GridView::Full, Some("Maze generated"))
    }

    /// Wait for the user to press the Esc key
    /// This function blocks until Esc is pressed
    fn wait_for_esc() -> std::io::Result<()> {
        loop {
            if let event::Event::Key(event::KeyEvent { code, kind, .. }) = event::read()? {
                if code == KeyCode::Esc && kind == KeyEventKind::Press {
                    break;
                }
            }
        }
        Ok(())
    }
}
