use anyhow::{ensure, Context, Result};
use crossbeam_channel::{select, tick, unbounded, Receiver};

use crate::config::SessionConfig;
use crate::simulation::Grid;
use crate::terminal::input::{self, InputEvent};
use crate::terminal::{Backend, CellStyle, CrosstermBackend, TerminalGuard};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionState {
    Running,
    Terminating,
}

/// Owns the grid and the terminal; the only place either is touched.
pub struct Session<B: Backend> {
    terminal: TerminalGuard<B>,
    grid: Grid,
    config: SessionConfig,
    state: SessionState,
    generation: u64,
}

/// Take over the terminal and play until the user quits.
pub fn start(config: SessionConfig) -> Result<()> {
    let backend = CrosstermBackend::init().context("Failed to initialize terminal")?;
    let session = Session::new(backend, config)?;

    let (events_tx, events_rx) = unbounded();
    input::spawn(events_tx).context("Failed to spawn input thread")?;

    session.run(events_rx)
}

impl<B: Backend> Session<B> {
    /// Size a randomized grid to the terminal and paint it.
    ///
    /// The backend is torn down if this fails.
    pub fn new(backend: B, config: SessionConfig) -> Result<Self> {
        let terminal = TerminalGuard::new(backend);

        let (width, height) = terminal.size().context("Failed to query terminal size")?;
        ensure!(
            width > 0 && height > 0,
            "Terminal reports an empty screen ({}x{})",
            width,
            height
        );

        let mut grid = Grid::new(width as usize, height as usize);
        grid.randomize(config.density);

        let mut session = Self {
            terminal,
            grid,
            config,
            state: SessionState::Running,
            generation: 0,
        };
        session.paint_all().context("Failed to draw initial grid")?;

        Ok(session)
    }

    /// Run the main loop until quit, then tear the terminal down.
    pub fn run(mut self, events: Receiver<InputEvent>) -> Result<()> {
        log::info!(
            "Session started: {}x{} grid, {} cells alive, tick every {:?}",
            self.grid.width(),
            self.grid.height(),
            self.grid.population(),
            self.config.tick_period
        );
        log::info!("Controls: click/drag to seed cells, r to reset, q/Esc/Ctrl-C to quit");

        let result = self.event_loop(&events);
        log::info!("Session ended after {} generations", self.generation);
        result
    }

    fn event_loop(&mut self, events: &Receiver<InputEvent>) -> Result<()> {
        let ticker = tick(self.config.tick_period);

        while self.state == SessionState::Running {
            let step = select! {
                recv(events) -> message => match message {
                    Ok(event) => self.dispatch(event),
                    Err(_) => {
                        log::warn!("Input channel closed, shutting down");
                        self.state = SessionState::Terminating;
                        Ok(())
                    }
                },
                recv(ticker) -> _ => self.tick(),
            };

            if let Err(e) = step {
                self.state = SessionState::Terminating;
                return Err(e.context("Rendering failed"));
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::Quit => {
                log::info!("Quit requested");
                self.state = SessionState::Terminating;
            }
            InputEvent::Reset => {
                self.grid.randomize(self.config.density);
                self.generation = 0;
                log::info!("Grid reset, {} cells alive", self.grid.population());
                self.paint_all()?;
            }
            InputEvent::Click { row, col } => {
                if !self.grid.exists(row, col) {
                    log::debug!("Ignoring click outside grid at ({}, {})", row, col);
                    return Ok(());
                }

                self.grid.set_alive(row as usize, col as usize, true);
                self.terminal
                    .paint_cell(col as u16, row as u16, CellStyle::Seeded)?;
                self.terminal.present()?;
            }
        }

        Ok(())
    }

    fn tick(&mut self) -> Result<()> {
        self.grid.advance();
        self.generation += 1;
        log::trace!(
            "Generation {}: {} cells alive",
            self.generation,
            self.grid.population()
        );

        self.paint_all()
    }

    fn paint_all(&mut self) -> Result<()> {
        for row in 0..self.grid.height() {
            for col in 0..self.grid.width() {
                let style = CellStyle::for_cell(self.grid.is_alive(row, col));
                self.terminal.paint_cell(col as u16, row as u16, style)?;
            }
        }

        self.terminal.present()?;
        Ok(())
    }
}
