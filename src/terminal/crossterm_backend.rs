use std::io::{self, BufWriter, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use super::{Backend, CellStyle};

/// Room for a full frame of escape sequences on typical terminals
const FRAME_BUFFER_CAPACITY: usize = 1 << 16;

/// Raw-mode, alternate-screen, mouse-capturing stdout
pub struct CrosstermBackend {
    out: BufWriter<Stdout>,
}

impl CrosstermBackend {
    /// Take over the terminal. On failure the terminal is left as it was found.
    pub fn init() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let mut backend = Self {
            out: BufWriter::with_capacity(FRAME_BUFFER_CAPACITY, io::stdout()),
        };

        if let Err(e) = execute!(
            backend.out,
            EnterAlternateScreen,
            EnableMouseCapture,
            Hide,
            Clear(ClearType::All)
        ) {
            let _ = backend.teardown();
            return Err(e);
        }

        Ok(backend)
    }
}

fn color(style: CellStyle) -> Color {
    match style {
        CellStyle::Seeded => Color::Cyan,
        CellStyle::Alive | CellStyle::Dead => Color::Reset,
    }
}

impl Backend for CrosstermBackend {
    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn paint_cell(&mut self, col: u16, row: u16, style: CellStyle) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(col, row),
            SetForegroundColor(color(style)),
            Print(style.glyph())
        )
    }

    fn present(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn teardown(&mut self) -> io::Result<()> {
        // Raw mode must be left even if the screen could not be restored
        let screen = execute!(
            self.out,
            ResetColor,
            Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let raw = terminal::disable_raw_mode();
        screen.and(raw)
    }
}
