mod crossterm_backend;
pub mod input;

use std::io;
use std::ops::{Deref, DerefMut};

use crate::config::{ALIVE_GLYPH, DEAD_GLYPH};

pub use crossterm_backend::CrosstermBackend;

/// How a single cell is painted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellStyle {
    Alive,
    Dead,
    /// Freshly set alive by a click
    Seeded,
}

impl CellStyle {
    pub fn for_cell(alive: bool) -> Self {
        if alive {
            CellStyle::Alive
        } else {
            CellStyle::Dead
        }
    }

    pub fn glyph(self) -> char {
        match self {
            CellStyle::Alive | CellStyle::Seeded => ALIVE_GLYPH,
            CellStyle::Dead => DEAD_GLYPH,
        }
    }
}

/// Rendering side of the terminal, as seen by the session.
///
/// Initialization is the implementor's constructor; `teardown` undoes it.
pub trait Backend {
    /// Terminal size as `(width, height)` in cells
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Queue one cell; nothing is visible until `present`
    fn paint_cell(&mut self, col: u16, row: u16, style: CellStyle) -> io::Result<()>;

    fn present(&mut self) -> io::Result<()>;

    fn teardown(&mut self) -> io::Result<()>;
}

/// Owns an initialized backend and tears it down exactly once, when dropped.
pub struct TerminalGuard<B: Backend> {
    backend: B,
}

impl<B: Backend> TerminalGuard<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }
}

impl<B: Backend> Deref for TerminalGuard<B> {
    type Target = B;

    fn deref(&self) -> &B {
        &self.backend
    }
}

impl<B: Backend> DerefMut for TerminalGuard<B> {
    fn deref_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: Backend> Drop for TerminalGuard<B> {
    fn drop(&mut self) {
        log::debug!("Tearing down terminal");
        if let Err(e) = self.backend.teardown() {
            log::error!("Terminal teardown failed: {}", e);
        }
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// What a `MockBackend` was asked to do
    #[derive(Default, Debug)]
    pub struct Record {
        pub paints: Vec<(u16, u16, CellStyle)>,
        pub presents: usize,
        pub teardowns: usize,
    }

    /// In-memory backend; the record stays readable after the backend is dropped.
    pub struct MockBackend {
        pub width: u16,
        pub height: u16,
        pub record: Rc<RefCell<Record>>,
        /// Make `present` fail, to simulate a broken terminal
        pub fail_present: bool,
    }

    impl MockBackend {
        pub fn new(width: u16, height: u16) -> (Self, Rc<RefCell<Record>>) {
            let record = Rc::new(RefCell::new(Record::default()));
            let backend = Self {
                width,
                height,
                record: Rc::clone(&record),
                fail_present: false,
            };
            (backend, record)
        }
    }

    impl Backend for MockBackend {
        fn size(&self) -> io::Result<(u16, u16)> {
            Ok((self.width, self.height))
        }

        fn paint_cell(&mut self, col: u16, row: u16, style: CellStyle) -> io::Result<()> {
            self.record.borrow_mut().paints.push((col, row, style));
            Ok(())
        }

        fn present(&mut self) -> io::Result<()> {
            if self.fail_present {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"));
            }
            self.record.borrow_mut().presents += 1;
            Ok(())
        }

        fn teardown(&mut self) -> io::Result<()> {
            self.record.borrow_mut().teardowns += 1;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockBackend;
    use super::*;

    #[test]
    fn test_glyphs() {
        assert_eq!(CellStyle::for_cell(true), CellStyle::Alive);
        assert_eq!(CellStyle::for_cell(false), CellStyle::Dead);
        assert_eq!(CellStyle::Alive.glyph(), ALIVE_GLYPH);
        assert_eq!(CellStyle::Seeded.glyph(), ALIVE_GLYPH);
        assert_eq!(CellStyle::Dead.glyph(), DEAD_GLYPH);
    }

    #[test]
    fn test_guard_tears_down_once_on_drop() {
        let (backend, record) = MockBackend::new(3, 3);
        {
            let mut guard = TerminalGuard::new(backend);
            guard.paint_cell(0, 0, CellStyle::Alive).unwrap();
            guard.present().unwrap();
            assert_eq!(record.borrow().teardowns, 0);
        }
        assert_eq!(record.borrow().teardowns, 1);
        assert_eq!(record.borrow().presents, 1);
    }
}
