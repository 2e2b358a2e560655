//! Input-polling context.
//!
//! Blocks on raw terminal events, decodes the ones the session cares about
//! and forwards them over a channel. It never touches the grid or the screen.

use std::io;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// High-level input understood by the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    /// Re-randomize the whole grid
    Reset,
    /// Set the cell at terminal position `(row, col)` alive
    Click { row: isize, col: isize },
}

/// Map a raw terminal event; `None` for anything the session ignores
pub fn decode(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => decode_key(key),
        Event::Mouse(mouse) => decode_mouse(mouse),
        _ => None,
    }
}

fn decode_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(InputEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Char('r') => Some(InputEvent::Reset),
        _ => None,
    }
}

fn decode_mouse(mouse: &MouseEvent) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            Some(InputEvent::Click {
                row: mouse.row as isize,
                col: mouse.column as isize,
            })
        }
        _ => None,
    }
}

/// Start the polling thread.
///
/// The thread ends, dropping `events`, when reading the terminal fails or the
/// receiving side is gone. It is not joined: at quit it is left blocked in
/// `event::read` and goes away with the process.
pub fn spawn(events: Sender<InputEvent>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("input".into())
        .spawn(move || poll(events))
}

fn poll(events: Sender<InputEvent>) {
    loop {
        let raw = match event::read() {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("Reading terminal input failed: {}", e);
                return;
            }
        };

        if let Some(input) = decode(&raw) {
            if events.send(input).is_err() {
                log::debug!("Session gone, input thread exiting");
                return;
            }
        }
    }
}
