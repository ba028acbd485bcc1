//! Terminal lifecycle helpers.
//!
//! Raw input mode is modeled as a scoped acquisition: [`RawModeGuard`]
//! releases it on every exit path from the interactive loop (normal quit,
//! interrupt, boundary exit), with `Drop` as the backstop for early returns.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use is_terminal::IsTerminal;

/// Keys the presenter reacts to. Everything else is ignored at the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Advance,
    Retreat,
    Quit,
}

/// Scoped raw-mode acquisition.
#[derive(Debug)]
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { active: true })
    }

    /// Release raw mode explicitly so the caller sees any failure; `Drop`
    /// only covers paths that never reach this.
    pub fn release(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            disable_raw_mode()?;
        }
        Ok(())
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
        }
    }
}

/// Block until a key from the navigation alphabet arrives.
pub fn read_nav_key() -> io::Result<NavKey> {
    loop {
        if let Event::Key(key) = event::read()? {
            if let Some(nav) = decode(key) {
                return Ok(nav);
            }
        }
    }
}

fn decode(key: KeyEvent) -> Option<NavKey> {
    // In raw mode the interrupt arrives as a key event, not a signal.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(NavKey::Quit);
    }

    match key.code {
        KeyCode::Char('q') => Some(NavKey::Quit),
        KeyCode::Char(' ') | KeyCode::Right => Some(NavKey::Advance),
        KeyCode::Left => Some(NavKey::Retreat),
        _ => None,
    }
}

/// Emit a clear-screen sequence and home the cursor.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Whether stdin can drive the interactive key loop.
pub fn stdin_is_interactive() -> bool {
    io::stdin().is_terminal()
}
