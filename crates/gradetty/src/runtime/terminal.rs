use std::io;

use crossterm::cursor::Show;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::runtime::TuiTerminal;

/// Owns the switched terminal modes for the lifetime of the UI.
///
/// [`TerminalGuard::enter`] is the only way to obtain a drawing terminal, so
/// every raw-mode session is paired with a restore. The restore lives in
/// `Drop`, which covers `?` early returns out of the event loop as well as
/// unwinding panics; without it a failed frame would leave the shell in raw
/// mode on the alternate screen.
pub(crate) struct TerminalGuard;

impl TerminalGuard {
    /// Switches the terminal into raw mode on the alternate screen and hands
    /// back the ratatui handle together with the restoring guard.
    ///
    /// Bracketed paste is enabled here as well, so clipboard content reaches
    /// the app as a single `Event::Paste` instead of a burst of key events.
    pub(crate) fn enter() -> io::Result<(Self, TuiTerminal)> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok((Self, terminal))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableBracketedPaste,
            LeaveAlternateScreen,
            Show
        );
    }
}
