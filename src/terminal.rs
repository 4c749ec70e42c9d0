//! Raw-mode terminal setup for the quiz screens.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type QuizTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the alternate screen; leaving it happens on drop, so an early `?`
/// in the event loop still hands the terminal back in a usable state.
pub struct TerminalGuard {
    terminal: QuizTerminal,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        undo_on_error(io::stdout().execute(EnterAlternateScreen), || {
            let _ = disable_raw_mode();
        })?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = undo_on_error(Terminal::new(backend), || {
            let _ = leave();
        })?;
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut QuizTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = leave() {
            log::warn!("failed to restore terminal: {err}");
        }
        let _ = self.terminal.show_cursor();
    }
}

/// Run `undo` before handing back an error from a half-finished setup step.
fn undo_on_error<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

fn leave() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = leave();
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_setup_step_is_undone() {
        let mut undone = false;

        let result: io::Result<()> =
            undo_on_error(Err(io::Error::other("no backend")), || undone = true);

        assert!(undone);
        assert_eq!(result.unwrap_err().to_string(), "no backend");
    }

    #[test]
    fn test_successful_setup_step_is_kept() {
        let mut undone = false;

        let result = undo_on_error(Ok(7), || undone = true);

        assert!(!undone);
        assert_eq!(result.unwrap(), 7);
    }
}
