use std::io::{self, stdout, Stdout, Write};

use anyhow::{bail, Context, Result};
use colored::*;
use crossterm::cursor::MoveTo;
use crossterm::event;
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use log::error;

use super::{keys, InputEvent, InputHandler};

/// Run a blocking terminal read without stalling other tasks on the runtime.
///
/// Must not be called from a current-thread tokio runtime.
pub(crate) fn read_blocking<T>(read: impl FnOnce() -> io::Result<T>) -> io::Result<T> {
    tokio::task::block_in_place(read)
}

/// Raw-mode terminal front end. Raw mode is switched on when the prompt is
/// created and restored when it is dropped.
pub struct TerminalPrompt {
    out: Stdout,
}

impl TerminalPrompt {
    pub fn new() -> Result<Self> {
        if !atty::is(atty::Stream::Stdin) || !atty::is(atty::Stream::Stdout) {
            bail!(
                "interactive mode needs a terminal; use `fxconv convert <AMOUNT> <FROM> <TO>` instead"
            );
        }

        terminal::enable_raw_mode().context("Failed to enable raw terminal mode")?;
        Ok(Self { out: stdout() })
    }

    fn styled(line: &str) -> String {
        if line.starts_with("Eroare:") {
            line.red().bold().to_string()
        } else if line.starts_with("> ") {
            line.green().bold().to_string()
        } else if line.starts_with("Rezultat:") {
            line.cyan().bold().to_string()
        } else {
            line.to_string()
        }
    }
}

impl InputHandler for TerminalPrompt {
    fn next_event(&mut self) -> Result<InputEvent> {
        loop {
            let raw = read_blocking(event::read).context("Failed to read terminal event")?;
            if let Some(input) = keys::map_event(raw) {
                return Ok(input);
            }
        }
    }

    fn display(&mut self, view: &str) -> Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        // Raw mode does not translate "\n" into a carriage return.
        for line in view.split('\n') {
            queue!(self.out, Print(Self::styled(line)), Print("\r\n"))?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }
}

impl Drop for TerminalPrompt {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            error!("Failed to restore terminal mode: {}", e);
        }
    }
}
