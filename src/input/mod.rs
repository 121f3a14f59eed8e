mod keys;
mod prompt;

pub use keys::{map_event, map_key};
pub use prompt::TerminalPrompt;

use anyhow::Result;

/// Semantic input the interaction controller understands. Raw key codes are
/// translated into these by [`map_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    CharacterInput(char),
    Erase,
    MoveUp,
    MoveDown,
    Confirm,
    Quit,
}

/// Trait for the front end a session reads events from and renders into
pub trait InputHandler {
    /// Block until the next semantic event arrives
    fn next_event(&mut self) -> Result<InputEvent>;

    /// Replace whatever is on screen with `view`
    fn display(&mut self, view: &str) -> Result<()>;

    /// Clear the display
    fn clear(&mut self) -> Result<()>;
}

/// Default implementation using crossterm raw mode on the controlling terminal
pub fn create_default_input_handler() -> Result<impl InputHandler> {
    TerminalPrompt::new()
}
