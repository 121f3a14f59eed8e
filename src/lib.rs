pub mod cli;
pub mod controller;
pub mod exchange;
pub mod input;
pub mod models;
pub mod session;
pub mod utils;

// Re-export commonly used items
pub use controller::{update, Control, InteractionController};
pub use exchange::{ConversionError, ConversionService};
pub use input::{create_default_input_handler, InputEvent, InputHandler};
pub use models::{CurrencyList, Session, Stage};
pub use session::ConverterSession;
