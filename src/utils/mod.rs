pub mod file_utils;

pub use file_utils::{ensure_directory, read_file_to_string, write_file};
