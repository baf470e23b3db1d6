pub mod search;

pub use search::{resolve_input, search_command, PARAMS_FILE};
