// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs parses arguments, loads the
// catalog and dispatches to these handlers.

pub mod distance;
pub mod hubs;
pub mod network;
pub mod path;
pub mod summary;
