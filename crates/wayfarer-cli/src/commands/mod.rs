// Module exports for CLI subcommands
//
// Each module handles one subcommand. Handlers return the rendered output so
// main.rs only parses, dispatches and prints.

pub mod hints;
pub mod route;
