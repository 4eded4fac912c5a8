// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs loads the graph and
// dispatches to these handlers.

pub mod distances;
pub mod run;
