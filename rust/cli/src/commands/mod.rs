//! Command handler modules for the hilo CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed as parameters
//! - Errors propagated via the `CliError` enum

pub mod advise;
pub mod cfg;
pub mod sim;

pub use advise::handle_advise_command;
pub use cfg::handle_cfg_command;
pub use sim::handle_sim_command;
