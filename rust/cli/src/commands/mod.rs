//! Command handler modules for the Flip 7 CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed as parameters
//! - Errors propagated via the `CliError` enum

pub mod cfg;
pub mod risk;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use risk::handle_risk_command;
pub use sim::{handle_sim_command, SimArgs};
