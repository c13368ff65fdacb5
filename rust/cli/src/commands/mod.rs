//! Command handler modules for the fivedraw CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and, for interactive commands,
//!   the input stream (`&mut dyn BufRead`) passed as parameters
//! - Errors propagated via the [`crate::error::CliError`] enum

mod cfg;
mod deal;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
