//! Command handler modules for the handrank CLI.
//!
//! Each command lives in its own file with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, so tests can capture them
//! - Errors propagated via the `CliError` enum

mod cfg;
mod compare;
mod eval;
mod rank;

pub use cfg::handle_cfg_command;
pub use compare::handle_compare_command;
pub use eval::handle_eval_command;
pub use rank::handle_rank_command;

use crate::config::OutputFormat;

/// Output options after merging configuration with command-line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub unicode: bool,
}
