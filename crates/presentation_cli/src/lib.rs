//! Terminal presentation for Nimbus
//!
//! Command-line parsing, the terminal view adapter and the interactive
//! search loop. The `nimbus` binary wires these to the lookup service.

pub mod cli;
pub mod interactive;
pub mod view;

pub use cli::{Cli, Commands, log_filter_from_verbosity};
pub use interactive::{InputCommand, run_interactive};
pub use view::TerminalView;
