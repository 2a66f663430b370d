//! CLI module for ackcov
//!
//! - Argument parsing (`args`)
//! - Command handlers (`commands`)

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, OutputArgs, SelectionArgs, SupportArg, TypeArg};
pub use commands::{
    handle_control_plane_command, handle_dashboard_command, handle_overview_command,
    handle_service_command, handle_service_control_plane_command, Session, SessionOptions,
};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
