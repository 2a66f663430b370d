//! Command handlers for CLI subcommands
//!
//! Every handler loads a [`Session`] first, then builds the report for its
//! view and hands it to the output layer.

mod dashboard;
mod reports;
mod session;

pub use dashboard::handle_dashboard_command;
pub use reports::{
    handle_control_plane_command, handle_overview_command, handle_service_command,
    handle_service_control_plane_command,
};
pub use session::{Session, SessionOptions};
