//! Handler for the interactive `dashboard` subcommand.

use super::session::{Session, SessionOptions};
use crate::tui::DashboardExplorer;
use anyhow::{Context, Result};

pub fn handle_dashboard_command(
    options: SessionOptions,
    services: Option<Vec<String>>,
    top: Option<usize>,
) -> Result<()> {
    let session = Session::load(options)?;
    let selection = session.selection(services);
    let top = session.top(top);

    let mut explorer = DashboardExplorer::new(session.records, selection, top)
        .context("Failed to initialize terminal")?;
    explorer.run().context("Dashboard terminated with an I/O error")
}
