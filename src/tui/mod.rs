//! Interactive coverage dashboard.
//!
//! A `ratatui` front end over the same reports the `overview`,
//! `control-plane`, `service` and `service-control-plane` commands print.
//! The left pane is the service selector; the right pane shows the
//! active view for the current selection.
//!
//! # Usage
//!
//! ```rust,no_run
//! use ackcov::core::CoverageData;
//! use ackcov::tui::DashboardExplorer;
//!
//! let records = CoverageData::new();
//! let mut explorer = DashboardExplorer::new(records, None, 10)?;
//! explorer.run()?;
//! // Terminal is restored on drop
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod actions;
pub mod app;
pub mod render;
pub mod theme;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::core::{CoverageData, ServiceSubset};
use crate::observability::set_tui_active;
pub use app::{DashboardApp, DashboardView};
use render::render_dashboard;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Owns the terminal for the lifetime of the dashboard session
pub struct DashboardExplorer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: DashboardApp,
}

impl DashboardExplorer {
    /// Enter raw mode and the alternate screen.
    pub fn new(
        records: CoverageData,
        selection: Option<ServiceSubset>,
        top: usize,
    ) -> io::Result<Self> {
        enable_raw_mode()?;
        set_tui_active(true);
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app: DashboardApp::new(records, selection, top),
        })
    }

    /// Draw and handle input until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.terminal.draw(|f| render_dashboard(f, &self.app))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && self.app.handle_key(key) {
                    break;
                }
            }
        }
        self.cleanup()
    }

    pub fn app(&self) -> &DashboardApp {
        &self.app
    }

    /// Restore the terminal
    pub fn cleanup(&mut self) -> io::Result<()> {
        set_tui_active(false);
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for DashboardExplorer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
