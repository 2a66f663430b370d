//! Color theme for the dashboard.

use crate::formatting::CoverageBand;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    /// Accent for titles and the active tab (dashboard orange)
    pub primary: Color,
    /// Supported operations, high coverage
    pub success: Color,
    /// Unsupported operations, low coverage
    pub danger: Color,
    /// Inactive elements and hints
    pub muted: Color,
    pub text: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Rgb(255, 107, 53),
            success: Color::Green,
            danger: Color::Red,
            muted: Color::DarkGray,
            text: Color::White,
        }
    }

    pub fn warning(&self) -> Color {
        Color::Yellow
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn active_tab_style(&self) -> Style {
        self.title_style().add_modifier(Modifier::UNDERLINED)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Red-yellow-green by coverage band.
    pub fn coverage_style(&self, pct: f64) -> Style {
        let color = match CoverageBand::from_pct(pct) {
            CoverageBand::High => self.success,
            CoverageBand::Medium => self.warning(),
            CoverageBand::Low => self.danger,
        };
        Style::default().fg(color)
    }

    pub fn gauge_style(&self) -> Style {
        Style::default().fg(self.success).bg(self.danger)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
