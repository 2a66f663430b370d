//! Drawing the dashboard.
//!
//! Every frame rebuilds the report for the active view from the loaded
//! records and the current selection; nothing is cached between draws.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Cell, Clear, Gauge, List, ListItem, ListState, Paragraph, Row, Table, Tabs},
    Frame,
};

use super::app::{DashboardApp, DashboardView};
use super::theme::Theme;
use crate::core::{OperationRow, OverallMetrics, ServiceDetail, ServiceSummary};
use crate::output::terminal::group_thousands;
use crate::report::{
    ControlPlaneReport, OverviewReport, SelectionInfo, ServiceControlPlaneReport, ServiceReport,
    EMPTY_SELECTION_MESSAGE,
};

const HELP_LINES: &[(&str, &str)] = &[
    ("Tab / →", "next view"),
    ("Shift-Tab / ←", "previous view"),
    ("↑ ↓ / k j", "move cursor"),
    ("g / G", "first / last service"),
    ("Space", "toggle service"),
    ("a / c", "select all / clear all"),
    ("t", "cycle operation type filter"),
    ("s", "cycle support filter"),
    ("?", "toggle help"),
    ("q / Esc", "quit"),
];

pub fn render_dashboard(frame: &mut Frame, app: &DashboardApp) {
    let theme = Theme::default_theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(8),    // Body
            Constraint::Length(1), // Hints
        ])
        .split(frame.area());

    render_tabs(frame, app, &theme, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(40)])
        .split(chunks[1]);

    render_selector(frame, app, &theme, body[0]);
    match app.view() {
        DashboardView::Overall => render_overall(frame, app, &theme, body[1]),
        DashboardView::ServiceAnalysis => render_service(frame, app, &theme, body[1]),
        DashboardView::ControlPlane => render_control_plane(frame, app, &theme, body[1]),
        DashboardView::ServiceControlPlane => {
            render_service_control_plane(frame, app, &theme, body[1])
        }
    }

    render_footer(frame, app, &theme, chunks[2]);

    if app.show_help() {
        render_help(frame, &theme);
    }
}

fn render_tabs(frame: &mut Frame, app: &DashboardApp, theme: &Theme, area: Rect) {
    let titles = DashboardView::all().iter().map(|view| view.title());
    let tabs = Tabs::new(titles)
        .block(
            Block::bordered().title(Span::styled(" AWS ACK API Coverage ", theme.title_style())),
        )
        .style(theme.hint_style())
        .highlight_style(theme.active_tab_style())
        .select(app.view().index());
    frame.render_widget(tabs, area);
}

fn render_selector(frame: &mut Frame, app: &DashboardApp, theme: &Theme, area: Rect) {
    let with_checkboxes = app.view().uses_selection();
    let items: Vec<ListItem> = app
        .entries()
        .into_iter()
        .map(|name| {
            if with_checkboxes {
                let mark = if app.selection().contains(name) { "[x]" } else { "[ ]" };
                ListItem::new(format!("{mark} {}", name.to_uppercase()))
            } else {
                ListItem::new(name.to_uppercase())
            }
        })
        .collect();

    let title = if with_checkboxes {
        format!(
            " Services {}/{} ",
            app.selection().selected_in(app.records()),
            app.records().len()
        )
    } else {
        " Select Service ".to_string()
    };

    let list = List::new(items)
        .block(Block::bordered().title(title))
        .highlight_style(theme.highlight_style());
    let mut state = ListState::default().with_selected(Some(app.cursor()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_overall(frame: &mut Frame, app: &DashboardApp, theme: &Theme, area: Rect) {
    let report = OverviewReport::build(app.records(), Some(app.selection()), app.top());
    let block = Block::bordered().title(" Overall API Coverage ");
    if render_selection_warning(frame, &report.selection, theme, block.clone(), area) {
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Banner + stats
            Constraint::Length(1), // Gauge
            Constraint::Length(1),
            Constraint::Min(3), // Table
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(summary_lines(&report.selection, &report.metrics, theme)),
        chunks[0],
    );
    render_gauge(
        frame,
        theme,
        "Mean coverage",
        report.metrics.overall_coverage,
        chunks[1],
    );
    frame.render_widget(
        service_table(&report.services, theme, false),
        chunks[3],
    );
}

fn render_control_plane(frame: &mut Frame, app: &DashboardApp, theme: &Theme, area: Rect) {
    let report = ControlPlaneReport::build(app.records(), Some(app.selection()), app.top());
    let block = Block::bordered().title(" Control Plane Overview ");
    if render_selection_warning(frame, &report.selection, theme, block.clone(), area) {
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(inner);

    let m = &report.metrics;
    let lines = vec![
        selection_line(&report.selection, theme),
        Line::from(format!(
            "Services with CP: {}   CP operations: {}   Supported CP: {}",
            report.services_with_control_plane,
            group_thousands(m.total_control_plane),
            group_thousands(m.total_supported_control_plane),
        )),
        Line::from(vec![
            Span::raw("CP coverage: "),
            Span::styled(
                format!("{:.1}%", m.control_plane_coverage),
                theme.coverage_style(m.control_plane_coverage),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), chunks[0]);
    render_gauge(
        frame,
        theme,
        "Mean CP coverage",
        m.control_plane_coverage,
        chunks[1],
    );
    frame.render_widget(service_table(&report.services, theme, true), chunks[3]);
}

fn render_service(frame: &mut Frame, app: &DashboardApp, theme: &Theme, area: Rect) {
    let filter = app.operation_filter();
    let report = app
        .current_service()
        .and_then(|key| ServiceReport::build(app.records(), key, &filter));
    let Some(report) = report else {
        render_message(frame, theme, " Per-Service Analysis ", "No services loaded.", area);
        return;
    };

    let type_label = app
        .type_filter()
        .map_or("All", |kind| kind.display_name());
    let title = format!(
        " {} | type: {} | support: {} ",
        report.detail.service,
        type_label,
        report.support_filter.display_name()
    );
    render_detail(frame, theme, &title, &report.detail, false, &report.operations, area);
}

fn render_service_control_plane(
    frame: &mut Frame,
    app: &DashboardApp,
    theme: &Theme,
    area: Rect,
) {
    let report = app.current_service().and_then(|key| {
        ServiceControlPlaneReport::build(app.records(), key, app.support_filter())
    });
    let Some(report) = report else {
        render_message(
            frame,
            theme,
            " Per-Service Control Plane ",
            "No services with control plane operations found.",
            area,
        );
        return;
    };

    let title = format!(
        " {} control plane | support: {} ",
        report.detail.service,
        report.support_filter.display_name()
    );
    render_detail(frame, theme, &title, &report.detail, true, &report.operations, area);
}

fn render_detail(
    frame: &mut Frame,
    theme: &Theme,
    title: &str,
    detail: &ServiceDetail,
    control_plane: bool,
    operations: &[OperationRow],
    area: Rect,
) {
    let block = Block::bordered().title(Span::styled(title.to_string(), theme.title_style()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(inner);

    let (lines, pct) = if control_plane {
        (
            vec![
                Line::from(format!(
                    "CP operations: {}   Supported: {}   Unsupported: {}",
                    detail.control_plane_operations,
                    detail.supported_control_plane_operations,
                    detail.unsupported_control_plane_operations,
                )),
                Line::from(format!(
                    "Data plane operations: {}",
                    detail.data_plane_operations
                )),
            ],
            detail.control_plane_coverage_pct,
        )
    } else {
        (
            vec![
                Line::from(format!(
                    "Total: {}   Supported: {}   Unsupported: {}",
                    detail.total_operations,
                    detail.supported_operations,
                    detail.unsupported_operations,
                )),
                Line::from(format!(
                    "Control plane: {} ({:.1}% covered)   Data plane: {}",
                    detail.control_plane_operations,
                    detail.control_plane_coverage_pct,
                    detail.data_plane_operations,
                )),
            ],
            detail.coverage_pct,
        )
    };

    frame.render_widget(Paragraph::new(lines), chunks[0]);
    render_gauge(frame, theme, "Coverage", pct, chunks[1]);

    if operations.is_empty() {
        frame.render_widget(
            Paragraph::new("No operations match the current filters.").style(theme.hint_style()),
            chunks[3],
        );
    } else {
        frame.render_widget(operations_table(operations, theme), chunks[3]);
    }
}

/// Draws the empty-selection warning; returns true when it did.
fn render_selection_warning(
    frame: &mut Frame,
    selection: &SelectionInfo,
    theme: &Theme,
    block: Block,
    area: Rect,
) -> bool {
    if !selection.is_empty() {
        return false;
    }
    frame.render_widget(
        Paragraph::new(EMPTY_SELECTION_MESSAGE)
            .style(Style::default().fg(theme.warning()))
            .block(block),
        area,
    );
    true
}

fn render_message(frame: &mut Frame, theme: &Theme, title: &str, text: &str, area: Rect) {
    frame.render_widget(
        Paragraph::new(text.to_string())
            .style(theme.hint_style())
            .block(Block::bordered().title(title.to_string())),
        area,
    );
}

fn render_gauge(frame: &mut Frame, theme: &Theme, label: &str, pct: f64, area: Rect) {
    let gauge = Gauge::default()
        .gauge_style(theme.gauge_style())
        .ratio((pct / 100.0).clamp(0.0, 1.0))
        .label(format!("{label}: {pct:.1}%"));
    frame.render_widget(gauge, area);
}

fn selection_line(selection: &SelectionInfo, theme: &Theme) -> Line<'static> {
    match selection.message() {
        Some(message) => Line::styled(message, Style::default().fg(theme.warning())),
        None => Line::styled("All services selected", theme.hint_style()),
    }
}

fn summary_lines(
    selection: &SelectionInfo,
    metrics: &OverallMetrics,
    theme: &Theme,
) -> Vec<Line<'static>> {
    vec![
        selection_line(selection, theme),
        Line::from(format!(
            "Services: {}   Operations: {}   Supported: {}",
            metrics.num_services,
            group_thousands(metrics.total_operations),
            group_thousands(metrics.total_supported),
        )),
        Line::from(vec![
            Span::raw("Mean coverage: "),
            Span::styled(
                format!("{:.1}%", metrics.overall_coverage),
                theme.coverage_style(metrics.overall_coverage),
            ),
            Span::raw("   CP: "),
            Span::styled(
                format!("{:.1}%", metrics.control_plane_coverage),
                theme.coverage_style(metrics.control_plane_coverage),
            ),
        ]),
    ]
}

fn service_table<'a>(rows: &'a [ServiceSummary], theme: &Theme, control_plane: bool) -> Table<'a> {
    let header = if control_plane {
        ["Service", "CP Ops", "Supported CP", "CP Coverage %"]
    } else {
        ["Service", "Total Ops", "Supported", "Coverage %"]
    };
    let body = rows.iter().map(|row| {
        let (total, supported, pct) = if control_plane {
            (
                row.control_plane_operations,
                row.supported_control_plane_operations,
                row.control_plane_coverage_pct,
            )
        } else {
            (row.total_operations, row.supported_operations, row.coverage_pct)
        };
        Row::new(vec![
            Cell::from(row.service.as_str()),
            Cell::from(group_thousands(total)),
            Cell::from(group_thousands(supported)),
            Cell::from(format!("{pct:.1}")).style(theme.coverage_style(pct)),
        ])
    });

    Table::new(
        body,
        [
            Constraint::Min(12),
            Constraint::Length(10),
            Constraint::Length(13),
            Constraint::Length(14),
        ],
    )
    .header(Row::new(header).style(theme.header_style()))
}

fn operations_table<'a>(rows: &'a [OperationRow], theme: &Theme) -> Table<'a> {
    let body = rows.iter().map(|row| {
        let supported_style = if row.supported {
            Style::default().fg(theme.success)
        } else {
            Style::default().fg(theme.danger)
        };
        Row::new(vec![
            Cell::from(row.name.as_str()),
            Cell::from(row.kind.display_name()),
            Cell::from(row.supported_label()).style(supported_style),
            Cell::from(row.file.as_str()),
            Cell::from(row.line.as_str()),
        ])
    });

    Table::new(
        body,
        [
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Min(16),
            Constraint::Length(6),
        ],
    )
    .header(
        Row::new(["Operation", "Type", "Supported", "File", "Line"]).style(theme.header_style()),
    )
}

fn render_footer(frame: &mut Frame, app: &DashboardApp, theme: &Theme, area: Rect) {
    let hints = match app.view() {
        DashboardView::Overall | DashboardView::ControlPlane => {
            "tab view  ↑↓ move  space toggle  a all  c clear  ? help  q quit"
        }
        DashboardView::ServiceAnalysis => "tab view  ↑↓ service  t type  s support  ? help  q quit",
        DashboardView::ServiceControlPlane => "tab view  ↑↓ service  s support  ? help  q quit",
    };
    frame.render_widget(Paragraph::new(hints).style(theme.hint_style()), area);
}

fn render_help(frame: &mut Frame, theme: &Theme) {
    let area = centered(frame.area(), 50, HELP_LINES.len() as u16 + 2);
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!("{keys:>15}"), theme.title_style()),
                Span::raw(format!("  {what}")),
            ])
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title(" Keys ")),
        area,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
