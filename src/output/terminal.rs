//! Terminal rendering of dashboard reports.
//!
//! Metric "cards" and horizontal bars stand in for the web dashboard's
//! metric widgets and charts; service and operation lists use
//! `comfy-table`.

use crate::core::{percentage, OperationRow, OverallMetrics, ServiceDetail, ServiceSummary};
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter};
use crate::report::{
    ControlPlaneReport, OverviewReport, SelectionInfo, ServiceControlPlaneReport, ServiceReport,
    EMPTY_SELECTION_MESSAGE,
};
use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use std::fmt::Write;

const BAR_WIDTH: usize = 30;

/// Renders reports to strings for the terminal.
pub struct TerminalRenderer {
    formatter: Box<dyn OutputFormatter>,
    ascii: bool,
}

impl TerminalRenderer {
    pub fn new(config: FormattingConfig) -> Self {
        Self {
            formatter: formatter_for(config),
            ascii: !config.emoji.should_use_emoji(),
        }
    }

    pub fn render_overview(&self, report: &OverviewReport) -> String {
        let mut out = self.title("🚀", "AWS ACK API Coverage Dashboard");
        out.push_str(&self.section("📈", "[COVERAGE]", "Overall API Coverage"));

        if let Some(early) = self.selection_banner(&report.selection) {
            out.push_str(&early);
            if report.selection.is_empty() {
                return out;
            }
        }

        let m = &report.metrics;
        out.push_str(&self.cards(&[
            ("Total Services", m.num_services.to_string()),
            ("Total Operations", group_thousands(m.total_operations)),
            ("Supported Operations", group_thousands(m.total_supported)),
            (
                "Mean Coverage",
                format!(
                    "{:.1}% | CP: {:.1}%",
                    m.overall_coverage, m.control_plane_coverage
                ),
            ),
        ]));
        out.push_str(&self.split_bar(
            "Overall API Coverage",
            m.total_supported,
            m.total_unsupported(),
        ));

        out.push_str(&self.subheading(&format!(
            "Top {} Services by Coverage",
            report.top_services.len()
        )));
        out.push_str(&self.bars(
            report
                .top_services
                .iter()
                .map(|row| (row.service.as_str(), row.coverage_pct)),
        ));

        out.push_str(&self.section("📋", "[TABLE]", "Services Overview"));
        out.push_str(&self.service_table(&report.services));
        out
    }

    pub fn render_control_plane(&self, report: &ControlPlaneReport) -> String {
        let mut out = self.title("⚙️ ", "Control Plane Overview");

        if let Some(early) = self.selection_banner(&report.selection) {
            out.push_str(&early);
            if report.selection.is_empty() {
                return out;
            }
        }

        if report.services.is_empty() {
            out.push_str(&self.formatter.info(
                "No services with control plane operations found in the selected services.\n",
            ));
            return out;
        }

        let m = &report.metrics;
        out.push_str(&self.cards(&[
            (
                "Services with Control Plane",
                report.services_with_control_plane.to_string(),
            ),
            ("Total Control Plane Ops", group_thousands(m.total_control_plane)),
            (
                "Supported Control Plane",
                format!(
                    "{} ({:.1}%)",
                    group_thousands(m.total_supported_control_plane),
                    m.control_plane_coverage
                ),
            ),
            ("Mean Coverage", format!("{:.1}%", m.control_plane_coverage)),
        ]));
        out.push_str(&self.split_bar(
            "Control Plane Coverage",
            m.total_supported_control_plane,
            m.total_unsupported_control_plane(),
        ));

        out.push_str(&self.subheading(&format!(
            "Top {} Services by Control Plane Coverage",
            report.top_services.len()
        )));
        out.push_str(&self.bars(
            report
                .top_services
                .iter()
                .map(|row| (row.service.as_str(), row.control_plane_coverage_pct)),
        ));

        out.push_str(&self.section("📋", "[TABLE]", "Control Plane Services Overview"));
        out.push_str(&self.control_plane_table(&report.services));
        out
    }

    pub fn render_service(&self, report: &ServiceReport) -> String {
        let d = &report.detail;
        let mut out = self.title("🔍", &format!("Per-Service Analysis: {}", d.service));

        out.push_str(&self.cards(&[
            ("Service", d.service.clone()),
            ("Total Operations", d.total_operations.to_string()),
            ("Supported", d.supported_operations.to_string()),
            ("Coverage", format!("{:.1}%", d.coverage_pct)),
        ]));
        out.push_str(&self.operation_type_split(d));
        out.push_str(&self.split_bar(
            "Support Status",
            d.supported_operations,
            d.unsupported_operations,
        ));

        out.push_str(&self.section("📝", "[OPS]", "Operations Details"));
        out.push_str(&self.filter_line(report.support_filter.display_name()));
        out.push_str(&self.operations_table(&report.operations, true));
        out
    }

    pub fn render_service_control_plane(&self, report: &ServiceControlPlaneReport) -> String {
        let d = &report.detail;
        let mut out = self.title(
            "🔧",
            &format!("Per-Service Control Plane Analysis: {}", d.service),
        );

        out.push_str(&self.cards(&[
            ("Service", d.service.clone()),
            ("Control Plane Ops", d.control_plane_operations.to_string()),
            (
                "Supported CP Ops",
                d.supported_control_plane_operations.to_string(),
            ),
            ("CP Coverage", format!("{:.1}%", d.control_plane_coverage_pct)),
        ]));
        out.push_str(&self.split_bar(
            "Control Plane Support",
            d.supported_control_plane_operations,
            d.unsupported_control_plane_operations,
        ));
        out.push_str(&self.operation_type_split(d));

        out.push_str(&self.section("📝", "[OPS]", "Control Plane Operations Details"));
        if report.operations.is_empty() {
            out.push_str(
                &self
                    .formatter
                    .info("No control plane operations found for this service.\n"),
            );
            return out;
        }
        out.push_str(&self.filter_line(report.support_filter.display_name()));
        out.push_str(&self.operations_table(&report.operations, false));
        out
    }

    fn title(&self, emoji: &str, text: &str) -> String {
        format!(
            "{}{}\n\n",
            self.formatter.emoji(&format!("{emoji} "), ""),
            self.formatter.header(text)
        )
    }

    fn section(&self, emoji: &str, fallback: &str, text: &str) -> String {
        format!(
            "\n{} {}\n",
            self.formatter.emoji(emoji, fallback),
            self.formatter.bold(text)
        )
    }

    fn subheading(&self, text: &str) -> String {
        format!("\n{}\n", self.formatter.bold(text))
    }

    fn filter_line(&self, support: &str) -> String {
        format!("{}\n", self.formatter.dim(&format!("Supported: {support}")))
    }

    fn selection_banner(&self, selection: &SelectionInfo) -> Option<String> {
        if selection.is_empty() {
            return Some(format!(
                "{}\n",
                self.formatter.warning(EMPTY_SELECTION_MESSAGE)
            ));
        }
        selection.message().map(|msg| {
            format!(
                "{} {}\n\n",
                self.formatter.emoji("📊", "[INFO]"),
                self.formatter.info(&msg)
            )
        })
    }

    fn cards(&self, cards: &[(&str, String)]) -> String {
        let mut table = self.table();
        table.set_header(cards.iter().map(|(label, _)| *label).collect::<Vec<_>>());
        table.add_row(cards.iter().map(|(_, value)| value.as_str()).collect::<Vec<_>>());
        format!("{table}\n")
    }

    fn split_bar(&self, label: &str, supported: u64, unsupported: u64) -> String {
        let total = supported + unsupported;
        let pct = percentage(supported, total);
        let filled = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
        let (full, empty) = if self.ascii { ("#", ".") } else { ("█", "░") };

        format!(
            "\n{}\n  {}{}  Supported {} ({:.1}%) | Not Supported {} ({:.1}%)\n",
            self.formatter.bold(label),
            self.formatter.success(&full.repeat(filled)),
            self.formatter.error(&empty.repeat(BAR_WIDTH - filled.min(BAR_WIDTH))),
            group_thousands(supported),
            pct,
            group_thousands(unsupported),
            percentage(unsupported, total),
        )
    }

    fn operation_type_split(&self, detail: &ServiceDetail) -> String {
        let total = detail.total_operations;
        format!(
            "\n{}\n  Control Plane {} ({:.1}%) | Data Plane {} ({:.1}%)\n",
            self.formatter.bold("Operation Types"),
            detail.control_plane_operations,
            percentage(detail.control_plane_operations, total),
            detail.data_plane_operations,
            percentage(detail.data_plane_operations, total),
        )
    }

    fn bars<'a>(&self, rows: impl Iterator<Item = (&'a str, f64)>) -> String {
        let rows: Vec<_> = rows.collect();
        if rows.is_empty() {
            return format!(
                "{}\n",
                self.formatter.info("No services selected for chart display.")
            );
        }

        let name_width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        let block = if self.ascii { "#" } else { "█" };
        let mut out = String::new();
        for (name, pct) in rows {
            let filled = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
            let _ = writeln!(
                out,
                "  {:<width$}  {} {}",
                name,
                block.repeat(filled.min(BAR_WIDTH)),
                self.formatter.coverage(pct),
                width = name_width
            );
        }
        out
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(if self.ascii {
                presets::ASCII_FULL
            } else {
                presets::UTF8_FULL
            })
            .set_content_arrangement(ContentArrangement::Dynamic);
        // Plain output is for files and pipes; never wrap to the terminal width
        if self.ascii {
            table.force_no_tty();
        }
        table
    }

    fn service_table(&self, rows: &[ServiceSummary]) -> String {
        if rows.is_empty() {
            return format!(
                "{}\n",
                self.formatter.info("No services selected for table display.")
            );
        }

        let mut table = self.table();
        table.set_header(vec![
            "Service",
            "Total Operations",
            "Supported Operations",
            "Coverage %",
        ]);
        for row in rows {
            table.add_row(vec![
                row.service.clone(),
                row.total_operations.to_string(),
                row.supported_operations.to_string(),
                format!("{:.1}", row.coverage_pct),
            ]);
        }
        align_numeric_columns(&mut table, 1..4);
        format!("{table}\n")
    }

    fn control_plane_table(&self, rows: &[ServiceSummary]) -> String {
        let mut table = self.table();
        table.set_header(vec![
            "Service",
            "Control Plane Operations",
            "Supported Control Plane",
            "Control Plane Coverage %",
        ]);
        for row in rows {
            table.add_row(vec![
                row.service.clone(),
                row.control_plane_operations.to_string(),
                row.supported_control_plane_operations.to_string(),
                format!("{:.1}", row.control_plane_coverage_pct),
            ]);
        }
        align_numeric_columns(&mut table, 1..4);
        format!("{table}\n")
    }

    fn operations_table(&self, rows: &[OperationRow], with_type: bool) -> String {
        if rows.is_empty() {
            return format!(
                "{}\n",
                self.formatter.info("No operations match the current filters.")
            );
        }

        let mut table = self.table();
        let mut header = vec!["Operation"];
        if with_type {
            header.push("Type");
        }
        header.extend(["Supported", "File", "Line"]);
        table.set_header(header);

        for row in rows {
            let mut cells = vec![row.name.clone()];
            if with_type {
                cells.push(row.kind.display_name().to_string());
            }
            cells.extend([
                row.supported_label().to_string(),
                row.file.clone(),
                row.line.clone(),
            ]);
            table.add_row(cells);
        }
        format!("{table}\n")
    }
}

fn align_numeric_columns(table: &mut Table, columns: std::ops::Range<usize>) {
    for index in columns {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}

/// `1234567` as `1,234,567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Short one-line summary of `metrics`, used in log output.
pub fn metrics_line(metrics: &OverallMetrics) -> String {
    format!(
        "{} services, {} of {} operations supported, mean coverage {:.1}% (CP {:.1}%)",
        metrics.num_services,
        metrics.total_supported,
        metrics.total_operations,
        metrics.overall_coverage,
        metrics.control_plane_coverage
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CoverageData, CoverageRecord, ServiceSubset};

    fn renderer() -> TerminalRenderer {
        TerminalRenderer::new(FormattingConfig::plain())
    }

    fn records() -> CoverageData {
        let mut data = CoverageData::new();
        data.insert("a".into(), CoverageRecord::from_counts(10, 5, 4, 2));
        data.insert("b".into(), CoverageRecord::from_counts(0, 0, 0, 0));
        data
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_overview_contains_cards_and_table() {
        let report = OverviewReport::build(&records(), None, 10);
        let out = renderer().render_overview(&report);

        assert!(out.contains("Overall API Coverage"));
        assert!(out.contains("50.0% | CP: 50.0%"));
        assert!(out.contains("Services Overview"));
        assert!(out.contains("| A "));
        assert!(!out.contains("Showing data for"));
    }

    #[test]
    fn test_overview_with_empty_selection_warns() {
        let none = ServiceSubset::empty();
        let report = OverviewReport::build(&records(), Some(&none), 10);
        let out = renderer().render_overview(&report);

        assert!(out.contains(EMPTY_SELECTION_MESSAGE));
        assert!(!out.contains("Services Overview"));
    }

    #[test]
    fn test_control_plane_without_control_plane_services() {
        let mut data = CoverageData::new();
        data.insert("x".into(), CoverageRecord::from_counts(3, 1, 0, 0));
        let report = ControlPlaneReport::build(&data, None, 10);
        let out = renderer().render_control_plane(&report);

        assert!(out.contains("No services with control plane operations"));
    }

    #[test]
    fn test_metrics_line() {
        let report = OverviewReport::build(&records(), None, 10);
        assert_eq!(
            metrics_line(&report.metrics),
            "2 services, 5 of 10 operations supported, mean coverage 50.0% (CP 50.0%)"
        );
    }
}
