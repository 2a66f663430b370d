//! Handlers for the four report subcommands.

use super::session::{Session, SessionOptions};
use crate::cli::args::{OutputArgs, SelectionArgs, SupportArg, TypeArg};
use crate::core::{OperationFilter, OperationType, ServiceDetail, SupportFilter};
use crate::output::{
    metrics_line, output_json, output_report, output_terminal, OutputFormat, TerminalRenderer,
};
use crate::report::{ControlPlaneReport, OverviewReport, ServiceControlPlaneReport, ServiceReport};
use anyhow::Result;
use std::collections::BTreeSet;
use tracing::info;

pub fn handle_overview_command(
    options: SessionOptions,
    selection: SelectionArgs,
    output: OutputArgs,
) -> Result<()> {
    let session = Session::load(options)?;
    let subset = session.selection(selection.services);
    let report = OverviewReport::build(
        &session.records,
        subset.as_ref(),
        session.top(selection.top),
    );
    info!("{}", metrics_line(&report.metrics));

    output_report(
        &report,
        output.format,
        output.output,
        session.formatting,
        TerminalRenderer::render_overview,
    )
}

pub fn handle_control_plane_command(
    options: SessionOptions,
    selection: SelectionArgs,
    output: OutputArgs,
) -> Result<()> {
    let session = Session::load(options)?;
    let subset = session.selection(selection.services);
    let report = ControlPlaneReport::build(
        &session.records,
        subset.as_ref(),
        session.top(selection.top),
    );
    info!("{}", metrics_line(&report.metrics));

    output_report(
        &report,
        output.format,
        output.output,
        session.formatting,
        TerminalRenderer::render_control_plane,
    )
}

pub fn handle_service_command(
    options: SessionOptions,
    name: &str,
    types: Option<Vec<TypeArg>>,
    support: SupportArg,
    output: OutputArgs,
) -> Result<()> {
    let session = Session::load(options)?;
    let filter = OperationFilter {
        kinds: types.map(|kinds| {
            kinds
                .into_iter()
                .map(OperationType::from)
                .collect::<BTreeSet<_>>()
        }),
        support: SupportFilter::from(support),
    };
    let report = ServiceReport::build(&session.records, name, &filter)
        .ok_or_else(|| session.unknown_service(name))?;

    output_report(
        &report,
        output.format,
        output.output,
        session.formatting,
        TerminalRenderer::render_service,
    )
}

pub fn handle_service_control_plane_command(
    options: SessionOptions,
    name: &str,
    support: SupportArg,
    output: OutputArgs,
) -> Result<()> {
    let session = Session::load(options)?;
    if !session.records.contains_key(name) {
        return Err(session.unknown_service(name));
    }

    match ServiceControlPlaneReport::build(&session.records, name, SupportFilter::from(support)) {
        Some(report) => output_report(
            &report,
            output.format,
            output.output,
            session.formatting,
            TerminalRenderer::render_service_control_plane,
        ),
        None => match output.format {
            OutputFormat::Json => {
                let detail = ServiceDetail::lookup(&session.records, name)
                    .ok_or_else(|| session.unknown_service(name))?;
                let report = ServiceControlPlaneReport {
                    detail,
                    support_filter: SupportFilter::from(support),
                    operations: Vec::new(),
                };
                output_json(&report, output.output)
            }
            OutputFormat::Terminal => output_terminal(
                &format!(
                    "No control plane operations found for {}.\n",
                    name.to_uppercase()
                ),
                output.output,
            ),
        },
    }
}
