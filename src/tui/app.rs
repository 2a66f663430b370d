//! Dashboard session state.
//!
//! The records are loaded once and never change; the service selection
//! is the only state the user edits, and it is handed explicitly to the
//! report builders on every draw.

use super::actions::{determine_action, ActionContext, DashboardAction};
use crate::core::{
    control_plane_services, operation_kinds, CoverageData, OperationFilter, OperationType,
    ServiceSubset, SupportFilter,
};
use crossterm::event::KeyEvent;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    Overall,
    ServiceAnalysis,
    ControlPlane,
    ServiceControlPlane,
}

impl DashboardView {
    pub fn all() -> &'static [DashboardView] {
        &[
            DashboardView::Overall,
            DashboardView::ServiceAnalysis,
            DashboardView::ControlPlane,
            DashboardView::ServiceControlPlane,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Overall => "Overall Coverage",
            Self::ServiceAnalysis => "Per-Service Analysis",
            Self::ControlPlane => "Control Plane Overview",
            Self::ServiceControlPlane => "Per-Service Control Plane",
        }
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }

    /// Views aggregating over the selected services
    pub fn uses_selection(&self) -> bool {
        matches!(self, Self::Overall | Self::ControlPlane)
    }

    pub fn is_per_service(&self) -> bool {
        !self.uses_selection()
    }
}

pub struct DashboardApp {
    records: CoverageData,
    selection: ServiceSubset,
    view: DashboardView,
    cursor: usize,
    type_filter: Option<OperationType>,
    support_filter: SupportFilter,
    show_help: bool,
    top: usize,
}

impl DashboardApp {
    /// New session with `selection` initially selected (all services when `None`).
    pub fn new(records: CoverageData, selection: Option<ServiceSubset>, top: usize) -> Self {
        let selection = selection.unwrap_or_else(|| ServiceSubset::all(&records));
        Self {
            records,
            selection,
            view: DashboardView::Overall,
            cursor: 0,
            type_filter: None,
            support_filter: SupportFilter::All,
            show_help: false,
            top,
        }
    }

    pub fn records(&self) -> &CoverageData {
        &self.records
    }

    pub fn selection(&self) -> &ServiceSubset {
        &self.selection
    }

    pub fn view(&self) -> DashboardView {
        self.view
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub fn support_filter(&self) -> SupportFilter {
        self.support_filter
    }

    pub fn type_filter(&self) -> Option<OperationType> {
        self.type_filter
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Services listed in the left pane for the current view.
    pub fn entries(&self) -> Vec<&str> {
        match self.view {
            DashboardView::ServiceControlPlane => control_plane_services(&self.records),
            _ => self.records.keys().map(String::as_str).collect(),
        }
    }

    /// Service under the cursor, if any.
    pub fn current_service(&self) -> Option<&str> {
        self.entries().get(self.cursor).copied()
    }

    /// Operation filter for the per-service analysis view.
    pub fn operation_filter(&self) -> OperationFilter {
        OperationFilter {
            kinds: self.type_filter.map(|kind| BTreeSet::from([kind])),
            support: self.support_filter,
        }
    }

    /// Handle a key press; returns true when the dashboard should close.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctx = ActionContext {
            view: self.view,
            has_entries: !self.entries().is_empty(),
            help_visible: self.show_help,
        };

        match determine_action(key, ctx) {
            Some(action) => self.apply(action),
            None => false,
        }
    }

    /// Execute `action`; returns true for `Quit`.
    pub fn apply(&mut self, action: DashboardAction) -> bool {
        match action {
            DashboardAction::Quit => return true,
            DashboardAction::NextView => self.set_view(self.view.next()),
            DashboardAction::PrevView => self.set_view(self.view.prev()),
            DashboardAction::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            DashboardAction::MoveDown => {
                let last = self.entries().len().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(last);
            }
            DashboardAction::JumpToTop => self.cursor = 0,
            DashboardAction::JumpToBottom => {
                self.cursor = self.entries().len().saturating_sub(1);
            }
            DashboardAction::ToggleService => {
                if let Some(name) = self.current_service().map(str::to_string) {
                    self.selection.toggle(&name);
                }
            }
            DashboardAction::SelectAll => self.selection.select_all(&self.records),
            DashboardAction::ClearAll => self.selection.clear(),
            DashboardAction::CycleTypeFilter => {
                let kinds = self
                    .current_service()
                    .and_then(|key| self.records.get(key))
                    .map(operation_kinds)
                    .unwrap_or_default();
                self.type_filter = next_type_filter(self.type_filter, &kinds);
            }
            DashboardAction::CycleSupportFilter => {
                self.support_filter = self.support_filter.next();
            }
            DashboardAction::ToggleHelp => self.show_help = !self.show_help,
        }
        false
    }

    fn set_view(&mut self, view: DashboardView) {
        // The per-service control plane list is shorter; keep the same
        // service under the cursor when it is still listed.
        let current = self.current_service().map(str::to_string);
        self.view = view;
        self.cursor = current
            .and_then(|name| self.entries().iter().position(|e| *e == name))
            .unwrap_or(0);
    }
}

/// All types, then each type the service has, then all again.
fn next_type_filter(
    current: Option<OperationType>,
    kinds: &[OperationType],
) -> Option<OperationType> {
    match current {
        None => kinds.first().copied(),
        Some(kind) => kinds
            .iter()
            .position(|k| *k == kind)
            .and_then(|i| kinds.get(i + 1))
            .copied(),
    }
}
