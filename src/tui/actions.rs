//! Pure mapping from key presses to dashboard actions.
//!
//! `determine_action` has no side effects; `DashboardApp::apply` executes
//! the chosen action.

use super::app::DashboardView;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    Quit,
    NextView,
    PrevView,
    MoveUp,
    MoveDown,
    JumpToTop,
    JumpToBottom,
    ToggleService,
    SelectAll,
    ClearAll,
    CycleTypeFilter,
    CycleSupportFilter,
    ToggleHelp,
}

/// State needed to decide which keys are live.
#[derive(Debug, Clone, Copy)]
pub struct ActionContext {
    pub view: DashboardView,
    pub has_entries: bool,
    pub help_visible: bool,
}

pub fn determine_action(key: KeyEvent, ctx: ActionContext) -> Option<DashboardAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(DashboardAction::Quit);
    }

    if ctx.help_visible {
        return match key.code {
            KeyCode::Char('q') => Some(DashboardAction::Quit),
            _ => Some(DashboardAction::ToggleHelp),
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(DashboardAction::Quit),
        KeyCode::Char('?') => Some(DashboardAction::ToggleHelp),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(DashboardAction::NextView),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(DashboardAction::PrevView),
        KeyCode::Up | KeyCode::Char('k') if ctx.has_entries => Some(DashboardAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') if ctx.has_entries => Some(DashboardAction::MoveDown),
        KeyCode::Home | KeyCode::Char('g') if ctx.has_entries => Some(DashboardAction::JumpToTop),
        KeyCode::End | KeyCode::Char('G') if ctx.has_entries => {
            Some(DashboardAction::JumpToBottom)
        }
        KeyCode::Char(' ') | KeyCode::Enter if ctx.view.uses_selection() && ctx.has_entries => {
            Some(DashboardAction::ToggleService)
        }
        KeyCode::Char('a') if ctx.view.uses_selection() => Some(DashboardAction::SelectAll),
        KeyCode::Char('c') if ctx.view.uses_selection() => Some(DashboardAction::ClearAll),
        KeyCode::Char('t') if ctx.view == DashboardView::ServiceAnalysis => {
            Some(DashboardAction::CycleTypeFilter)
        }
        KeyCode::Char('s') if ctx.view.is_per_service() => {
            Some(DashboardAction::CycleSupportFilter)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(view: DashboardView) -> ActionContext {
        ActionContext {
            view,
            has_entries: true,
            help_visible: false,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let c = ctx(DashboardView::Overall);
        assert_eq!(determine_action(key(KeyCode::Char('q')), c), Some(DashboardAction::Quit));
        assert_eq!(determine_action(key(KeyCode::Esc), c), Some(DashboardAction::Quit));
        assert_eq!(
            determine_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), c),
            Some(DashboardAction::Quit)
        );
    }

    #[test]
    fn test_selection_keys_only_in_aggregate_views() {
        let overall = ctx(DashboardView::Overall);
        let service = ctx(DashboardView::ServiceAnalysis);

        assert_eq!(
            determine_action(key(KeyCode::Char(' ')), overall),
            Some(DashboardAction::ToggleService)
        );
        assert_eq!(
            determine_action(key(KeyCode::Char('a')), overall),
            Some(DashboardAction::SelectAll)
        );
        assert_eq!(
            determine_action(key(KeyCode::Char('c')), overall),
            Some(DashboardAction::ClearAll)
        );
        assert_eq!(determine_action(key(KeyCode::Char(' ')), service), None);
        assert_eq!(determine_action(key(KeyCode::Char('a')), service), None);
    }

    #[test]
    fn test_filter_keys_only_in_per_service_views() {
        assert_eq!(
            determine_action(key(KeyCode::Char('t')), ctx(DashboardView::ServiceAnalysis)),
            Some(DashboardAction::CycleTypeFilter)
        );
        assert_eq!(
            determine_action(key(KeyCode::Char('t')), ctx(DashboardView::ServiceControlPlane)),
            None
        );
        assert_eq!(
            determine_action(key(KeyCode::Char('s')), ctx(DashboardView::ServiceControlPlane)),
            Some(DashboardAction::CycleSupportFilter)
        );
        assert_eq!(
            determine_action(key(KeyCode::Char('s')), ctx(DashboardView::Overall)),
            None
        );
    }

    #[test]
    fn test_navigation_requires_entries() {
        let empty = ActionContext {
            has_entries: false,
            ..ctx(DashboardView::Overall)
        };
        assert_eq!(determine_action(key(KeyCode::Down), empty), None);
        assert_eq!(
            determine_action(key(KeyCode::Down), ctx(DashboardView::Overall)),
            Some(DashboardAction::MoveDown)
        );
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let help = ActionContext {
            help_visible: true,
            ..ctx(DashboardView::Overall)
        };
        assert_eq!(
            determine_action(key(KeyCode::Char(' ')), help),
            Some(DashboardAction::ToggleHelp)
        );
        assert_eq!(
            determine_action(key(KeyCode::Char('q')), help),
            Some(DashboardAction::Quit)
        );
    }
}
