//! Dashboard screen model types for testable state management
//!
//! Separates state (DashboardState) from rendering, enabling unit testing
//! without the iocraft framework. Network work is queued as effects: the
//! reducer stays pure and the view drains the queue, dispatches the async
//! calls, and feeds the outcomes back in as actions carrying the sequence
//! token issued at dispatch.

use crate::dashboard::{Dashboard, category_options, tag_options};
use crate::tui::components::{Shortcut, Toast};
use crate::types::{Ticket, TicketStatus};

use super::search::{FilteredTicket, search_tickets};

/// Raw state that changes during user interaction
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Loaded tickets plus filter and optimistic-update bookkeeping
    pub dashboard: Dashboard,

    // Navigation
    /// Index of the selected row in the visible list
    pub selected_index: usize,
    /// Scroll offset for virtual scrolling
    pub scroll_offset: usize,

    // Search
    /// Current search query string
    pub search_query: String,
    /// Whether the search box is focused
    pub search_focused: bool,

    /// Whether a collection fetch is in flight
    pub loading: bool,
    /// Optional toast notification to display
    pub toast: Option<Toast>,

    effects: Vec<DashboardEffect>,
}

/// Async work queued by the reducer for the view to dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEffect {
    /// Fetch the full collection; the token tags the response
    Fetch { token: u64 },
    /// Issue the status patch behind an optimistic local change
    UpdateStatus {
        id: String,
        status: TicketStatus,
        token: u64,
    },
}

/// All possible actions on the dashboard screen
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,

    // Filters
    CycleCategoryFilter,
    CycleStatusFilter,
    CycleTagFilter,
    ResetFilters,

    // Search
    FocusSearch,
    UpdateSearch(String),
    ExitSearch,
    ClearSearchAndExit,

    /// Optimistically cycle the selected ticket's status and queue the patch
    CycleSelectedStatus { forward: bool },

    /// Start a collection fetch
    Refresh,
    FetchLoaded { token: u64, tickets: Vec<Ticket> },
    FetchFailed { token: u64, message: String },
    StatusConfirmed { id: String, token: u64 },
    StatusFailed { id: String, token: u64, message: String },

    DismissToast,
}

impl DashboardState {
    /// Drain the queued effects for dispatch
    pub fn take_effects(&mut self) -> Vec<DashboardEffect> {
        std::mem::take(&mut self.effects)
    }

    /// The filtered, searched list the screen displays
    pub fn visible(&self) -> Vec<FilteredTicket> {
        let filtered = self.dashboard.visible();
        search_tickets(&filtered, &self.search_query)
    }
}

fn cycle_status(current: TicketStatus, forward: bool) -> TicketStatus {
    let all = TicketStatus::all();
    let index = all.iter().position(|s| *s == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % all.len()
    } else {
        (index + all.len() - 1) % all.len()
    };
    all[next]
}

/// Advance an optional selector through none -> first option -> ... -> none
fn cycle_selector(options: &[String], current: &Option<String>) -> Option<String> {
    match current {
        None => options.first().cloned(),
        Some(value) => match options.iter().position(|o| o == value) {
            Some(index) if index + 1 < options.len() => Some(options[index + 1].clone()),
            _ => None,
        },
    }
}

fn cycle_status_selector(current: Option<TicketStatus>) -> Option<TicketStatus> {
    match current {
        None => Some(TicketStatus::New),
        Some(TicketStatus::New) => Some(TicketStatus::InProgress),
        Some(TicketStatus::InProgress) => Some(TicketStatus::Resolved),
        Some(TicketStatus::Resolved) => None,
    }
}

/// Keep the selection visible after a move
fn adjust_scroll(scroll_offset: usize, selected_index: usize, list_height: usize) -> usize {
    if list_height == 0 {
        return 0;
    }
    if selected_index < scroll_offset {
        selected_index
    } else if selected_index >= scroll_offset + list_height {
        selected_index + 1 - list_height
    } else {
        scroll_offset
    }
}

fn clamp_selection(state: &mut DashboardState, list_height: usize) {
    let count = state.visible().len();
    if count == 0 {
        state.selected_index = 0;
        state.scroll_offset = 0;
        return;
    }
    state.selected_index = state.selected_index.min(count - 1);
    state.scroll_offset = adjust_scroll(state.scroll_offset, state.selected_index, list_height);
}

/// Pure function: apply action to state (reducer pattern)
///
/// Network I/O is never performed here; it is queued as effects and its
/// outcomes re-enter through the Fetch*/Status* actions.
pub fn reduce_dashboard_state(
    mut state: DashboardState,
    action: DashboardAction,
    list_height: usize,
) -> DashboardState {
    match action {
        DashboardAction::MoveUp => {
            state.selected_index = state.selected_index.saturating_sub(1);
            state.scroll_offset =
                adjust_scroll(state.scroll_offset, state.selected_index, list_height);
        }
        DashboardAction::MoveDown => {
            let count = state.visible().len();
            if count > 0 {
                state.selected_index = (state.selected_index + 1).min(count - 1);
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.selected_index, list_height);
            }
        }
        DashboardAction::GoToTop => {
            state.selected_index = 0;
            state.scroll_offset = 0;
        }
        DashboardAction::GoToBottom => {
            let count = state.visible().len();
            if count > 0 {
                state.selected_index = count - 1;
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.selected_index, list_height);
            }
        }

        DashboardAction::CycleCategoryFilter => {
            let options = category_options(state.dashboard.tickets());
            state.dashboard.filters.category =
                cycle_selector(&options, &state.dashboard.filters.category);
            clamp_selection(&mut state, list_height);
        }
        DashboardAction::CycleStatusFilter => {
            state.dashboard.filters.status = cycle_status_selector(state.dashboard.filters.status);
            clamp_selection(&mut state, list_height);
        }
        DashboardAction::CycleTagFilter => {
            let options = tag_options(state.dashboard.tickets());
            state.dashboard.filters.tag = cycle_selector(&options, &state.dashboard.filters.tag);
            clamp_selection(&mut state, list_height);
        }
        DashboardAction::ResetFilters => {
            state.dashboard.filters.clear();
            clamp_selection(&mut state, list_height);
        }

        DashboardAction::FocusSearch => state.search_focused = true,
        DashboardAction::UpdateSearch(query) => {
            state.search_query = query;
            clamp_selection(&mut state, list_height);
        }
        DashboardAction::ExitSearch => state.search_focused = false,
        DashboardAction::ClearSearchAndExit => {
            state.search_query.clear();
            state.search_focused = false;
            clamp_selection(&mut state, list_height);
        }

        DashboardAction::CycleSelectedStatus { forward } => {
            let visible = state.visible();
            let Some(selected) = visible.get(state.selected_index) else {
                return state;
            };
            let id = selected.ticket.id.clone();
            let next = cycle_status(selected.ticket.status, forward);
            if let Some(token) = state.dashboard.begin_status_change(&id, next) {
                state.effects.push(DashboardEffect::UpdateStatus {
                    id,
                    status: next,
                    token,
                });
            }
        }

        DashboardAction::Refresh => {
            state.loading = true;
            let token = state.dashboard.begin_refresh();
            state.effects.push(DashboardEffect::Fetch { token });
        }
        DashboardAction::FetchLoaded { token, tickets } => {
            if state.dashboard.complete_refresh(token, tickets) {
                state.loading = false;
                clamp_selection(&mut state, list_height);
            }
        }
        DashboardAction::FetchFailed { token, message } => {
            if state.dashboard.fail_refresh(token) {
                state.loading = false;
                state.toast = Some(Toast::error(format!("Failed to load tickets: {}", message)));
            }
        }
        DashboardAction::StatusConfirmed { id, token } => {
            state.dashboard.confirm_status_change(&id, token);
            if !state.dashboard.is_pending(&id) {
                state.toast = Some(Toast::info(format!("Updated {}", id)));
            }
        }
        DashboardAction::StatusFailed { id, token, message } => {
            // Discard the optimistic state by re-fetching the whole
            // collection; the backend copy is authoritative.
            if state.dashboard.fail_status_change(&id, token) {
                state.toast = Some(Toast::warning(format!(
                    "Status update for {} failed ({}); reloading",
                    id, message
                )));
                state.loading = true;
                let refresh = state.dashboard.begin_refresh();
                state.effects.push(DashboardEffect::Fetch { token: refresh });
            }
        }

        DashboardAction::DismissToast => state.toast = None,
    }

    state
}

// ============================================================================
// View Model
// ============================================================================

/// One displayed row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRowViewModel {
    pub id: String,
    pub title: String,
    pub status: TicketStatus,
    pub category: String,
    pub tags: String,
    pub priority: String,
    /// An optimistic status change is awaiting confirmation
    pub pending: bool,
}

/// Detail section for the selected ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailViewModel {
    pub id: String,
    pub description: String,
    pub response: Option<String>,
}

/// Computed view model for rendering the dashboard screen
#[derive(Debug, Clone)]
pub struct DashboardViewModel {
    pub rows: Vec<TicketRowViewModel>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub visible_count: usize,
    pub total_count: usize,
    /// Active selector summary, e.g. "category: All · status: New · tag: All"
    pub filter_line: String,
    pub detail: Option<DetailViewModel>,
    pub search_query: String,
    pub search_focused: bool,
    pub loading: bool,
    pub toast: Option<Toast>,
    pub shortcuts: Vec<Shortcut>,
}

/// Pure function: compute view model from state
pub fn compute_dashboard_view_model(
    state: &DashboardState,
    list_height: usize,
) -> DashboardViewModel {
    let visible = state.visible();

    let rows: Vec<TicketRowViewModel> = visible
        .iter()
        .map(|f| TicketRowViewModel {
            id: f.ticket.id.clone(),
            title: f.ticket.title.clone(),
            status: f.ticket.status,
            category: f.ticket.category.clone(),
            tags: f.ticket.tags.join(", "),
            priority: f.ticket.priority.to_string(),
            pending: state.dashboard.is_pending(&f.ticket.id),
        })
        .collect();

    let detail = visible
        .get(state.selected_index)
        .map(|f| DetailViewModel {
            id: f.ticket.id.clone(),
            description: f.ticket.description.clone(),
            response: f.ticket.suggested_response.clone(),
        });

    let filters = &state.dashboard.filters;
    let filter_line = format!(
        "category: {} · status: {} · tag: {}",
        filters.category.as_deref().unwrap_or("All"),
        filters
            .status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "All".to_string()),
        filters.tag.as_deref().unwrap_or("All"),
    );

    let shortcuts = if state.search_focused {
        vec![
            Shortcut::new("Enter", "Apply search"),
            Shortcut::new("Esc", "Clear & exit"),
        ]
    } else {
        let mut shortcuts = vec![
            Shortcut::new("j/k", "Nav"),
            Shortcut::new("s/S", "Cycle status"),
            Shortcut::new("c", "Category filter"),
            Shortcut::new("f", "Status filter"),
            Shortcut::new("t", "Tag filter"),
            Shortcut::new("/", "Search"),
            Shortcut::new("r", "Refresh"),
        ];
        if !state.dashboard.filters.is_empty() {
            shortcuts.push(Shortcut::new("x", "Reset filters"));
        }
        shortcuts
    };

    DashboardViewModel {
        selected_index: state.selected_index,
        scroll_offset: state.scroll_offset,
        visible_count: rows.len().min(list_height.max(1)),
        total_count: state.dashboard.tickets().len(),
        rows,
        filter_line,
        detail,
        search_query: state.search_query.clone(),
        search_focused: state.search_focused,
        loading: state.loading,
        toast: state.toast.clone(),
        shortcuts,
    }
}
