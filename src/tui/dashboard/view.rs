//! Dashboard view component
//!
//! Renders the filtered ticket list with a detail section, and drives
//! refreshes and optimistic status updates through the reducer's effect
//! queue.

use iocraft::prelude::*;

use crate::api::{HttpApi, SupportApi};
use crate::config::Config;
use crate::tui::components::{Footer, render_toast};
use crate::tui::theme::theme;
use crate::types::{TicketPatch, TicketStatus};

use super::model::{
    DashboardAction, DashboardEffect, DashboardState, compute_dashboard_view_model,
    reduce_dashboard_state,
};

/// Props for the DashboardScreen component
#[derive(Default, Props)]
pub struct DashboardScreenProps {}

/// Ticket dashboard screen
#[component]
pub fn DashboardScreen(
    _props: &DashboardScreenProps,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'static>> {
    let (_width, height) = hooks.use_terminal_size();
    let theme = theme();

    let state: State<DashboardState> = hooks.use_state(DashboardState::default);
    let search_query = hooks.use_state(String::new);

    let list_height = height.saturating_sub(12) as usize;

    // Collection fetch; the completion re-enters the reducer with the
    // token issued at dispatch so stale responses are discarded.
    let fetch_handler: Handler<u64> = hooks.use_async_handler({
        move |token: u64| {
            let mut state = state;

            async move {
                let result = match Config::load() {
                    Ok(config) => HttpApi::from_config(&config).list_tickets().await,
                    Err(e) => Err(e),
                };

                let action = match result {
                    Ok(tickets) => DashboardAction::FetchLoaded { token, tickets },
                    Err(e) => DashboardAction::FetchFailed {
                        token,
                        message: e.to_string(),
                    },
                };
                let mut next = reduce_dashboard_state(state.read().clone(), action, 0);
                // Fetch completions never queue further work.
                let _ = next.take_effects();
                state.set(next);
            }
        }
    });

    // Status patch behind an optimistic local change. A failure queues a
    // reconciling fetch, dispatched here.
    let status_handler: Handler<(String, TicketStatus, u64)> = hooks.use_async_handler({
        let fetch_handler = fetch_handler.clone();

        move |(id, status, token): (String, TicketStatus, u64)| {
            let mut state = state;
            let fetch_handler = fetch_handler.clone();

            async move {
                let result = match Config::load() {
                    Ok(config) => {
                        HttpApi::from_config(&config)
                            .update_ticket(&id, &TicketPatch::status(status))
                            .await
                    }
                    Err(e) => Err(e),
                };

                let action = match result {
                    Ok(_) => DashboardAction::StatusConfirmed { id, token },
                    Err(e) => DashboardAction::StatusFailed {
                        id,
                        token,
                        message: e.to_string(),
                    },
                };
                let mut next = reduce_dashboard_state(state.read().clone(), action, 0);
                let effects = next.take_effects();
                state.set(next);
                for effect in effects {
                    if let DashboardEffect::Fetch { token } = effect {
                        fetch_handler.clone()(token);
                    }
                }
            }
        }
    });

    let fetch_for_events = fetch_handler.clone();
    let status_for_events = status_handler.clone();

    // Initial load on mount
    let mut fetch_started = hooks.use_state(|| false);
    if !fetch_started.get() {
        fetch_started.set(true);
        let mut next =
            reduce_dashboard_state(state.read().clone(), DashboardAction::Refresh, list_height);
        let effects = next.take_effects();
        let mut state = state;
        state.set(next);
        for effect in effects {
            if let DashboardEffect::Fetch { token } = effect {
                fetch_handler.clone()(token);
            }
        }
    }

    hooks.use_terminal_events({
        let search_query = search_query;

        move |event| match event {
            TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                let mut state = state;
                let mut search_query = search_query;
                let search_focused = state.read().search_focused;

                let mut dispatch = |action: DashboardAction| {
                    let mut next =
                        reduce_dashboard_state(state.read().clone(), action, list_height);
                    let effects = next.take_effects();
                    state.set(next);
                    for effect in effects {
                        match effect {
                            DashboardEffect::Fetch { token } => {
                                fetch_for_events.clone()(token);
                            }
                            DashboardEffect::UpdateStatus { id, status, token } => {
                                status_for_events.clone()((id, status, token));
                            }
                        }
                    }
                };

                if search_focused {
                    match code {
                        KeyCode::Enter => dispatch(DashboardAction::ExitSearch),
                        KeyCode::Esc => {
                            search_query.set(String::new());
                            dispatch(DashboardAction::ClearSearchAndExit);
                        }
                        _ => {
                            // The TextInput consumes the keystroke; mirror
                            // its value into the model afterwards.
                            dispatch(DashboardAction::UpdateSearch(search_query.to_string()));
                        }
                    }
                    return;
                }

                match code {
                    KeyCode::Char('j') | KeyCode::Down => dispatch(DashboardAction::MoveDown),
                    KeyCode::Char('k') | KeyCode::Up => dispatch(DashboardAction::MoveUp),
                    KeyCode::Char('g') => dispatch(DashboardAction::GoToTop),
                    KeyCode::Char('G') => dispatch(DashboardAction::GoToBottom),

                    KeyCode::Char('s') => {
                        dispatch(DashboardAction::CycleSelectedStatus { forward: true })
                    }
                    KeyCode::Char('S') => {
                        dispatch(DashboardAction::CycleSelectedStatus { forward: false })
                    }

                    KeyCode::Char('c') => dispatch(DashboardAction::CycleCategoryFilter),
                    KeyCode::Char('f') => dispatch(DashboardAction::CycleStatusFilter),
                    KeyCode::Char('t') => dispatch(DashboardAction::CycleTagFilter),
                    KeyCode::Char('x') => dispatch(DashboardAction::ResetFilters),

                    KeyCode::Char('/') => dispatch(DashboardAction::FocusSearch),
                    KeyCode::Char('r') => dispatch(DashboardAction::Refresh),
                    KeyCode::Esc => dispatch(DashboardAction::DismissToast),

                    _ => {}
                }
            }
            _ => {}
        }
    });

    let vm = compute_dashboard_view_model(&state.read(), list_height);

    let on_search_change = {
        let mut search_query = search_query;
        move |new_value: String| search_query.set(new_value)
    };

    let visible_rows: Vec<_> = vm
        .rows
        .iter()
        .enumerate()
        .skip(vm.scroll_offset)
        .take(list_height.max(1))
        .map(|(index, row)| (index, row.clone()))
        .collect();

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            // Header: filters and counts
            View(
                width: 100pct,
                padding_left: 1,
                padding_right: 1,
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
            ) {
                Text(content: vm.filter_line.clone(), color: theme.text_dimmed)
                Text(
                    content: format!("{}/{} tickets", vm.rows.len(), vm.total_count),
                    color: theme.text_dimmed,
                )
            }

            // Search bar
            View(width: 100pct, padding_left: 1, padding_right: 1, height: 1, flex_direction: FlexDirection::Row) {
                Text(
                    content: "/",
                    color: if vm.search_focused { theme.border_focused } else { theme.text_dimmed },
                )
                View(flex_grow: 1.0, margin_left: 1) {
                    TextInput(
                        value: search_query.to_string(),
                        has_focus: vm.search_focused,
                        on_change: on_search_change,
                        color: theme.text,
                    )
                }
            }

            // Column headers
            View(width: 100pct, padding_left: 1, padding_right: 1, flex_direction: FlexDirection::Row, column_gap: 1) {
                View(width: 10) { Text(content: "ID", color: theme.text_dimmed, weight: Weight::Bold) }
                View(width: 13) { Text(content: "Status", color: theme.text_dimmed, weight: Weight::Bold) }
                View(width: 8) { Text(content: "Priority", color: theme.text_dimmed, weight: Weight::Bold) }
                View(width: 14) { Text(content: "Category", color: theme.text_dimmed, weight: Weight::Bold) }
                View(width: 22) { Text(content: "Tags", color: theme.text_dimmed, weight: Weight::Bold) }
                View(flex_grow: 1.0) { Text(content: "Title", color: theme.text_dimmed, weight: Weight::Bold) }
            }

            // Ticket list
            View(
                width: 100pct,
                flex_grow: 1.0,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(if vm.loading && vm.rows.is_empty() {
                    Some(element! {
                        View(padding_left: 1) {
                            Text(content: "Loading tickets...", color: theme.text_dimmed)
                        }
                    })
                } else if vm.rows.is_empty() {
                    Some(element! {
                        View(padding_left: 1) {
                            Text(content: "No tickets match.", color: theme.text_dimmed)
                        }
                    })
                } else {
                    None
                })
                #(visible_rows.into_iter().map(|(index, row)| {
                    let selected = index == vm.selected_index;
                    let status_label = if row.pending {
                        format!("{} *", row.status)
                    } else {
                        row.status.to_string()
                    };
                    element! {
                        View(
                            width: 100pct,
                            padding_left: 1,
                            padding_right: 1,
                            flex_direction: FlexDirection::Row,
                            column_gap: 1,
                            background_color: if selected { theme.highlight } else { theme.background },
                        ) {
                            View(width: 10) {
                                Text(content: row.id.clone(), color: theme.id_color)
                            }
                            View(width: 13) {
                                Text(content: status_label, color: theme.status_color(row.status))
                            }
                            View(width: 8) {
                                Text(content: row.priority.clone(), color: theme.text)
                            }
                            View(width: 14) {
                                Text(content: row.category.clone(), color: theme.text)
                            }
                            View(width: 22) {
                                Text(content: row.tags.clone(), color: theme.text_dimmed)
                            }
                            View(flex_grow: 1.0) {
                                Text(content: row.title.clone(), color: theme.text)
                            }
                        }
                    }
                }))
            }

            // Detail section for the selected ticket
            #(vm.detail.as_ref().map(|detail| {
                let response = detail
                    .response
                    .clone()
                    .unwrap_or_else(|| "-".to_string());
                element! {
                    View(
                        width: 100pct,
                        flex_direction: FlexDirection::Column,
                        border_edges: Edges::Top,
                        border_style: BorderStyle::Single,
                        border_color: theme.border,
                        padding_left: 1,
                        padding_right: 1,
                    ) {
                        Text(content: detail.description.clone(), color: theme.text)
                        Text(content: format!("AI response: {}", response), color: theme.text_dimmed)
                    }
                }
            }))

            // Toast notification
            #(render_toast(&vm.toast))

            Footer(shortcuts: vm.shortcuts.clone())
        }
    }
}
