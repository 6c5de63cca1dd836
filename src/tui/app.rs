//! View shell for the interactive session
//!
//! Hosts the submission form and the dashboard behind a tab bar; Ctrl+T
//! switches, Ctrl+Q quits. A screen keeps no state across switches: like
//! the original views, leaving a screen discards its in-progress state.

use iocraft::prelude::*;

use crate::tui::dashboard::DashboardScreen;
use crate::tui::form::FormScreen;
use crate::tui::theme::theme;

/// Active screen in the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Form,
    Dashboard,
}

impl Screen {
    pub fn toggle(self) -> Self {
        match self {
            Screen::Form => Screen::Dashboard,
            Screen::Dashboard => Screen::Form,
        }
    }
}

/// Props for the AppShell component
#[derive(Default, Props)]
pub struct AppShellProps {}

/// Top-level shell toggling between the form and the dashboard
#[component]
pub fn AppShell(_props: &AppShellProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let mut screen = hooks.use_state(|| Screen::Form);
    let mut should_exit = hooks.use_state(|| false);

    hooks.use_terminal_events(move |event| match event {
        TerminalEvent::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) if kind != KeyEventKind::Release => match code {
            KeyCode::Char('t') if modifiers.contains(KeyModifiers::CONTROL) => {
                screen.set(screen.get().toggle());
            }
            KeyCode::Char('q') if modifiers.contains(KeyModifiers::CONTROL) => {
                should_exit.set(true);
            }
            _ => {}
        },
        _ => {}
    });

    if should_exit.get() {
        system.exit();
    }

    let active = screen.get();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            // Tab bar
            View(
                width: 100pct,
                padding_left: 1,
                border_edges: Edges::Bottom,
                border_style: BorderStyle::Single,
                border_color: theme.border,
            ) {
                Text(content: "triage ", color: theme.id_color, weight: Weight::Bold)
                Text(
                    content: "[Submit Ticket] ",
                    color: if active == Screen::Form { theme.highlight } else { theme.text_dimmed },
                    weight: if active == Screen::Form { Weight::Bold } else { Weight::Normal },
                )
                Text(
                    content: "[Dashboard] ",
                    color: if active == Screen::Dashboard { theme.highlight } else { theme.text_dimmed },
                    weight: if active == Screen::Dashboard { Weight::Bold } else { Weight::Normal },
                )
                View(flex_grow: 1.0)
                Text(content: "C-t switch · C-q quit ", color: theme.text_dimmed)
            }

            // Active screen
            #(Some(match active {
                Screen::Form => element! { FormScreen }.into_any(),
                Screen::Dashboard => element! { DashboardScreen }.into_any(),
            }))
        }
    }
}
