//! Shortcuts bar shown at the bottom of every screen.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// A key binding and the action it triggers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub key: String,
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
}

/// Renders the active key bindings as `key action` pairs
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            column_gap: 2,
            padding_left: 1,
            padding_right: 1,
            border_edges: Edges::Top,
            border_style: BorderStyle::Single,
            border_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: shortcut.key.clone(),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", shortcut.action),
                            color: theme.text_dimmed,
                        )
                    }
                }
            }))
        }
    }
}
