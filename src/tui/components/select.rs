//! Inline selector for enum-like fields.
//!
//! Shows the current value between cycle arrows; the owning screen
//! interprets left/right keys while the field has focus.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Select component
#[derive(Default, Props)]
pub struct SelectProps<'a> {
    pub label: Option<&'a str>,
    /// Current value, formatted for display
    pub value: String,
    pub has_focus: bool,
    /// Semantic color for the value (status/priority coloring)
    pub value_color: Option<Color>,
}

/// Renders as `Label: ◀ value ▶`
#[component]
pub fn Select<'a>(props: &SelectProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let accent = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };

    element! {
        View(flex_direction: FlexDirection::Row, gap: 1) {
            #(props.label.map(|label| element! {
                Text(content: format!("{}:", label), color: accent)
            }))
            Text(content: "◀", color: accent)
            Text(content: props.value.clone(), color: props.value_color.unwrap_or(theme.text))
            Text(content: "▶", color: accent)
        }
    }
}
