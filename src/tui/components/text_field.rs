//! Labeled text input component
//!
//! Wraps iocraft's TextInput with a label and focus-aware border, in
//! single- or multi-line mode.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the TextField component
#[derive(Default, Props)]
pub struct TextFieldProps<'a> {
    /// Label rendered above the input
    pub label: Option<&'a str>,
    /// Text content state (mutated by TextInput)
    pub value: Option<State<String>>,
    /// Whether the field has focus
    pub has_focus: bool,
    /// Multi-line mode (for description/response fields)
    pub multiline: bool,
    /// Input height in rows (only meaningful for multiline)
    pub height: Option<u16>,
}

/// Labeled text input with a focus-aware border
#[component]
pub fn TextField<'a>(props: &TextFieldProps<'a>) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };
    let label_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };

    let label = props.label.unwrap_or_default().to_string();
    let input_height = props.height.unwrap_or(if props.multiline { 4 } else { 1 });
    let box_height = input_height + 2;
    let multiline = props.multiline;
    let has_focus = props.has_focus;

    let Some(mut value) = props.value else {
        return element! {
            View(width: 100pct) {
                Text(content: "No value state provided", color: theme.text_dimmed)
            }
        };
    };

    element! {
        View(flex_direction: FlexDirection::Column, width: 100pct) {
            #((!label.is_empty()).then(|| element! {
                Text(content: label.clone(), color: label_color)
            }))
            View(
                width: 100pct,
                height: box_height,
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
                padding_right: 1,
            ) {
                TextInput(
                    has_focus: has_focus,
                    value: value.to_string(),
                    on_change: move |new_value: String| {
                        value.set(new_value);
                    },
                    multiline: multiline,
                    cursor_color: Some(theme.highlight),
                    color: Some(theme.text),
                )
            }
        }
    }
}
