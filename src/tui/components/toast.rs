//! Transient status messages for the form and dashboard screens.

use iocraft::prelude::*;

/// A dismissable notification line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
}

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
    Success,
}

impl ToastLevel {
    fn color(self) -> Color {
        match self {
            ToastLevel::Info => Color::Cyan,
            ToastLevel::Warning => Color::Yellow,
            ToastLevel::Error => Color::Red,
            ToastLevel::Success => Color::Green,
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            ToastLevel::Info => "i",
            ToastLevel::Warning => "!",
            ToastLevel::Error => "✗",
            ToastLevel::Success => "✓",
        }
    }
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self { message, level }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Success)
    }
}

/// Render a toast as a bordered line above the footer, if one is set
pub fn render_toast(toast: &Option<Toast>) -> Option<AnyElement<'static>> {
    toast.as_ref().map(|t| {
        let color = t.level.color();
        element! {
            View(
                width: 100pct,
                padding_left: 1,
                padding_right: 1,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: color,
            ) {
                Text(
                    content: format!("{} {}", t.level.glyph(), t.message),
                    color: color,
                )
            }
        }
        .into_any()
    })
}
