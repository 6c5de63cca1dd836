//! Theme system for TUI colors and styles
//!
//! Defines color constants consistent with the CLI output (commands/mod.rs).

use iocraft::prelude::Color;

use crate::types::{TicketPriority, TicketStatus};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors (consistent with CLI coloring)
    pub status_new: Color,
    pub status_in_progress: Color,
    pub status_resolved: Color,

    // Priority colors
    pub priority_high: Color,
    pub priority_low: Color,
    pub priority_default: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub error: Color,
    pub id_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_new: Color::Yellow,
            status_in_progress: Color::Cyan,
            status_resolved: Color::Green,

            priority_high: Color::Red,
            priority_low: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            priority_default: Color::White,

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            error: Color::Red,
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    /// Get the color for a ticket status
    pub fn status_color(&self, status: TicketStatus) -> Color {
        match status {
            TicketStatus::New => self.status_new,
            TicketStatus::InProgress => self.status_in_progress,
            TicketStatus::Resolved => self.status_resolved,
        }
    }

    /// Get the color for a ticket priority
    pub fn priority_color(&self, priority: TicketPriority) -> Color {
        match priority {
            TicketPriority::High => self.priority_high,
            TicketPriority::Low => self.priority_low,
            TicketPriority::Medium => self.priority_default,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
