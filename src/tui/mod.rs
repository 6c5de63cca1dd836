//! TUI module for the interactive shell
//!
//! Two screens behind one shell:
//! - `form` - ticket submission with AI suggestion editing
//! - `dashboard` - ticket list with filters and optimistic status updates

pub mod app;
pub mod components;
pub mod dashboard;
pub mod form;
pub mod theme;

pub use app::{AppShell, Screen};
pub use theme::Theme;
