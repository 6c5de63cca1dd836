//! Ticket dashboard screen
//!
//! The model is framework-free and unit-testable; the view wires it to
//! iocraft state and async handlers.

pub mod model;
pub mod search;
pub mod view;

pub use model::{
    DashboardAction, DashboardEffect, DashboardState, compute_dashboard_view_model,
    reduce_dashboard_state,
};
pub use search::{FilteredTicket, search_tickets};
pub use view::DashboardScreen;
