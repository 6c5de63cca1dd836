//! Submission form screen
//!
//! The model is framework-free and unit-testable; the view wires it to
//! iocraft state and async handlers.

pub mod model;
pub mod view;

pub use model::{FormAction, FormFocus, FormState, compute_form_view_model, reduce_form_state};
pub use view::FormScreen;
