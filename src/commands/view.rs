//! Interactive shell command (`triage view`)
//!
//! Launches the terminal UI with the submission form and the ticket
//! dashboard; Ctrl+T switches between the two.

use iocraft::prelude::*;

use crate::error::{Result, TriageError};
use crate::tui::AppShell;

/// Launch the interactive shell
pub async fn cmd_view() -> Result<()> {
    element!(AppShell)
        .fullscreen()
        .await
        .map_err(|e| TriageError::Other(format!("TUI error: {e}")))
}
