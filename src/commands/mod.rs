mod apply;
mod config;
mod doctor;
mod ls;
mod status;
mod submit;
mod suggest;
mod view;

pub use apply::{ApplyOptions, cmd_apply};
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use doctor::cmd_doctor;
pub use ls::cmd_ls;
pub use status::cmd_status;
pub use submit::{SubmitOptions, cmd_submit};
pub use suggest::cmd_suggest;
pub use view::cmd_view;

use owo_colors::OwoColorize;

use crate::error::Result;
use crate::types::{TicketPriority, TicketStatus};

/// Command result that can print as human text or JSON
pub struct CommandOutput {
    json: serde_json::Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: serde_json::Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn print(self, output_json: bool) -> Result<()> {
        if output_json {
            println!("{}", serde_json::to_string_pretty(&self.json)?);
        } else if let Some(text) = self.text {
            println!("{}", text);
        }
        Ok(())
    }
}

/// Color a status label for terminal output
pub fn colored_status(status: TicketStatus) -> String {
    let label = format!("[{}]", status);
    match status {
        TicketStatus::New => label.yellow().to_string(),
        TicketStatus::InProgress => label.cyan().to_string(),
        TicketStatus::Resolved => label.green().to_string(),
    }
}

/// Color a priority label for terminal output
pub fn colored_priority(priority: TicketPriority) -> String {
    let label = format!("[{}]", priority);
    match priority {
        TicketPriority::High => label.red().to_string(),
        TicketPriority::Medium => label,
        TicketPriority::Low => label.dimmed().to_string(),
    }
}
