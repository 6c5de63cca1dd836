//! Non-interactive ticket submission (`triage submit`).
//!
//! Runs the same combined workflow as the interactive form: validate,
//! request an AI suggestion for the title/description, merge it with the
//! user's input, and create the ticket.

use serde_json::json;

use crate::api::HttpApi;
use crate::commands::{CommandOutput, colored_priority, colored_status};
use crate::config::Config;
use crate::error::Result;
use crate::submission::{self, TicketForm};
use crate::types::TicketPriority;

pub struct SubmitOptions {
    pub title: String,
    pub description: String,
    pub email: String,
    pub priority: Option<TicketPriority>,
    pub department: Option<String>,
}

pub async fn cmd_submit(options: SubmitOptions, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let api = HttpApi::from_config(&config);

    let form = TicketForm {
        title: options.title,
        description: options.description,
        email: options.email,
        priority: options.priority,
        department: options.department.unwrap_or_default(),
    };

    let submission = submission::submit(&api, &form).await?;
    let ticket = &submission.ticket;

    CommandOutput::new(json!({
        "id": ticket.id,
        "action": "created",
        "status": ticket.status.to_string(),
        "priority": ticket.priority.to_string(),
        "category": ticket.category,
        "tags": ticket.tags,
        "suggested_response": ticket.suggested_response,
    }))
    .with_text(format!(
        "Created {} {}{}\n  category: {}\n  tags: {}\n  response: {}",
        ticket.id,
        colored_priority(ticket.priority),
        colored_status(ticket.status),
        ticket.category,
        ticket.tags.join(", "),
        ticket.suggested_response.as_deref().unwrap_or("-"),
    ))
    .print(output_json)
}
