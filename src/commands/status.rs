//! Update a ticket's status (`triage status`).

use serde_json::json;

use crate::api::{HttpApi, SupportApi};
use crate::commands::{CommandOutput, colored_status};
use crate::config::Config;
use crate::error::Result;
use crate::types::{TicketPatch, TicketStatus};

pub async fn cmd_status(id: &str, status: TicketStatus, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let api = HttpApi::from_config(&config);

    let ticket = api
        .update_ticket(id, &TicketPatch::status(status))
        .await?;

    CommandOutput::new(json!({
        "id": ticket.id,
        "action": "status_changed",
        "new_status": ticket.status.to_string(),
    }))
    .with_text(format!(
        "Updated {} -> {}",
        ticket.id,
        colored_status(ticket.status)
    ))
    .print(output_json)
}
