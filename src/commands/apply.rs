//! Re-apply edited suggestion fields to an existing ticket
//! (`triage apply`).
//!
//! Issues a partial update; only the provided fields change. Unknown ids
//! are signaled by the backend, not validated here.

use serde_json::json;

use crate::api::{HttpApi, SupportApi};
use crate::commands::{CommandOutput, colored_priority, colored_status};
use crate::config::Config;
use crate::error::{Result, TriageError};
use crate::types::{TicketPatch, TicketPriority, parse_tags};

pub struct ApplyOptions {
    pub id: String,
    pub category: Option<String>,
    /// Comma-separated tag list
    pub tags: Option<String>,
    pub priority: Option<TicketPriority>,
    pub response: Option<String>,
}

pub async fn cmd_apply(options: ApplyOptions, output_json: bool) -> Result<()> {
    let patch = TicketPatch {
        status: None,
        priority: options.priority,
        category: options.category,
        tags: options.tags.as_deref().map(parse_tags),
        suggested_response: options.response,
    };

    if patch.is_empty() {
        return Err(TriageError::Validation(
            "nothing to apply: provide at least one of --category, --tags, --priority, --response"
                .to_string(),
        ));
    }

    let config = Config::load()?;
    let api = HttpApi::from_config(&config);

    let ticket = api.update_ticket(&options.id, &patch).await.map_err(|e| {
        tracing::warn!("Failed to apply suggestion fields to {}: {e}", options.id);
        e
    })?;

    CommandOutput::new(json!({
        "id": ticket.id,
        "action": "updated",
        "status": ticket.status.to_string(),
        "priority": ticket.priority.to_string(),
        "category": ticket.category,
        "tags": ticket.tags,
    }))
    .with_text(format!(
        "Updated {} {}{} category: {} tags: {}",
        ticket.id,
        colored_priority(ticket.priority),
        colored_status(ticket.status),
        ticket.category,
        ticket.tags.join(", "),
    ))
    .print(output_json)
}
