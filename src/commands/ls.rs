//! List tickets with client-side filters (`triage ls`).

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::api::{HttpApi, SupportApi};
use crate::config::Config;
use crate::dashboard::{FilterSelection, filter_tickets};
use crate::error::Result;
use crate::types::{Ticket, TicketStatus};

#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: TicketStatus,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Priority")]
    priority: String,
}

impl TicketRow {
    fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id.clone(),
            title: ticket.title.clone(),
            status: ticket.status,
            category: ticket.category.clone(),
            tags: ticket.tags.join(", "),
            priority: ticket.priority.to_string(),
        }
    }
}

pub async fn cmd_ls(
    category: Option<&str>,
    status: Option<TicketStatus>,
    tag: Option<&str>,
    output_json: bool,
) -> Result<()> {
    let config = Config::load()?;
    let api = HttpApi::from_config(&config);

    let tickets = api.list_tickets().await?;

    let filters = FilterSelection {
        category: category.map(str::to_string),
        status,
        tag: tag.map(str::to_string),
    };
    let visible = filter_tickets(&tickets, &filters);

    if output_json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    if visible.is_empty() {
        println!("No tickets match.");
        return Ok(());
    }

    let rows: Vec<TicketRow> = visible.iter().map(|t| TicketRow::from_ticket(t)).collect();
    let mut table = Table::new(rows);
    table.with(Style::modern());
    println!("{}", table);

    Ok(())
}
