//! Mock data builders for creating test tickets and suggestions.
//!
//! Builder patterns for test data without needing a backend.

use triage::types::{AiSuggestion, Ticket, TicketPriority, TicketStatus};

/// Builder for creating test tickets
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    /// Create a new ticket builder with the given ID
    pub fn new(id: &str) -> Self {
        Self {
            ticket: Ticket {
                id: id.to_string(),
                title: format!("Test ticket {id}"),
                description: "description".to_string(),
                email: "user@example.com".to_string(),
                priority: TicketPriority::Medium,
                department: String::new(),
                category: "General".to_string(),
                tags: Vec::new(),
                status: TicketStatus::New,
                suggested_response: None,
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.ticket.title = title.to_string();
        self
    }

    pub fn status(mut self, status: TicketStatus) -> Self {
        self.ticket.status = status;
        self
    }

    pub fn priority(mut self, priority: TicketPriority) -> Self {
        self.ticket.priority = priority;
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.ticket.category = category.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.ticket.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn response(mut self, response: &str) -> Self {
        self.ticket.suggested_response = Some(response.to_string());
        self
    }

    pub fn build(self) -> Ticket {
        self.ticket
    }
}

/// Create a basic ticket with minimal setup
pub fn mock_ticket(id: &str, status: TicketStatus) -> Ticket {
    TicketBuilder::new(id).status(status).build()
}

/// Create a suggestion with representative triage values
pub fn mock_suggestion() -> AiSuggestion {
    AiSuggestion {
        category: "Auth".to_string(),
        tags: vec!["login".to_string(), "bug".to_string()],
        priority: TicketPriority::High,
        suggested_response: "Reset password".to_string(),
    }
}

/// Serialize a ticket the way the backend would return it
pub fn ticket_body(ticket: &Ticket) -> String {
    serde_json::to_string(ticket).expect("ticket should serialize")
}

/// Serialize a collection the way the backend would return it
pub fn collection_body(tickets: &[Ticket]) -> String {
    serde_json::to_string(tickets).expect("tickets should serialize")
}
