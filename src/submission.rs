//! Ticket submission workflow.
//!
//! A submission moves through Editing -> Requesting -> Suggested. The
//! combined submit action validates the form, requests an AI suggestion
//! keyed on (title, description), merges it with the user's input, and
//! creates the ticket in one pass. Afterwards the suggestion fields stay
//! independently editable and can be re-applied to the created ticket as
//! a partial update any number of times.

use crate::api::SupportApi;
use crate::error::{Result, TriageError};
use crate::types::{AiSuggestion, Ticket, TicketDraft, TicketPatch, TicketPriority};

/// Phase of a single submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    /// User is populating the base fields
    #[default]
    Editing,
    /// Suggestion request and ticket creation are in flight
    Requesting,
    /// Ticket exists; suggestion fields are editable and re-appliable
    Suggested,
}

/// User-entered base fields for a new ticket
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketForm {
    pub title: String,
    pub description: String,
    pub email: String,
    /// Explicit user choice; None lets the AI suggestion decide
    pub priority: Option<TicketPriority>,
    pub department: String,
}

impl TicketForm {
    /// Names of required fields that are currently empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        missing
    }

    /// Fail fast when required fields are absent, before any network call
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            return Ok(());
        }
        Err(TriageError::Validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// Merge user input with an AI suggestion into a creation draft.
///
/// The user's priority wins when set; category, tags, and the suggested
/// response always take the AI values.
pub fn merge_suggestion(form: &TicketForm, suggestion: &AiSuggestion) -> TicketDraft {
    TicketDraft {
        title: form.title.clone(),
        description: form.description.clone(),
        email: form.email.clone(),
        priority: form.priority.unwrap_or(suggestion.priority),
        department: form.department.clone(),
        category: suggestion.category.clone(),
        tags: suggestion.tags.clone(),
        suggested_response: suggestion.suggested_response.clone(),
    }
}

/// Outcome of a successful submit: the created ticket plus the suggestion
/// it was merged from (kept for the editable suggestion panel).
#[derive(Debug, Clone)]
pub struct Submission {
    pub ticket: Ticket,
    pub suggestion: AiSuggestion,
}

/// Combined submit action: validate, request a suggestion, merge, create.
///
/// Any failure leaves no partial ticket referenced client-side; callers
/// return to Editing and surface the error.
pub async fn submit<A: SupportApi>(api: &A, form: &TicketForm) -> Result<Submission> {
    form.validate()?;

    let suggestion = api.suggest(&form.title, &form.description).await?;
    let draft = merge_suggestion(form, &suggestion);
    let ticket = api.create_ticket(&draft).await?;

    Ok(Submission { ticket, suggestion })
}

/// User-editable copy of the suggestion fields on an existing ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionEdit {
    pub category: String,
    pub tags: Vec<String>,
    pub priority: TicketPriority,
    pub suggested_response: String,
}

impl SuggestionEdit {
    pub fn from_suggestion(suggestion: &AiSuggestion) -> Self {
        Self {
            category: suggestion.category.clone(),
            tags: suggestion.tags.clone(),
            priority: suggestion.priority,
            suggested_response: suggestion.suggested_response.clone(),
        }
    }

    /// Patch carrying all suggestion fields. Overwrite semantics: applying
    /// the same edit twice leaves the ticket unchanged after the second
    /// call.
    pub fn to_patch(&self) -> TicketPatch {
        TicketPatch {
            status: None,
            priority: Some(self.priority),
            category: Some(self.category.clone()),
            tags: Some(self.tags.clone()),
            suggested_response: Some(self.suggested_response.clone()),
        }
    }
}

/// Apply the current (possibly edited) suggestion fields to an already
/// created ticket. Does not create a ticket and does not change the
/// submission phase.
pub async fn apply_suggestion<A: SupportApi>(
    api: &A,
    ticket_id: &str,
    edit: &SuggestionEdit,
) -> Result<Ticket> {
    match api.update_ticket(ticket_id, &edit.to_patch()).await {
        Ok(ticket) => Ok(ticket),
        Err(e) => {
            tracing::warn!("Failed to apply suggestion to {ticket_id}: {e}");
            Err(e)
        }
    }
}
