//! Backend API surface.
//!
//! This module defines the client interface to the support-ticket backend
//! and its HTTP implementation. The client is deliberately thin: request
//! construction, JSON (de)serialization, and error-on-non-2xx. No retries,
//! no payload validation beyond the serde types.

pub mod http;

pub use http::HttpApi;

use crate::error::Result;
use crate::types::{AiSuggestion, Ticket, TicketDraft, TicketPatch};

/// Interface to the support-ticket backend
pub trait SupportApi: Send + Sync {
    /// Request an AI triage suggestion for a title/description pair
    fn suggest(
        &self,
        title: &str,
        description: &str,
    ) -> impl std::future::Future<Output = Result<AiSuggestion>> + Send;

    /// Create a ticket from a draft; the backend assigns the id
    fn create_ticket(
        &self,
        draft: &TicketDraft,
    ) -> impl std::future::Future<Output = Result<Ticket>> + Send;

    /// Partially update a ticket; only fields set on the patch change
    fn update_ticket(
        &self,
        id: &str,
        patch: &TicketPatch,
    ) -> impl std::future::Future<Output = Result<Ticket>> + Send;

    /// Fetch the full ticket collection, in backend order
    fn list_tickets(&self) -> impl std::future::Future<Output = Result<Vec<Ticket>>> + Send;

    /// Backend health probe; the response shape is backend-defined
    fn health(&self) -> impl std::future::Future<Output = Result<serde_json::Value>> + Send;
}
