//! HTTP implementation of the backend API over reqwest.

use reqwest::Client;
use serde_json::json;

use crate::config::Config;
use crate::error::{Result, TriageError};
use crate::types::{AiSuggestion, Ticket, TicketDraft, TicketPatch};

use super::SupportApi;

/// reqwest-backed client for the ticket backend.
///
/// No request timeout is configured: calls suspend the initiating
/// operation until the backend answers or the connection drops.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// Create a client against the given base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from the application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api.url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map any non-2xx response to a request error. The backend's error
    /// body is carried verbatim in the message, never parsed.
    async fn check(context: &str, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = if body.is_empty() {
            format!("{} returned {}", context, status)
        } else {
            format!("{} returned {}: {}", context, status, body)
        };
        Err(TriageError::Request(message))
    }
}

impl SupportApi for HttpApi {
    async fn suggest(&self, title: &str, description: &str) -> Result<AiSuggestion> {
        tracing::debug!("Requesting AI suggestion for '{title}'");
        let response = self
            .client
            .post(self.url("/api/ai/suggest"))
            .json(&json!({ "title": title, "description": description }))
            .send()
            .await?;

        let response = Self::check("POST /api/ai/suggest", response).await?;
        Ok(response.json().await?)
    }

    async fn create_ticket(&self, draft: &TicketDraft) -> Result<Ticket> {
        tracing::debug!("Creating ticket '{}'", draft.title);
        let response = self
            .client
            .post(self.url("/api/tickets"))
            .json(draft)
            .send()
            .await?;

        let response = Self::check("POST /api/tickets", response).await?;
        Ok(response.json().await?)
    }

    async fn update_ticket(&self, id: &str, patch: &TicketPatch) -> Result<Ticket> {
        tracing::debug!("Updating ticket {id}");
        let response = self
            .client
            .patch(self.url(&format!("/api/tickets/{}", id)))
            .json(patch)
            .send()
            .await?;

        let response = Self::check("PATCH /api/tickets/{id}", response).await?;
        Ok(response.json().await?)
    }

    async fn list_tickets(&self) -> Result<Vec<Ticket>> {
        tracing::debug!("Fetching ticket collection");
        let response = self.client.get(self.url("/api/tickets")).send().await?;

        let response = Self::check("GET /api/tickets", response).await?;
        Ok(response.json().await?)
    }

    async fn health(&self) -> Result<serde_json::Value> {
        let response = self.client.get(self.url("/")).send().await?;

        let response = Self::check("GET /", response).await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TicketPriority, TicketStatus};

    fn ticket_json(id: &str, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": "VPN drops",
            "description": "VPN disconnects hourly",
            "email": "a@b.com",
            "priority": "High",
            "department": "Sales",
            "category": "Networking",
            "tags": ["VPN", "timeout"],
            "status": status,
            "suggested_response": "Restart your VPN client."
        })
    }

    #[tokio::test]
    async fn test_suggest_posts_title_and_description_only() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/ai/suggest")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(json!({
                "title": "Login broken",
                "description": "Cannot log in"
            })))
            .with_status(200)
            .with_body(
                json!({
                    "category": "Auth",
                    "tags": ["login", "bug"],
                    "priority": "High",
                    "suggested_response": "Reset password"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let api = HttpApi::new(&server.url());
        let suggestion = api.suggest("Login broken", "Cannot log in").await.unwrap();

        assert_eq!(suggestion.category, "Auth");
        assert_eq!(suggestion.priority, TicketPriority::High);
        assert_eq!(suggestion.tags, vec!["login", "bug"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_suggest_non_2xx_is_request_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/ai/suggest")
            .with_status(500)
            .with_body("model unavailable")
            .create_async()
            .await;

        let api = HttpApi::new(&server.url());
        let err = api.suggest("t", "d").await.unwrap_err();

        match err {
            TriageError::Request(message) => {
                assert!(message.contains("500"));
                assert!(message.contains("model unavailable"));
            }
            other => panic!("expected request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_ticket_returns_assigned_id() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/tickets")
            .with_status(200)
            .with_body(ticket_json("t-42", "New").to_string())
            .create_async()
            .await;

        let api = HttpApi::new(&server.url());
        let draft = TicketDraft {
            title: "VPN drops".to_string(),
            description: "VPN disconnects hourly".to_string(),
            email: "a@b.com".to_string(),
            priority: TicketPriority::High,
            department: "Sales".to_string(),
            category: "Networking".to_string(),
            tags: vec!["VPN".to_string()],
            suggested_response: "Restart your VPN client.".to_string(),
        };

        let ticket = api.create_ticket(&draft).await.unwrap();
        assert_eq!(ticket.id, "t-42");
        assert_eq!(ticket.status, TicketStatus::New);
    }

    #[tokio::test]
    async fn test_update_ticket_sends_only_patched_fields() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/tickets/t-42")
            .match_body(mockito::Matcher::Json(json!({ "status": "Resolved" })))
            .with_status(200)
            .with_body(ticket_json("t-42", "Resolved").to_string())
            .create_async()
            .await;

        let api = HttpApi::new(&server.url());
        let patch = TicketPatch::status(TicketStatus::Resolved);
        let ticket = api.update_ticket("t-42", &patch).await.unwrap();

        assert_eq!(ticket.status, TicketStatus::Resolved);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_unknown_id_surfaces_backend_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PATCH", "/api/tickets/missing")
            .with_status(404)
            .with_body("{\"detail\":\"Ticket not found\"}")
            .create_async()
            .await;

        let api = HttpApi::new(&server.url());
        let err = api
            .update_ticket("missing", &TicketPatch::status(TicketStatus::New))
            .await
            .unwrap_err();
        assert!(matches!(err, TriageError::Request(_)));
    }

    #[tokio::test]
    async fn test_list_tickets_returns_backend_order() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/tickets")
            .with_status(200)
            .with_body(
                json!([ticket_json("t-1", "New"), ticket_json("t-2", "Resolved")]).to_string(),
            )
            .create_async()
            .await;

        let api = HttpApi::new(&server.url());
        let tickets = api.list_tickets().await.unwrap();
        let ids: Vec<&str> = tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t-1", "t-2"]);
    }

    #[tokio::test]
    async fn test_health_accepts_any_json_shape() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_body("{\"message\":\"AI Ticket System Backend Running\"}")
            .create_async()
            .await;

        let api = HttpApi::new(&server.url());
        let body = api.health().await.unwrap();
        assert_eq!(body["message"], "AI Ticket System Backend Running");
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let api = HttpApi::new("http://localhost:8000/");
        assert_eq!(api.base_url(), "http://localhost:8000");
    }
}
