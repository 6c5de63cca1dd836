use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TriageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TicketStatus {
    #[default]
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::New => write!(f, "New"),
            TicketStatus::InProgress => write!(f, "In Progress"),
            TicketStatus::Resolved => write!(f, "Resolved"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(TicketStatus::New),
            "in progress" | "in_progress" | "in-progress" => Ok(TicketStatus::InProgress),
            "resolved" => Ok(TicketStatus::Resolved),
            _ => Err(TriageError::InvalidStatus(s.to_string())),
        }
    }
}

impl TicketStatus {
    pub fn all() -> [TicketStatus; 3] {
        [
            TicketStatus::New,
            TicketStatus::InProgress,
            TicketStatus::Resolved,
        ]
    }
}

pub const VALID_STATUSES: &[&str] = &["new", "in_progress", "resolved"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketPriority::Low => write!(f, "Low"),
            TicketPriority::Medium => write!(f, "Medium"),
            TicketPriority::High => write!(f, "High"),
        }
    }
}

impl FromStr for TicketPriority {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(TicketPriority::Low),
            "medium" => Ok(TicketPriority::Medium),
            "high" => Ok(TicketPriority::High),
            _ => Err(TriageError::InvalidPriority(s.to_string())),
        }
    }
}

impl TicketPriority {
    pub fn all() -> [TicketPriority; 3] {
        [
            TicketPriority::Low,
            TicketPriority::Medium,
            TicketPriority::High,
        ]
    }
}

pub const VALID_PRIORITIES: &[&str] = &["low", "medium", "high"];

/// A support ticket as returned by the backend.
///
/// The identifier is assigned by the backend on creation and is never
/// mutated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
    pub email: String,
    #[serde(default)]
    pub priority: TicketPriority,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: TicketStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_response: Option<String>,
}

/// Payload for ticket creation. The backend requires every field and
/// assigns the id and initial status itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub email: String,
    pub priority: TicketPriority,
    pub department: String,
    pub category: String,
    pub tags: Vec<String>,
    pub suggested_response: String,
}

/// Partial update for a ticket. Only supplied fields are serialized, so
/// the backend leaves everything else untouched (patch semantics).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TicketPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_response: Option<String>,
}

impl TicketPatch {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.priority.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.suggested_response.is_none()
    }

    pub fn status(status: TicketStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

/// AI triage recommendation for a (title, description) pair.
///
/// Transient: it becomes part of a ticket only through the merge at
/// creation or an explicit apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiSuggestion {
    pub category: String,
    pub tags: Vec<String>,
    pub priority: TicketPriority,
    pub suggested_response: String,
}

/// Parse a comma-separated tag list: split, trim, drop empties.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
