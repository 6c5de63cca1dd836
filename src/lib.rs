pub mod api;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod submission;
pub mod tui;
pub mod types;

pub use api::{HttpApi, SupportApi};
pub use config::Config;
pub use dashboard::{Dashboard, FilterSelection, category_options, filter_tickets, tag_options};
pub use error::{Result, TriageError};
pub use submission::{
    Submission, SubmissionPhase, SuggestionEdit, TicketForm, apply_suggestion, merge_suggestion,
    submit,
};
pub use types::{
    AiSuggestion, Ticket, TicketDraft, TicketPatch, TicketPriority, TicketStatus, VALID_PRIORITIES,
    VALID_STATUSES, parse_tags,
};
