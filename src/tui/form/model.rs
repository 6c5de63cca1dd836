//! Form screen model types for testable state management
//!
//! Separates the submission state machine (FormState) from rendering,
//! enabling unit testing without the iocraft framework. The async
//! submit/apply results re-enter the reducer as actions tagged with the
//! sequence token issued when the request started; stale results are
//! discarded.

use crate::submission::{SubmissionPhase, SuggestionEdit, TicketForm};
use crate::tui::components::Shortcut;
use crate::types::{AiSuggestion, Ticket, TicketPriority, parse_tags};

/// Focusable fields, in Tab order. The suggestion fields only exist once
/// a ticket has been created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Title,
    Description,
    Email,
    Priority,
    Department,
    Category,
    Tags,
    SuggestionPriority,
    Response,
}

impl FormFocus {
    fn order(with_suggestion: bool) -> &'static [FormFocus] {
        const BASE: &[FormFocus] = &[
            FormFocus::Title,
            FormFocus::Description,
            FormFocus::Email,
            FormFocus::Priority,
            FormFocus::Department,
        ];
        const FULL: &[FormFocus] = &[
            FormFocus::Title,
            FormFocus::Description,
            FormFocus::Email,
            FormFocus::Priority,
            FormFocus::Department,
            FormFocus::Category,
            FormFocus::Tags,
            FormFocus::SuggestionPriority,
            FormFocus::Response,
        ];
        if with_suggestion { FULL } else { BASE }
    }

    pub fn next(self, with_suggestion: bool) -> Self {
        let order = Self::order(with_suggestion);
        let index = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(index + 1) % order.len()]
    }

    pub fn prev(self, with_suggestion: bool) -> Self {
        let order = Self::order(with_suggestion);
        let index = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(index + order.len() - 1) % order.len()]
    }
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// User-entered base fields
    pub form: TicketForm,
    /// Submission state machine phase
    pub phase: SubmissionPhase,
    /// Currently focused field
    pub focus: FormFocus,

    /// Identifier assigned by the backend on creation
    pub ticket_id: Option<String>,
    /// The AI suggestion the created ticket was merged from
    pub suggestion: Option<AiSuggestion>,

    // Editable suggestion fields (seeded from the AI values)
    pub edit_category: String,
    /// Comma-separated editable tag list
    pub edit_tags: String,
    pub edit_priority: TicketPriority,
    pub edit_response: String,

    /// Whether an apply request is in flight
    pub applying: bool,
    pub error: Option<String>,
    pub notice: Option<String>,

    // Sequence tokens; results carrying an older token are discarded
    pub submit_seq: u64,
    pub apply_seq: u64,
}

/// All possible actions on the form screen
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SetTitle(String),
    SetDescription(String),
    SetEmail(String),
    SetDepartment(String),
    /// Cycle the optional user priority: none -> Low -> Medium -> High -> none
    NextPriority,
    PrevPriority,

    FocusNext,
    FocusPrev,

    /// Combined action: validate, request suggestion, merge, create
    Submit,
    SubmitSucceeded {
        token: u64,
        ticket: Ticket,
        suggestion: AiSuggestion,
    },
    SubmitFailed {
        token: u64,
        message: String,
    },

    SetEditCategory(String),
    SetEditTags(String),
    NextEditPriority,
    PrevEditPriority,
    SetEditResponse(String),

    /// Re-apply the current (possibly edited) suggestion fields
    Apply,
    ApplySucceeded {
        token: u64,
        ticket: Ticket,
    },
    ApplyFailed {
        token: u64,
        message: String,
    },

    /// Discard everything and begin a fresh submission
    StartNew,
    DismissMessages,
}

/// Cycle the optional user priority through none -> Low -> Medium -> High
pub fn cycle_user_priority(
    current: Option<TicketPriority>,
    forward: bool,
) -> Option<TicketPriority> {
    match (current, forward) {
        (None, true) => Some(TicketPriority::Low),
        (Some(TicketPriority::Low), true) => Some(TicketPriority::Medium),
        (Some(TicketPriority::Medium), true) => Some(TicketPriority::High),
        (Some(TicketPriority::High), true) => None,
        (None, false) => Some(TicketPriority::High),
        (Some(TicketPriority::High), false) => Some(TicketPriority::Medium),
        (Some(TicketPriority::Medium), false) => Some(TicketPriority::Low),
        (Some(TicketPriority::Low), false) => None,
    }
}

/// Cycle a required priority through the enumeration
pub fn cycle_priority(current: TicketPriority, forward: bool) -> TicketPriority {
    let all = TicketPriority::all();
    let index = all.iter().position(|p| *p == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % all.len()
    } else {
        (index + all.len() - 1) % all.len()
    };
    all[next]
}

/// Pure function: apply action to state (reducer pattern)
///
/// Contains only pure state transitions; the async submit/apply I/O is
/// driven by the view and re-enters through the *Succeeded/*Failed
/// actions.
pub fn reduce_form_state(mut state: FormState, action: FormAction) -> FormState {
    let with_suggestion = state.phase == SubmissionPhase::Suggested;

    match action {
        FormAction::SetTitle(value) => state.form.title = value,
        FormAction::SetDescription(value) => state.form.description = value,
        FormAction::SetEmail(value) => state.form.email = value,
        FormAction::SetDepartment(value) => state.form.department = value,
        FormAction::NextPriority => {
            state.form.priority = cycle_user_priority(state.form.priority, true);
        }
        FormAction::PrevPriority => {
            state.form.priority = cycle_user_priority(state.form.priority, false);
        }

        FormAction::FocusNext => state.focus = state.focus.next(with_suggestion),
        FormAction::FocusPrev => state.focus = state.focus.prev(with_suggestion),

        FormAction::Submit => {
            if state.phase != SubmissionPhase::Editing {
                return state;
            }
            let missing = state.form.missing_fields();
            if !missing.is_empty() {
                state.error = Some(format!("missing required fields: {}", missing.join(", ")));
                return state;
            }
            // A new submission discards any previous suggestion.
            state.suggestion = None;
            state.ticket_id = None;
            state.error = None;
            state.notice = None;
            state.phase = SubmissionPhase::Requesting;
            state.submit_seq += 1;
        }
        FormAction::SubmitSucceeded {
            token,
            ticket,
            suggestion,
        } => {
            if token != state.submit_seq || state.phase != SubmissionPhase::Requesting {
                return state;
            }
            state.phase = SubmissionPhase::Suggested;
            state.notice = Some(format!("Created {}", ticket.id));
            state.ticket_id = Some(ticket.id);
            state.edit_category = suggestion.category.clone();
            state.edit_tags = suggestion.tags.join(", ");
            state.edit_priority = suggestion.priority;
            state.edit_response = suggestion.suggested_response.clone();
            state.suggestion = Some(suggestion);
            state.focus = FormFocus::Category;
        }
        FormAction::SubmitFailed { token, message } => {
            if token != state.submit_seq || state.phase != SubmissionPhase::Requesting {
                return state;
            }
            // Back to Editing; no partial ticket is referenced.
            state.phase = SubmissionPhase::Editing;
            state.error = Some(message);
        }

        FormAction::SetEditCategory(value) => state.edit_category = value,
        FormAction::SetEditTags(value) => state.edit_tags = value,
        FormAction::NextEditPriority => {
            state.edit_priority = cycle_priority(state.edit_priority, true);
        }
        FormAction::PrevEditPriority => {
            state.edit_priority = cycle_priority(state.edit_priority, false);
        }
        FormAction::SetEditResponse(value) => state.edit_response = value,

        FormAction::Apply => {
            if state.phase != SubmissionPhase::Suggested || state.ticket_id.is_none() {
                return state;
            }
            state.applying = true;
            state.error = None;
            state.notice = None;
            state.apply_seq += 1;
        }
        FormAction::ApplySucceeded { token, ticket } => {
            if token != state.apply_seq {
                return state;
            }
            state.applying = false;
            state.notice = Some(format!("Applied suggestion to {}", ticket.id));
        }
        FormAction::ApplyFailed { token, message } => {
            if token != state.apply_seq {
                return state;
            }
            // Locally edited fields are kept; the failure is surfaced.
            state.applying = false;
            state.error = Some(format!("apply failed: {}", message));
        }

        FormAction::StartNew => return FormState::default(),
        FormAction::DismissMessages => {
            state.error = None;
            state.notice = None;
        }
    }

    state
}

/// Build the suggestion edit currently described by the editable fields
pub fn current_edit(state: &FormState) -> SuggestionEdit {
    SuggestionEdit {
        category: state.edit_category.clone(),
        tags: parse_tags(&state.edit_tags),
        priority: state.edit_priority,
        suggested_response: state.edit_response.clone(),
    }
}

// ============================================================================
// View Model
// ============================================================================

/// Computed view model for rendering the form screen
#[derive(Debug, Clone, PartialEq)]
pub struct FormViewModel {
    /// Submit line label, reflecting the in-flight state
    pub submit_label: String,
    /// Whether the editable suggestion panel is shown
    pub show_suggestion_panel: bool,
    /// User priority formatted for the selector
    pub priority_label: String,
    pub error: Option<String>,
    pub notice: Option<String>,
    /// Keyboard shortcuts to display in the footer
    pub shortcuts: Vec<Shortcut>,
}

/// Pure function: compute view model from state
pub fn compute_form_view_model(state: &FormState) -> FormViewModel {
    let submit_label = match state.phase {
        SubmissionPhase::Requesting => "Generating & saving...".to_string(),
        SubmissionPhase::Editing => "Ready to submit".to_string(),
        SubmissionPhase::Suggested => match (&state.ticket_id, state.applying) {
            (Some(id), false) => format!("Ticket {} created", id),
            (Some(id), true) => format!("Applying suggestion to {}...", id),
            (None, _) => String::new(),
        },
    };

    let priority_label = match state.form.priority {
        Some(priority) => priority.to_string(),
        None => "AI decides".to_string(),
    };

    let mut shortcuts = vec![
        Shortcut::new("Tab", "Next field"),
        Shortcut::new("S-Tab", "Prev field"),
    ];
    match state.phase {
        SubmissionPhase::Editing => {
            shortcuts.push(Shortcut::new("C-s", "Submit"));
        }
        SubmissionPhase::Requesting => {}
        SubmissionPhase::Suggested => {
            shortcuts.push(Shortcut::new("C-u", "Use suggestion"));
            shortcuts.push(Shortcut::new("C-n", "New ticket"));
        }
    }
    shortcuts.push(Shortcut::new("←/→", "Cycle priority"));

    FormViewModel {
        submit_label,
        show_suggestion_panel: state.phase == SubmissionPhase::Suggested,
        priority_label,
        error: state.error.clone(),
        notice: state.notice.clone(),
        shortcuts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> FormState {
        FormState {
            form: TicketForm {
                title: "Login broken".to_string(),
                description: "Cannot log in".to_string(),
                email: "a@b.com".to_string(),
                priority: None,
                department: String::new(),
            },
            ..Default::default()
        }
    }

    fn sample_suggestion() -> AiSuggestion {
        AiSuggestion {
            category: "Auth".to_string(),
            tags: vec!["login".to_string(), "bug".to_string()],
            priority: TicketPriority::High,
            suggested_response: "Reset password".to_string(),
        }
    }

    fn sample_ticket(id: &str) -> Ticket {
        Ticket {
            id: id.to_string(),
            title: "Login broken".to_string(),
            description: "Cannot log in".to_string(),
            email: "a@b.com".to_string(),
            priority: TicketPriority::High,
            department: String::new(),
            category: "Auth".to_string(),
            tags: vec!["login".to_string(), "bug".to_string()],
            status: Default::default(),
            suggested_response: Some("Reset password".to_string()),
        }
    }

    #[test]
    fn test_submit_with_missing_fields_stays_editing() {
        let state = FormState::default();
        let state = reduce_form_state(state, FormAction::Submit);
        assert_eq!(state.phase, SubmissionPhase::Editing);
        assert_eq!(state.submit_seq, 0);
        assert!(state.error.as_deref().unwrap().contains("title"));
        assert!(state.error.as_deref().unwrap().contains("email"));
    }

    #[test]
    fn test_submit_enters_requesting_and_bumps_token() {
        let state = reduce_form_state(filled_state(), FormAction::Submit);
        assert_eq!(state.phase, SubmissionPhase::Requesting);
        assert_eq!(state.submit_seq, 1);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_submit_success_seeds_editable_fields() {
        let state = reduce_form_state(filled_state(), FormAction::Submit);
        let state = reduce_form_state(
            state,
            FormAction::SubmitSucceeded {
                token: 1,
                ticket: sample_ticket("t-9"),
                suggestion: sample_suggestion(),
            },
        );
        assert_eq!(state.phase, SubmissionPhase::Suggested);
        assert_eq!(state.ticket_id.as_deref(), Some("t-9"));
        assert_eq!(state.edit_category, "Auth");
        assert_eq!(state.edit_tags, "login, bug");
        assert_eq!(state.edit_priority, TicketPriority::High);
    }

    #[test]
    fn test_stale_submit_result_discarded() {
        let state = reduce_form_state(filled_state(), FormAction::Submit);
        // A failure for the first attempt returns the form to Editing;
        // resubmitting issues token 2.
        let state = reduce_form_state(
            state,
            FormAction::SubmitFailed {
                token: 1,
                message: "boom".to_string(),
            },
        );
        let state = reduce_form_state(state, FormAction::Submit);
        assert_eq!(state.submit_seq, 2);

        // The late result for attempt 1 arrives now and must be ignored.
        let state = reduce_form_state(
            state,
            FormAction::SubmitSucceeded {
                token: 1,
                ticket: sample_ticket("t-stale"),
                suggestion: sample_suggestion(),
            },
        );
        assert_eq!(state.phase, SubmissionPhase::Requesting);
        assert!(state.ticket_id.is_none());
    }

    #[test]
    fn test_submit_failure_returns_to_editing_without_ticket() {
        let state = reduce_form_state(filled_state(), FormAction::Submit);
        let state = reduce_form_state(
            state,
            FormAction::SubmitFailed {
                token: 1,
                message: "request failed: 500".to_string(),
            },
        );
        assert_eq!(state.phase, SubmissionPhase::Editing);
        assert!(state.ticket_id.is_none());
        assert_eq!(state.error.as_deref(), Some("request failed: 500"));
    }

    #[test]
    fn test_apply_requires_created_ticket() {
        let state = reduce_form_state(filled_state(), FormAction::Apply);
        assert!(!state.applying);
        assert_eq!(state.apply_seq, 0);
    }

    #[test]
    fn test_apply_failure_is_surfaced_not_swallowed() {
        let state = reduce_form_state(filled_state(), FormAction::Submit);
        let state = reduce_form_state(
            state,
            FormAction::SubmitSucceeded {
                token: 1,
                ticket: sample_ticket("t-9"),
                suggestion: sample_suggestion(),
            },
        );
        let state = reduce_form_state(state, FormAction::SetEditCategory("Security".to_string()));
        let state = reduce_form_state(state, FormAction::Apply);
        let state = reduce_form_state(
            state,
            FormAction::ApplyFailed {
                token: 1,
                message: "request failed: 502".to_string(),
            },
        );
        assert!(state.error.as_deref().unwrap().contains("apply failed"));
        // Locally edited fields are not reverted.
        assert_eq!(state.edit_category, "Security");
        assert_eq!(state.phase, SubmissionPhase::Suggested);
    }

    #[test]
    fn test_focus_cycles_through_suggestion_fields_only_when_suggested() {
        let state = FormState {
            focus: FormFocus::Department,
            ..FormState::default()
        };
        let cycled = reduce_form_state(state.clone(), FormAction::FocusNext);
        assert_eq!(cycled.focus, FormFocus::Title);

        let mut suggested = state;
        suggested.phase = SubmissionPhase::Suggested;
        let cycled = reduce_form_state(suggested, FormAction::FocusNext);
        assert_eq!(cycled.focus, FormFocus::Category);
    }

    #[test]
    fn test_priority_cycle_includes_unset() {
        let state = filled_state();
        let state = reduce_form_state(state, FormAction::NextPriority);
        assert_eq!(state.form.priority, Some(TicketPriority::Low));
        let state = reduce_form_state(state, FormAction::PrevPriority);
        assert_eq!(state.form.priority, None);
    }

    #[test]
    fn test_current_edit_parses_comma_separated_tags() {
        let mut state = FormState::default();
        state.edit_tags = " vpn, timeout,, remote ".to_string();
        let edit = current_edit(&state);
        assert_eq!(edit.tags, vec!["vpn", "timeout", "remote"]);
    }

    #[test]
    fn test_view_model_labels() {
        let vm = compute_form_view_model(&filled_state());
        assert_eq!(vm.priority_label, "AI decides");
        assert!(!vm.show_suggestion_panel);

        let state = reduce_form_state(filled_state(), FormAction::Submit);
        let vm = compute_form_view_model(&state);
        assert_eq!(vm.submit_label, "Generating & saving...");
    }
}
