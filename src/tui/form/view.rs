//! Submission form view component
//!
//! Collects the base ticket fields, drives the combined
//! suggest-merge-create action, and exposes the editable suggestion
//! panel once the ticket exists. Async results are checked against the
//! sequence token issued at dispatch so a late response from an
//! abandoned attempt cannot write into newer state.

use iocraft::prelude::*;

use crate::api::HttpApi;
use crate::config::Config;
use crate::submission::{self, SubmissionPhase, SuggestionEdit, TicketForm};
use crate::tui::components::{Footer, Select, TextField};
use crate::tui::theme::theme;
use crate::types::{AiSuggestion, TicketPriority};

use super::model::{
    FormFocus, FormState, compute_form_view_model, cycle_priority, cycle_user_priority,
};

/// Props for the FormScreen component
#[derive(Default, Props)]
pub struct FormScreenProps {}

/// Ticket submission screen
#[component]
pub fn FormScreen(_props: &FormScreenProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    // Base form fields
    let title = hooks.use_state(String::new);
    let description = hooks.use_state(String::new);
    let email = hooks.use_state(String::new);
    let mut priority: State<Option<TicketPriority>> = hooks.use_state(|| None);
    let department = hooks.use_state(String::new);

    // Suggestion panel fields (seeded on creation)
    let mut edit_category = hooks.use_state(String::new);
    let mut edit_tags = hooks.use_state(String::new);
    let mut edit_priority = hooks.use_state(|| TicketPriority::Medium);
    let mut edit_response = hooks.use_state(String::new);

    // Workflow state
    let mut phase = hooks.use_state(|| SubmissionPhase::Editing);
    let mut focus = hooks.use_state(|| FormFocus::Title);
    let mut ticket_id: State<Option<String>> = hooks.use_state(|| None);
    let mut suggestion: State<Option<AiSuggestion>> = hooks.use_state(|| None);
    let mut applying = hooks.use_state(|| false);
    let mut error: State<Option<String>> = hooks.use_state(|| None);
    let mut notice: State<Option<String>> = hooks.use_state(|| None);
    let mut submit_seq = hooks.use_state(|| 0u64);
    let mut apply_seq = hooks.use_state(|| 0u64);

    // Combined submit: suggestion request + merge + creation.
    let submit_handler: Handler<(u64, TicketForm)> = hooks.use_async_handler({
        move |(token, form): (u64, TicketForm)| {
            let mut phase = phase;
            let mut ticket_id = ticket_id;
            let mut suggestion = suggestion;
            let mut edit_category = edit_category;
            let mut edit_tags = edit_tags;
            let mut edit_priority = edit_priority;
            let mut edit_response = edit_response;
            let mut error = error;
            let mut notice = notice;
            let mut focus = focus;
            let submit_seq = submit_seq;

            async move {
                let result = match Config::load() {
                    Ok(config) => submission::submit(&HttpApi::from_config(&config), &form).await,
                    Err(e) => Err(e),
                };

                // Discard results from an abandoned attempt.
                if submit_seq.get() != token || phase.get() != SubmissionPhase::Requesting {
                    return;
                }

                match result {
                    Ok(outcome) => {
                        edit_category.set(outcome.suggestion.category.clone());
                        edit_tags.set(outcome.suggestion.tags.join(", "));
                        edit_priority.set(outcome.suggestion.priority);
                        edit_response.set(outcome.suggestion.suggested_response.clone());
                        notice.set(Some(format!("Created {}", outcome.ticket.id)));
                        ticket_id.set(Some(outcome.ticket.id));
                        suggestion.set(Some(outcome.suggestion));
                        focus.set(FormFocus::Category);
                        phase.set(SubmissionPhase::Suggested);
                    }
                    Err(e) => {
                        // Back to Editing; no partial ticket is referenced.
                        phase.set(SubmissionPhase::Editing);
                        error.set(Some(e.to_string()));
                    }
                }
            }
        }
    });

    // Re-apply the edited suggestion fields to the created ticket.
    let apply_handler: Handler<(u64, String, SuggestionEdit)> = hooks.use_async_handler({
        move |(token, id, edit): (u64, String, SuggestionEdit)| {
            let mut applying = applying;
            let mut error = error;
            let mut notice = notice;
            let apply_seq = apply_seq;

            async move {
                let result = match Config::load() {
                    Ok(config) => {
                        submission::apply_suggestion(&HttpApi::from_config(&config), &id, &edit)
                            .await
                    }
                    Err(e) => Err(e),
                };

                if apply_seq.get() != token {
                    return;
                }

                applying.set(false);
                match result {
                    Ok(ticket) => {
                        notice.set(Some(format!("Applied suggestion to {}", ticket.id)));
                    }
                    Err(e) => {
                        error.set(Some(format!("apply failed: {}", e)));
                    }
                }
            }
        }
    });

    let submit_for_events = submit_handler.clone();
    let apply_for_events = apply_handler.clone();

    hooks.use_terminal_events({
        let title = title;
        let description = description;
        let email = email;
        let department = department;

        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let with_suggestion = phase.get() == SubmissionPhase::Suggested;

                match code {
                    KeyCode::Tab => focus.set(focus.get().next(with_suggestion)),
                    KeyCode::BackTab => focus.set(focus.get().prev(with_suggestion)),

                    KeyCode::Left | KeyCode::Right => match focus.get() {
                        FormFocus::Priority => {
                            let next = cycle_user_priority(
                                priority.get(),
                                code == KeyCode::Right,
                            );
                            priority.set(next);
                        }
                        FormFocus::SuggestionPriority => {
                            let next = cycle_priority(
                                edit_priority.get(),
                                code == KeyCode::Right,
                            );
                            edit_priority.set(next);
                        }
                        _ => {}
                    },

                    KeyCode::Char('s') if modifiers.contains(KeyModifiers::CONTROL) => {
                        if phase.get() != SubmissionPhase::Editing {
                            return;
                        }
                        let form = TicketForm {
                            title: title.to_string(),
                            description: description.to_string(),
                            email: email.to_string(),
                            priority: priority.get(),
                            department: department.to_string(),
                        };
                        let missing = form.missing_fields();
                        if !missing.is_empty() {
                            error.set(Some(format!(
                                "missing required fields: {}",
                                missing.join(", ")
                            )));
                            return;
                        }
                        // A new submission discards any previous suggestion.
                        suggestion.set(None);
                        ticket_id.set(None);
                        error.set(None);
                        notice.set(None);
                        phase.set(SubmissionPhase::Requesting);
                        let token = submit_seq.get() + 1;
                        submit_seq.set(token);
                        submit_for_events.clone()((token, form));
                    }

                    KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
                        if phase.get() != SubmissionPhase::Suggested {
                            return;
                        }
                        let Some(id) = ticket_id.read().clone() else {
                            return;
                        };
                        let edit = SuggestionEdit {
                            category: edit_category.to_string(),
                            tags: crate::types::parse_tags(&edit_tags.to_string()),
                            priority: edit_priority.get(),
                            suggested_response: edit_response.to_string(),
                        };
                        applying.set(true);
                        error.set(None);
                        notice.set(None);
                        let token = apply_seq.get() + 1;
                        apply_seq.set(token);
                        apply_for_events.clone()((token, id, edit));
                    }

                    KeyCode::Char('n') if modifiers.contains(KeyModifiers::CONTROL) => {
                        let mut title = title;
                        let mut description = description;
                        let mut email = email;
                        let mut department = department;
                        title.set(String::new());
                        description.set(String::new());
                        email.set(String::new());
                        priority.set(None);
                        department.set(String::new());
                        edit_category.set(String::new());
                        edit_tags.set(String::new());
                        edit_priority.set(TicketPriority::Medium);
                        edit_response.set(String::new());
                        suggestion.set(None);
                        ticket_id.set(None);
                        applying.set(false);
                        error.set(None);
                        notice.set(None);
                        focus.set(FormFocus::Title);
                        phase.set(SubmissionPhase::Editing);
                    }

                    KeyCode::Esc => {
                        error.set(None);
                        notice.set(None);
                    }

                    _ => {}
                }
            }
            _ => {}
        }
    });

    // Mirror the screen state into the model for view-model computation.
    let model_state = FormState {
        form: TicketForm {
            title: title.to_string(),
            description: description.to_string(),
            email: email.to_string(),
            priority: priority.get(),
            department: department.to_string(),
        },
        phase: phase.get(),
        focus: focus.get(),
        ticket_id: ticket_id.read().clone(),
        suggestion: suggestion.read().clone(),
        edit_category: edit_category.to_string(),
        edit_tags: edit_tags.to_string(),
        edit_priority: edit_priority.get(),
        edit_response: edit_response.to_string(),
        applying: applying.get(),
        error: error.read().clone(),
        notice: notice.read().clone(),
        submit_seq: submit_seq.get(),
        apply_seq: apply_seq.get(),
    };
    let vm = compute_form_view_model(&model_state);

    let current_focus = focus.get();
    let ai_response = suggestion
        .read()
        .as_ref()
        .map(|s| s.suggested_response.clone());

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Row,
                column_gap: 2,
                padding: 1,
            ) {
                // Base form column
                View(
                    flex_direction: FlexDirection::Column,
                    flex_grow: 1.0,
                    row_gap: 1,
                ) {
                    Text(content: "Submit a Support Ticket", weight: Weight::Bold, color: theme.text)

                    TextField(
                        label: Some("Title"),
                        value: Some(title),
                        has_focus: current_focus == FormFocus::Title,
                    )
                    TextField(
                        label: Some("Description"),
                        value: Some(description),
                        has_focus: current_focus == FormFocus::Description,
                        multiline: true,
                        height: Some(4u16),
                    )
                    TextField(
                        label: Some("Email"),
                        value: Some(email),
                        has_focus: current_focus == FormFocus::Email,
                    )
                    Select(
                        label: Some("Priority (optional)"),
                        value: vm.priority_label.clone(),
                        has_focus: current_focus == FormFocus::Priority,
                    )
                    TextField(
                        label: Some("Department"),
                        value: Some(department),
                        has_focus: current_focus == FormFocus::Department,
                    )

                    Text(content: vm.submit_label.clone(), color: theme.text_dimmed)

                    #(vm.error.as_ref().map(|message| element! {
                        Text(content: message.clone(), color: theme.error)
                    }))
                    #(vm.notice.as_ref().map(|message| element! {
                        Text(content: message.clone(), color: theme.status_resolved)
                    }))
                }

                // Editable suggestion panel
                #(vm.show_suggestion_panel.then(|| element! {
                    View(
                        flex_direction: FlexDirection::Column,
                        flex_grow: 1.0,
                        row_gap: 1,
                        border_style: BorderStyle::Round,
                        border_color: theme.border,
                        padding: 1,
                    ) {
                        Text(content: "AI Suggestions (editable)", weight: Weight::Bold, color: theme.text)

                        TextField(
                            label: Some("Category"),
                            value: Some(edit_category),
                            has_focus: current_focus == FormFocus::Category,
                        )
                        TextField(
                            label: Some("Tags (comma separated)"),
                            value: Some(edit_tags),
                            has_focus: current_focus == FormFocus::Tags,
                        )
                        Select(
                            label: Some("Priority"),
                            value: edit_priority.get().to_string(),
                            has_focus: current_focus == FormFocus::SuggestionPriority,
                            value_color: Some(theme.priority_color(edit_priority.get())),
                        )
                        TextField(
                            label: Some("Suggested response"),
                            value: Some(edit_response),
                            has_focus: current_focus == FormFocus::Response,
                            multiline: true,
                            height: Some(4u16),
                        )

                        #(ai_response.as_ref().map(|response| element! {
                            View(flex_direction: FlexDirection::Column) {
                                Text(content: "AI response:", color: theme.text_dimmed)
                                Text(content: response.clone(), color: theme.text_dimmed)
                            }
                        }))
                    }
                }))
            }

            Footer(shortcuts: vm.shortcuts.clone())
        }
    }
}
