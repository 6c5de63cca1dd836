//! Dashboard core tests: filtering properties and the optimistic-update
//! lifecycle against an authoritative backend collection.

mod common;

use common::mock_data::{TicketBuilder, mock_ticket};
use triage::dashboard::{Dashboard, FilterSelection, category_options, filter_tickets, tag_options};
use triage::types::{Ticket, TicketStatus};

fn backend_collection() -> Vec<Ticket> {
    vec![
        TicketBuilder::new("t-1")
            .category("Networking")
            .tags(&["VPN", "timeout"])
            .status(TicketStatus::New)
            .build(),
        TicketBuilder::new("t-2")
            .category("Software")
            .tags(&["Email", "Outlook"])
            .status(TicketStatus::InProgress)
            .build(),
        TicketBuilder::new("t-3")
            .category("Networking")
            .tags(&[])
            .status(TicketStatus::Resolved)
            .build(),
        TicketBuilder::new("t-4")
            .category("General")
            .tags(&["VPN"])
            .status(TicketStatus::New)
            .build(),
    ]
}

fn loaded() -> Dashboard {
    let mut dashboard = Dashboard::new();
    let token = dashboard.begin_refresh();
    dashboard.complete_refresh(token, backend_collection());
    dashboard
}

#[test]
fn test_tag_filter_membership_for_every_ticket() {
    let tickets = backend_collection();
    for tag in tag_options(&tickets) {
        let filters = FilterSelection {
            tag: Some(tag.clone()),
            ..Default::default()
        };
        let visible = filter_tickets(&tickets, &filters);
        for ticket in &tickets {
            let included = visible.iter().any(|v| v.id == ticket.id);
            assert_eq!(
                included,
                ticket.tags.contains(&tag),
                "tag filter '{}' disagreed on {}",
                tag,
                ticket.id
            );
        }
    }
}

#[test]
fn test_all_selectors_empty_is_identity() {
    let tickets = backend_collection();
    let visible = filter_tickets(&tickets, &FilterSelection::default());
    let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t-1", "t-2", "t-3", "t-4"]);
}

#[test]
fn test_filtering_is_idempotent() {
    let tickets = backend_collection();
    let filters = FilterSelection {
        category: Some("Networking".to_string()),
        ..Default::default()
    };
    let once: Vec<Ticket> = filter_tickets(&tickets, &filters)
        .into_iter()
        .cloned()
        .collect();
    let twice: Vec<&Ticket> = filter_tickets(&once, &filters);
    assert_eq!(once.len(), twice.len());
}

#[test]
fn test_option_sets_derive_from_loaded_data() {
    let tickets = backend_collection();
    assert_eq!(
        category_options(&tickets),
        vec!["Networking", "Software", "General"]
    );
    assert_eq!(
        tag_options(&tickets),
        vec!["VPN", "timeout", "Email", "Outlook"]
    );

    // Options follow the data, not a fixed enumeration.
    let smaller = vec![mock_ticket("t-9", TicketStatus::New)];
    assert_eq!(category_options(&smaller), vec!["General"]);
    assert!(tag_options(&smaller).is_empty());
}

#[test]
fn test_optimistic_update_then_backend_rejection() {
    let mut dashboard = loaded();

    // The new status is visible before any network confirmation.
    let token = dashboard
        .begin_status_change("t-2", TicketStatus::Resolved)
        .unwrap();
    assert_eq!(
        dashboard.ticket("t-2").unwrap().status,
        TicketStatus::Resolved
    );

    // The backend rejected the patch and never applied it; the follow-up
    // fetch returns the authoritative collection.
    assert!(dashboard.fail_status_change("t-2", token));
    let refresh = dashboard.begin_refresh();
    dashboard.complete_refresh(refresh, backend_collection());

    assert_eq!(
        dashboard.ticket("t-2").unwrap().status,
        TicketStatus::InProgress
    );
    assert!(!dashboard.is_pending("t-2"));
}

#[test]
fn test_confirmed_update_keeps_local_state() {
    let mut dashboard = loaded();
    let token = dashboard
        .begin_status_change("t-1", TicketStatus::InProgress)
        .unwrap();
    dashboard.confirm_status_change("t-1", token);

    assert_eq!(
        dashboard.ticket("t-1").unwrap().status,
        TicketStatus::InProgress
    );
    assert!(!dashboard.is_pending("t-1"));
}

#[test]
fn test_late_fetch_never_clobbers_newer_request() {
    let mut dashboard = loaded();

    let stale = dashboard.begin_refresh();
    let current = dashboard.begin_refresh();

    let mut shrunk = backend_collection();
    shrunk.truncate(1);

    assert!(dashboard.complete_refresh(current, backend_collection()));
    assert!(!dashboard.complete_refresh(stale, shrunk));
    assert_eq!(dashboard.tickets().len(), 4);
}

#[test]
fn test_filters_project_over_optimistic_state() {
    let mut dashboard = loaded();
    dashboard.filters.status = Some(TicketStatus::Resolved);
    assert_eq!(dashboard.visible().len(), 1);

    dashboard.begin_status_change("t-1", TicketStatus::Resolved);
    let ids: Vec<&str> = dashboard.visible().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t-1", "t-3"]);
}
