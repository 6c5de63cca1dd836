//! Dashboard state over the loaded ticket collection.
//!
//! Filtering is a pure projection: it never mutates the loaded set and is
//! recomputed on demand. Status changes are optimistic: the local ticket
//! is patched immediately and tagged with a pending-confirmation marker;
//! on failure the whole collection is re-fetched and the marker replaced
//! wholesale by the authoritative state. Refreshes and per-ticket updates
//! carry monotonic sequence tokens so a late-arriving response can never
//! clobber newer state.

use std::collections::HashMap;

use crate::types::{Ticket, TicketStatus};

/// Independent optional selectors for the dashboard list.
///
/// An unset selector passes every ticket. Category and status are value
/// equality; tag is membership in the ticket's tag collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub category: Option<String>,
    pub status: Option<TicketStatus>,
    pub tag: Option<String>,
}

impl FilterSelection {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.status.is_none() && self.tag.is_none()
    }

    pub fn clear(&mut self) {
        *self = FilterSelection::default();
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        let category_ok = self
            .category
            .as_ref()
            .is_none_or(|c| &ticket.category == c);
        let status_ok = self.status.is_none_or(|s| ticket.status == s);
        let tag_ok = self
            .tag
            .as_ref()
            .is_none_or(|t| ticket.tags.iter().any(|tag| tag == t));
        category_ok && status_ok && tag_ok
    }
}

/// Pure projection of the loaded set, order preserved
pub fn filter_tickets<'a>(tickets: &'a [Ticket], filters: &FilterSelection) -> Vec<&'a Ticket> {
    tickets.iter().filter(|t| filters.matches(t)).collect()
}

/// Distinct non-empty categories across loaded tickets, first-seen order
pub fn category_options(tickets: &[Ticket]) -> Vec<String> {
    let mut seen = Vec::new();
    for ticket in tickets {
        if !ticket.category.is_empty() && !seen.contains(&ticket.category) {
            seen.push(ticket.category.clone());
        }
    }
    seen
}

/// Distinct non-empty tags across loaded tickets, first-seen order
pub fn tag_options(tickets: &[Ticket]) -> Vec<String> {
    let mut seen = Vec::new();
    for ticket in tickets {
        for tag in &ticket.tags {
            if !tag.is_empty() && !seen.contains(tag) {
                seen.push(tag.clone());
            }
        }
    }
    seen
}

/// A locally applied, unconfirmed status patch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingStatus {
    status: TicketStatus,
    token: u64,
}

/// Loaded tickets plus filter and optimistic-update bookkeeping
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    tickets: Vec<Ticket>,
    pub filters: FilterSelection,
    pending: HashMap<String, PendingStatus>,
    status_seq: HashMap<String, u64>,
    refresh_seq: u64,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The loaded collection, in backend order
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// The loaded collection projected through the active filters
    pub fn visible(&self) -> Vec<&Ticket> {
        filter_tickets(&self.tickets, &self.filters)
    }

    pub fn ticket(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Whether a ticket has an unconfirmed local status patch
    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains_key(id)
    }

    /// Start a collection fetch. The returned token must accompany the
    /// completion; any refresh started later supersedes this one.
    pub fn begin_refresh(&mut self) -> u64 {
        self.refresh_seq += 1;
        self.refresh_seq
    }

    /// Install a fetched collection. A stale token (a newer refresh was
    /// issued meanwhile) is discarded. Pending markers are replaced
    /// wholesale by the authoritative state.
    pub fn complete_refresh(&mut self, token: u64, tickets: Vec<Ticket>) -> bool {
        if token != self.refresh_seq {
            tracing::debug!(
                "Discarding stale ticket fetch (token {token}, current {})",
                self.refresh_seq
            );
            return false;
        }
        self.tickets = tickets;
        self.pending.clear();
        true
    }

    /// A collection fetch failed. Returns true when the failure belongs to
    /// the latest refresh and should be surfaced; older failures are noise.
    pub fn fail_refresh(&mut self, token: u64) -> bool {
        token == self.refresh_seq
    }

    /// Optimistically apply a status change: the local ticket reflects the
    /// new value immediately, before the network call resolves. Returns
    /// the sequence token for the update, or None for an unknown id.
    pub fn begin_status_change(&mut self, id: &str, status: TicketStatus) -> Option<u64> {
        let ticket = self.tickets.iter_mut().find(|t| t.id == id)?;
        ticket.status = status;

        let seq = self.status_seq.entry(id.to_string()).or_insert(0);
        *seq += 1;
        let token = *seq;
        self.pending
            .insert(id.to_string(), PendingStatus { status, token });
        Some(token)
    }

    /// Backend confirmed the update; clears the marker unless a newer
    /// change for the same ticket is already pending.
    pub fn confirm_status_change(&mut self, id: &str, token: u64) {
        if let Some(pending) = self.pending.get(id)
            && pending.token == token
        {
            self.pending.remove(id);
        }
    }

    /// Backend rejected the update. Returns true when the failure is
    /// current (not superseded by a newer change) and the caller should
    /// reconcile by re-fetching the collection; the marker itself is
    /// cleared by the refresh that follows.
    pub fn fail_status_change(&mut self, id: &str, token: u64) -> bool {
        match self.pending.get(id) {
            Some(pending) if pending.token == token => true,
            _ => {
                tracing::debug!("Ignoring stale status-update failure for {id} (token {token})");
                false
            }
        }
    }
}
