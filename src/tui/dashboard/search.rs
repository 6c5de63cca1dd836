//! Fuzzy search over the filtered ticket list
//!
//! Applied after the selector filters: the selectors decide which tickets
//! are candidates, the query narrows them by fuzzy match.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::types::Ticket;

/// A ticket with its fuzzy match score
#[derive(Debug, Clone)]
pub struct FilteredTicket {
    pub ticket: Ticket,
    pub score: i64,
}

/// Narrow tickets by a fuzzy search query over id, title, category, and tags
pub fn search_tickets(tickets: &[&Ticket], query: &str) -> Vec<FilteredTicket> {
    if query.is_empty() {
        return tickets
            .iter()
            .map(|t| FilteredTicket {
                ticket: (*t).clone(),
                score: 0,
            })
            .collect();
    }

    let matcher = SkimMatcherV2::default().smart_case();

    tickets
        .iter()
        .filter_map(|ticket| {
            let search_text = format!(
                "{} {} {} {}",
                ticket.id,
                ticket.title,
                ticket.category,
                ticket.tags.join(" "),
            );

            matcher
                .fuzzy_match(&search_text, query)
                .map(|score| FilteredTicket {
                    ticket: (*ticket).clone(),
                    score,
                })
        })
        .collect()
}
