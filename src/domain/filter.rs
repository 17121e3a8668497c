use crate::domain::ticket::{Priority, Ticket};
use serde::{Deserialize, Serialize};

/// Criteria for narrowing the visible tickets.
///
/// Empty criteria match everything; all non-empty criteria must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TicketFilter {
    /// Case-insensitive text looked up in title, description and tags
    pub query: String,
    /// Ticket priority must be one of these
    pub priorities: Vec<Priority>,
    /// Ticket must carry at least one of these tags
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

impl TicketFilter {
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.priorities.is_empty()
            && self.tags.is_empty()
            && self.assignee.is_none()
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.matches_query(ticket)
            && (self.priorities.is_empty() || self.priorities.contains(&ticket.priority))
            && (self.tags.is_empty()
                || ticket
                    .tags
                    .iter()
                    .any(|tag| self.tags.iter().any(|wanted| wanted.eq_ignore_ascii_case(tag))))
            && self.assignee.as_ref().map_or(true, |wanted| {
                ticket
                    .assignee
                    .as_ref()
                    .is_some_and(|a| a.eq_ignore_ascii_case(wanted))
            })
    }

    fn matches_query(&self, ticket: &Ticket) -> bool {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        let title_matches = ticket.title.to_lowercase().contains(&query);
        let description_matches = ticket
            .description
            .as_ref()
            .map(|d| d.to_lowercase().contains(&query))
            .unwrap_or(false);
        let tag_matches = ticket
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&query));

        title_matches || description_matches || tag_matches
    }
}
