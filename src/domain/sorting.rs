use crate::domain::ticket::Ticket;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::str::FromStr;

/// Fields available for sorting tickets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Priority,
    Created,
    Updated,
    Due,
}

/// Sort order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SortField::Title),
            "priority" => Ok(SortField::Priority),
            "created" => Ok(SortField::Created),
            "updated" => Ok(SortField::Updated),
            "due" => Ok(SortField::Due),
            _ => Err(format!(
                "Invalid sort field '{}'. Valid fields: title, priority, created, updated, due",
                s
            )),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            _ => Err(format!(
                "Invalid sort order '{}'. Valid orders: asc, desc",
                s
            )),
        }
    }
}

/// Sorts tickets in place by `field` in the given `order`.
///
/// The sort is stable. For `Updated` and `Due`, tickets without a date go
/// last in both directions.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use kanban_state::domain::ids::{ColumnId, ProjectId, TicketId};
/// use kanban_state::domain::sorting::{sort_tickets, SortField, SortOrder};
/// use kanban_state::domain::ticket::{NewTicket, Priority};
/// use uuid::Uuid;
///
/// let column = ColumnId::from_uuid(Uuid::from_u128(2));
/// let project = ProjectId::from_uuid(Uuid::from_u128(1));
/// let mut tickets: Vec<_> = [("b", Priority::High), ("a", Priority::Low)]
///     .into_iter()
///     .enumerate()
///     .map(|(i, (title, priority))| {
///         NewTicket::new(title, column, priority).into_ticket(
///             TicketId::from_uuid(Uuid::from_u128(10 + i as u128)),
///             project,
///             Utc::now(),
///         )
///     })
///     .collect();
///
/// sort_tickets(&mut tickets, SortField::Priority, SortOrder::Descending);
/// assert_eq!(tickets[0].title, "b");
/// ```
pub fn sort_tickets(tickets: &mut [Ticket], field: SortField, order: SortOrder) {
    tickets.sort_by(|a, b| match field {
        SortField::Title => directed(a.title.to_lowercase().cmp(&b.title.to_lowercase()), order),
        SortField::Priority => directed(a.priority.cmp(&b.priority), order),
        SortField::Created => directed(a.created_at.cmp(&b.created_at), order),
        SortField::Updated => compare_option_dates(a.updated_at, b.updated_at, order),
        SortField::Due => compare_option_dates(a.due_date, b.due_date, order),
    });
}

fn directed(cmp: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => cmp,
        SortOrder::Descending => cmp.reverse(),
    }
}

/// Compare Option<DateTime> with None always sorting to end
fn compare_option_dates(
    a: Option<DateTime<Utc>>,
    b: Option<DateTime<Utc>>,
    order: SortOrder,
) -> Ordering {
    match (a, b) {
        (Some(a_date), Some(b_date)) => directed(a_date.cmp(&b_date), order),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
