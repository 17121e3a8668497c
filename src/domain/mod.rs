pub mod action;
pub mod board;
pub mod column;
pub mod email;
pub mod engine;
pub mod filter;
pub mod ids;
pub mod project;
pub mod sorting;
pub mod ticket;

#[cfg(test)]
pub(crate) mod test_support;

pub use action::Action;
pub use board::{BoardConfig, BoardState};
pub use column::{Column, ColumnName};
pub use email::Email;
pub use engine::BoardEngine;
pub use filter::TicketFilter;
pub use ids::{ColumnId, Id, IdGenerator, IdKind, ProjectId, RandomIdGenerator, TicketId};
pub use project::Project;
pub use sorting::{sort_tickets, SortField, SortOrder};
pub use ticket::{NewTicket, Priority, Ticket, TicketPatch};
