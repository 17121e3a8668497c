//! # Kanban State
//!
//! Client-side state container for a kanban project board.
//!
//! The heart of the crate is [`BoardEngine::apply`], a pure transition from
//! a [`BoardState`] snapshot and an [`Action`] to the next snapshot. Identity
//! minting and the clock are injected so transitions stay deterministic under
//! test. [`BoardStore`] hosts the current snapshot for callers that share it,
//! and [`storage`] persists snapshots outside the engine.

pub mod domain;
pub mod error;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use domain::{
    action::Action,
    board::{BoardConfig, BoardState},
    column::{Column, ColumnName},
    engine::BoardEngine,
    ids::{ColumnId, ProjectId, TicketId},
    ticket::{NewTicket, Priority, Ticket, TicketPatch},
};
pub use error::{BoardError, Result};
pub use storage::Storage;
pub use store::BoardStore;
