//! The board state engine: a pure transition from `(state, action)` to the
//! next state.
//!
//! Unmet preconditions (unknown ticket, unknown column, unrecognized action)
//! never fail; the input state comes back unchanged. Identity minting and the
//! clock are the only effects, and both are injected.

use crate::domain::action::Action;
use crate::domain::board::{BoardConfig, BoardState};
use crate::domain::column::{Column, ColumnName};
use crate::domain::ids::{ColumnId, IdGenerator, RandomIdGenerator, TicketId};
use crate::domain::project::Project;
use crate::domain::ticket::{NewTicket, TicketPatch};
use mockable::{Clock, DefaultClock};

pub struct BoardEngine<G = RandomIdGenerator, C = DefaultClock> {
    ids: G,
    clock: C,
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new(RandomIdGenerator, DefaultClock)
    }
}

impl<G: IdGenerator, C: Clock> BoardEngine<G, C> {
    pub fn new(ids: G, clock: C) -> Self {
        Self { ids, clock }
    }

    /// Builds a fresh board for `config` with its columns at dense positions
    pub fn seed(&self, config: &BoardConfig) -> BoardState {
        let mut project = Project::new(self.ids.mint(), config.name.clone(), self.clock.utc());
        project.description = config.description.clone();

        let columns = config
            .columns
            .iter()
            .enumerate()
            .map(|(position, name)| Column::new(self.ids.mint(), project.id, *name, position))
            .collect();

        BoardState::new(project, columns, Vec::new())
    }

    /// Applies `action` to `state`, returning the next snapshot
    pub fn apply(&self, state: &BoardState, action: Action) -> BoardState {
        match action {
            Action::Hydrate { state } => state,
            Action::AddTicket(new) => self.add_ticket(state, new),
            Action::UpdateTicket { id, patch } => self.update_ticket(state, &id, patch),
            // Tickets carry no rank within a column, so `to_index` has nothing to order
            Action::MoveTicket {
                id,
                to_column_id,
                to_index: _,
            } => self.move_ticket(state, &id, &to_column_id),
            Action::DeleteTicket { id } => delete_ticket(state, &id),
            Action::AddColumn { name, position } => self.add_column(state, name, position),
            Action::ReorderColumn { id, new_position } => {
                reorder_column(state, &id, new_position)
            }
            Action::Unrecognized => state.clone(),
        }
    }

    fn add_ticket(&self, state: &BoardState, new: NewTicket) -> BoardState {
        if !state.has_column(&new.column_id) {
            return state.clone();
        }

        let ticket = new.into_ticket(self.ids.mint(), state.project().id, self.clock.utc());
        let mut tickets = state.tickets().to_vec();
        tickets.push(ticket);
        state.with_tickets(tickets)
    }

    fn update_ticket(&self, state: &BoardState, id: &TicketId, patch: TicketPatch) -> BoardState {
        let Some(idx) = state.tickets().iter().position(|t| &t.id == id) else {
            return state.clone();
        };
        if let Some(column_id) = &patch.column_id {
            if !state.has_column(column_id) {
                return state.clone();
            }
        }

        let mut tickets = state.tickets().to_vec();
        let mut updated = patch.merge_onto(&tickets[idx]);
        updated.updated_at = Some(self.clock.utc());
        tickets[idx] = updated;
        state.with_tickets(tickets)
    }

    fn move_ticket(
        &self,
        state: &BoardState,
        id: &TicketId,
        to_column_id: &ColumnId,
    ) -> BoardState {
        if state.ticket(id).is_none() || !state.has_column(to_column_id) {
            return state.clone();
        }

        let now = self.clock.utc();
        let tickets = state
            .tickets()
            .iter()
            .map(|t| {
                let mut t = t.clone();
                if &t.id == id {
                    t.column_id = *to_column_id;
                    t.updated_at = Some(now);
                }
                t
            })
            .collect();
        state.with_tickets(tickets)
    }

    fn add_column(
        &self,
        state: &BoardState,
        name: ColumnName,
        position: Option<usize>,
    ) -> BoardState {
        let mut columns = ranked(state.columns());
        let index = position.map_or(columns.len(), |p| p.min(columns.len()));
        let column = Column::new(self.ids.mint(), state.project().id, name, index);

        columns.insert(index, column);
        state.with_columns(renumbered(columns))
    }
}

fn delete_ticket(state: &BoardState, id: &TicketId) -> BoardState {
    if state.ticket(id).is_none() {
        return state.clone();
    }

    let tickets = state
        .tickets()
        .iter()
        .filter(|t| &t.id != id)
        .cloned()
        .collect();
    state.with_tickets(tickets)
}

fn reorder_column(state: &BoardState, id: &ColumnId, new_position: usize) -> BoardState {
    let mut columns = ranked(state.columns());
    let Some(idx) = columns.iter().position(|c| &c.id == id) else {
        return state.clone();
    };

    let column = columns.remove(idx);
    let index = new_position.min(columns.len());
    columns.insert(index, column);
    state.with_columns(renumbered(columns))
}

/// Columns in rank order; ties keep their sequence order
fn ranked(columns: &[Column]) -> Vec<Column> {
    let mut columns = columns.to_vec();
    columns.sort_by_key(|c| c.position);
    columns
}

fn renumbered(columns: Vec<Column>) -> Vec<Column> {
    columns
        .into_iter()
        .enumerate()
        .map(|(position, column)| Column { position, ..column })
        .collect()
}
