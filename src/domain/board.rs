use crate::domain::column::{Column, ColumnName};
use crate::domain::filter::TicketFilter;
use crate::domain::ids::{ColumnId, TicketId};
use crate::domain::project::Project;
use crate::domain::ticket::Ticket;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Board configuration used to seed a fresh project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    pub description: Option<String>,
    pub columns: Vec<ColumnName>,
}

impl BoardConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Default Board".to_string(),
            description: None,
            columns: ColumnName::ALL.to_vec(),
        }
    }
}

/// Immutable snapshot of a project board.
///
/// Collections sit behind `Arc` and are replaced wholesale on change, so a
/// snapshot handed out earlier never observes later transitions and
/// untouched collections are shared between snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    project: Project,
    columns: Arc<Vec<Column>>,
    tickets: Arc<Vec<Ticket>>,
}

impl BoardState {
    pub fn new(project: Project, columns: Vec<Column>, tickets: Vec<Ticket>) -> Self {
        Self {
            project,
            columns: Arc::new(columns),
            tickets: Arc::new(tickets),
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn has_column(&self, id: &ColumnId) -> bool {
        self.column(id).is_some()
    }

    pub fn ticket(&self, id: &TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| &t.id == id)
    }

    /// Tickets in a column, oldest first
    pub fn tickets_in_column(&self, column_id: &ColumnId) -> Vec<&Ticket> {
        let mut tickets: Vec<&Ticket> = self
            .tickets
            .iter()
            .filter(|t| &t.column_id == column_id)
            .collect();
        tickets.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        tickets
    }

    pub fn filtered_tickets(&self, filter: &TicketFilter) -> Vec<&Ticket> {
        self.tickets.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Checks that column positions are exactly `0..len`
    pub fn has_dense_positions(&self) -> bool {
        let mut positions: Vec<usize> = self.columns.iter().map(|c| c.position).collect();
        positions.sort_unstable();
        positions.iter().enumerate().all(|(i, p)| i == *p)
    }

    /// Checks that every ticket points at a column in this snapshot
    pub fn has_valid_references(&self) -> bool {
        self.tickets.iter().all(|t| self.has_column(&t.column_id))
    }

    pub(crate) fn with_columns(&self, columns: Vec<Column>) -> Self {
        Self {
            project: self.project.clone(),
            columns: Arc::new(columns),
            tickets: Arc::clone(&self.tickets),
        }
    }

    pub(crate) fn with_tickets(&self, tickets: Vec<Ticket>) -> Self {
        Self {
            project: self.project.clone(),
            columns: Arc::clone(&self.columns),
            tickets: Arc::new(tickets),
        }
    }

    pub(crate) fn shares_columns_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.columns, &other.columns)
    }

    pub(crate) fn shares_tickets_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tickets, &other.tickets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::{fixed_time, seed_state};

    #[test]
    fn test_default_config_columns() {
        let config = BoardConfig::default();
        assert_eq!(config.name, "Default Board");
        assert_eq!(config.columns.len(), 5);
        assert_eq!(config.columns[0], ColumnName::Backlog);
        assert_eq!(config.columns[4], ColumnName::Done);
    }

    #[test]
    fn test_config_from_toml() {
        let config = BoardConfig::from_toml_str(
            r#"
            name = "Website"
            columns = ["Backlog", "In Progress", "Done"]
            "#,
        )
        .unwrap();

        assert_eq!(config.name, "Website");
        assert!(config.description.is_none());
        assert_eq!(
            config.columns,
            vec![ColumnName::Backlog, ColumnName::InProgress, ColumnName::Done]
        );
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let config = BoardConfig::from_toml_str("name = \"Ops\"").unwrap();
        assert_eq!(config.columns, ColumnName::ALL.to_vec());
    }

    #[test]
    fn test_config_rejects_unknown_column() {
        assert!(BoardConfig::from_toml_str("columns = [\"Archived\"]").is_err());
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = BoardConfig {
            description: Some("Team board".to_string()),
            ..BoardConfig::default()
        };
        let raw = config.to_toml_string().unwrap();
        assert_eq!(BoardConfig::from_toml_str(&raw).unwrap(), config);
    }

    #[test]
    fn test_seed_state_lookups() {
        let (state, backlog, in_progress) = seed_state();

        assert!(state.has_column(&backlog));
        assert_eq!(state.column(&in_progress).unwrap().name, ColumnName::InProgress);
        assert!(state.has_dense_positions());
        assert!(state.has_valid_references());
        assert!(state.tickets().is_empty());
    }

    #[test]
    fn test_dense_positions_detects_gaps() {
        let (state, _, _) = seed_state();
        let mut columns = state.columns().to_vec();
        columns[1].position = 5;
        assert!(!state.with_columns(columns).has_dense_positions());
    }

    #[test]
    fn test_board_state_json_shape() {
        let (state, _, _) = seed_state();
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["project"]["name"], "Project 1");
        assert_eq!(json["columns"][0]["name"], "Backlog");
        assert_eq!(json["columns"][1]["position"], 1);
        assert!(json["tickets"].as_array().unwrap().is_empty());

        let back: BoardState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
        assert_eq!(back.project().created_at, fixed_time());
    }
}
