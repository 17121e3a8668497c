use crate::domain::ids::{ColumnId, ProjectId};
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Status names a board column may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnName {
    Backlog,
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Review,
    Done,
}

impl ColumnName {
    pub const ALL: [ColumnName; 5] = [
        Self::Backlog,
        Self::ToDo,
        Self::InProgress,
        Self::Review,
        Self::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnName {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "In Progress", "in-progress" and "IN_PROGRESS" all name the same column
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "backlog" => Ok(Self::Backlog),
            "todo" => Ok(Self::ToDo),
            "inprogress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            _ => Err(BoardError::InvalidColumnName(s.to_string())),
        }
    }
}

/// A status column on a project board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub project_id: ProjectId,
    pub name: ColumnName,
    /// Dense zero-based rank among the project's columns
    pub position: usize,
}

impl Column {
    pub fn new(id: ColumnId, project_id: ProjectId, name: ColumnName, position: usize) -> Self {
        Self {
            id,
            project_id,
            name,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_name_parsing() {
        assert_eq!("Backlog".parse::<ColumnName>().unwrap(), ColumnName::Backlog);
        assert_eq!("to do".parse::<ColumnName>().unwrap(), ColumnName::ToDo);
        assert_eq!("In Progress".parse::<ColumnName>().unwrap(), ColumnName::InProgress);
        assert_eq!("in-progress".parse::<ColumnName>().unwrap(), ColumnName::InProgress);
        assert_eq!("IN_PROGRESS".parse::<ColumnName>().unwrap(), ColumnName::InProgress);
        assert!("Archived".parse::<ColumnName>().is_err());
    }

    #[test]
    fn test_column_name_display_round_trips() {
        for name in ColumnName::ALL {
            assert_eq!(name.to_string().parse::<ColumnName>().unwrap(), name);
        }
    }

    #[test]
    fn test_column_name_serializes_as_display_name() {
        let json = serde_json::to_string(&ColumnName::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");

        let name: ColumnName = serde_json::from_str("\"To Do\"").unwrap();
        assert_eq!(name, ColumnName::ToDo);
    }
}
