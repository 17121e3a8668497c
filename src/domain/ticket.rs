use crate::domain::ids::{ColumnId, ProjectId, TicketId};
use crate::error::BoardError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

/// Urgency of a ticket, ordered `Low < Medium < High`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl FromStr for Priority {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(BoardError::InvalidPriority(s.to_string())),
        }
    }
}

/// A card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub project_id: ProjectId,
    pub column_id: ColumnId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields for a ticket that has not been created yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    pub title: String,
    pub column_id: ColumnId,
    pub priority: Priority,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewTicket {
    pub fn new(title: impl Into<String>, column_id: ColumnId, priority: Priority) -> Self {
        Self {
            title: title.into(),
            column_id,
            priority,
            assignee: None,
            due_date: None,
            tags: None,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Builds the ticket, defaulting absent tags to an empty list
    pub fn into_ticket(self, id: TicketId, project_id: ProjectId, now: DateTime<Utc>) -> Ticket {
        Ticket {
            id,
            project_id,
            column_id: self.column_id,
            title: self.title,
            description: self.description,
            priority: self.priority,
            assignee: self.assignee,
            due_date: self.due_date,
            tags: self.tags.unwrap_or_default(),
            created_at: now,
            updated_at: None,
        }
    }
}

/// Partial update for an existing ticket.
///
/// `None` leaves a field alone. For optional ticket fields `Some(None)`
/// clears the value; on the wire that is an explicit `null`, while an absent
/// key leaves the field alone. `id` and `project_id` are accepted so that a patch
/// built from a whole ticket deserializes, but they are never applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TicketId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_id: Option<ColumnId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub assignee: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Maps a present key to `Some`, so an explicit `null` becomes `Some(None)`
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl TicketPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Returns `base` with the patch merged in; identity fields come from `base`
    pub fn merge_onto(self, base: &Ticket) -> Ticket {
        Ticket {
            id: base.id,
            project_id: base.project_id,
            column_id: self.column_id.unwrap_or(base.column_id),
            title: self.title.unwrap_or_else(|| base.title.clone()),
            description: self.description.unwrap_or_else(|| base.description.clone()),
            priority: self.priority.unwrap_or(base.priority),
            assignee: self.assignee.unwrap_or_else(|| base.assignee.clone()),
            due_date: self.due_date.unwrap_or(base.due_date),
            tags: self.tags.unwrap_or_else(|| base.tags.clone()),
            created_at: base.created_at,
            updated_at: base.updated_at,
        }
    }
}
