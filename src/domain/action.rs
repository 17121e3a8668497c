use crate::domain::board::BoardState;
use crate::domain::column::ColumnName;
use crate::domain::ids::{ColumnId, TicketId};
use crate::domain::ticket::{NewTicket, TicketPatch};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Requested change to a board.
///
/// On the wire an action is `{"type": "MOVE_TICKET", "payload": {...}}`.
/// Any `type` this crate does not know becomes [`Action::Unrecognized`],
/// whatever its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    /// Replace the whole state, e.g. after loading it from storage
    Hydrate { state: BoardState },
    AddTicket(NewTicket),
    UpdateTicket { id: TicketId, patch: TicketPatch },
    MoveTicket {
        id: TicketId,
        to_column_id: ColumnId,
        /// Accepted for compatibility; tickets have no rank within a column
        to_index: Option<usize>,
    },
    DeleteTicket { id: TicketId },
    AddColumn { name: ColumnName, position: Option<usize> },
    ReorderColumn { id: ColumnId, new_position: usize },
    Unrecognized,
}

impl Action {
    const KNOWN_KINDS: [&'static str; 7] = [
        "HYDRATE",
        "ADD_TICKET",
        "UPDATE_TICKET",
        "MOVE_TICKET",
        "DELETE_TICKET",
        "ADD_COLUMN",
        "REORDER_COLUMN",
    ];

    /// Wire tag of the action
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Hydrate { .. } => "HYDRATE",
            Self::AddTicket(_) => "ADD_TICKET",
            Self::UpdateTicket { .. } => "UPDATE_TICKET",
            Self::MoveTicket { .. } => "MOVE_TICKET",
            Self::DeleteTicket { .. } => "DELETE_TICKET",
            Self::AddColumn { .. } => "ADD_COLUMN",
            Self::ReorderColumn { .. } => "REORDER_COLUMN",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}

/// Outer shape shared by every action, known or not
#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Option<Value>,
}

/// Decoding target for the tags this crate understands
#[derive(Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
enum KnownAction {
    Hydrate {
        state: BoardState,
    },
    AddTicket(NewTicket),
    UpdateTicket {
        id: TicketId,
        patch: TicketPatch,
    },
    MoveTicket {
        id: TicketId,
        to_column_id: ColumnId,
        #[serde(default)]
        to_index: Option<usize>,
    },
    DeleteTicket {
        id: TicketId,
    },
    AddColumn {
        name: ColumnName,
        #[serde(default)]
        position: Option<usize>,
    },
    ReorderColumn {
        id: ColumnId,
        new_position: usize,
    },
}

impl From<KnownAction> for Action {
    fn from(known: KnownAction) -> Self {
        match known {
            KnownAction::Hydrate { state } => Self::Hydrate { state },
            KnownAction::AddTicket(new) => Self::AddTicket(new),
            KnownAction::UpdateTicket { id, patch } => Self::UpdateTicket { id, patch },
            KnownAction::MoveTicket {
                id,
                to_column_id,
                to_index,
            } => Self::MoveTicket {
                id,
                to_column_id,
                to_index,
            },
            KnownAction::DeleteTicket { id } => Self::DeleteTicket { id },
            KnownAction::AddColumn { name, position } => Self::AddColumn { name, position },
            KnownAction::ReorderColumn { id, new_position } => {
                Self::ReorderColumn { id, new_position }
            }
        }
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Envelope { kind, payload } = Envelope::deserialize(deserializer)?;
        if !Self::KNOWN_KINDS.contains(&kind.as_str()) {
            return Ok(Self::Unrecognized);
        }

        let mut tagged = Map::new();
        tagged.insert("type".to_string(), Value::String(kind));
        if let Some(payload) = payload {
            tagged.insert("payload".to_string(), payload);
        }
        serde_json::from_value::<KnownAction>(Value::Object(tagged))
            .map(Self::from)
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ticket::Priority;

    const COLUMN: &str = "00000000-0000-0000-0000-00000000000a";
    const TICKET: &str = "00000000-0000-0000-0000-000000001000";

    #[test]
    fn test_add_ticket_from_wire() {
        let raw = format!(
            r#"{{"type":"ADD_TICKET","payload":{{"title":"New Ticket","columnId":"{COLUMN}","priority":"low","tags":["bug"]}}}}"#
        );
        let action: Action = serde_json::from_str(&raw).unwrap();

        match action {
            Action::AddTicket(new) => {
                assert_eq!(new.title, "New Ticket");
                assert_eq!(new.column_id.to_string(), COLUMN);
                assert_eq!(new.priority, Priority::Low);
                assert_eq!(new.tags, Some(vec!["bug".to_string()]));
                assert!(new.assignee.is_none());
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_move_ticket_from_wire() {
        let raw = format!(
            r#"{{"type":"MOVE_TICKET","payload":{{"id":"{TICKET}","toColumnId":"{COLUMN}","toIndex":0}}}}"#
        );
        let action: Action = serde_json::from_str(&raw).unwrap();
        assert_eq!(action.kind(), "MOVE_TICKET");
        assert!(matches!(action, Action::MoveTicket { to_index: Some(0), .. }));
    }

    #[test]
    fn test_add_column_position_is_optional() {
        let action: Action =
            serde_json::from_str(r#"{"type":"ADD_COLUMN","payload":{"name":"Review"}}"#).unwrap();
        assert_eq!(
            action,
            Action::AddColumn {
                name: ColumnName::Review,
                position: None
            }
        );
    }

    #[test]
    fn test_unknown_tag_is_unrecognized() {
        let action: Action = serde_json::from_str(r#"{"type":"ARCHIVE_BOARD"}"#).unwrap();
        assert_eq!(action, Action::Unrecognized);
    }

    #[test]
    fn test_unknown_tag_with_payload_is_unrecognized() {
        let raw = format!(
            r#"{{"type":"ARCHIVE_BOARD","payload":{{"id":"{TICKET}","reason":"stale","nested":[1,2]}}}}"#
        );
        let action: Action = serde_json::from_str(&raw).unwrap();
        assert_eq!(action, Action::Unrecognized);

        let action: Action =
            serde_json::from_str(r#"{"type":"ARCHIVE_BOARD","payload":null}"#).unwrap();
        assert_eq!(action, Action::Unrecognized);
    }

    #[test]
    fn test_known_tag_with_bad_payload_is_an_error() {
        let missing = serde_json::from_str::<Action>(r#"{"type":"DELETE_TICKET"}"#);
        assert!(missing.is_err());

        let malformed =
            serde_json::from_str::<Action>(r#"{"type":"DELETE_TICKET","payload":{"id":"x"}}"#);
        assert!(malformed.is_err());
    }

    #[test]
    fn test_actions_survive_json_round_trip() {
        let actions = vec![
            Action::MoveTicket {
                id: TICKET.parse().unwrap(),
                to_column_id: COLUMN.parse().unwrap(),
                to_index: None,
            },
            Action::ReorderColumn {
                id: COLUMN.parse().unwrap(),
                new_position: 3,
            },
            Action::UpdateTicket {
                id: TICKET.parse().unwrap(),
                patch: TicketPatch {
                    assignee: Some(None),
                    ..TicketPatch::title("Unassigned")
                },
            },
            Action::Unrecognized,
        ];
        for action in actions {
            let json = serde_json::to_string(&action).unwrap();
            let back: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(back, action);
        }
    }

    #[test]
    fn test_update_ticket_serializes_with_tag_and_payload() {
        let action = Action::UpdateTicket {
            id: TICKET.parse().unwrap(),
            patch: TicketPatch::title("T1 updated"),
        };
        let json = serde_json::to_value(&action).unwrap();

        assert_eq!(json["type"], "UPDATE_TICKET");
        assert_eq!(json["payload"]["id"], TICKET);
        assert_eq!(json["payload"]["patch"]["title"], "T1 updated");
    }
}
