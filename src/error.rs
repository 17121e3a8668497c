use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid {kind} identifier: {value:?}")]
    InvalidIdentifier { kind: &'static str, value: String },

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Invalid priority '{0}'. Valid priorities: low, medium, high")]
    InvalidPriority(String),

    #[error("Invalid column name '{0}'. Valid names: Backlog, To Do, In Progress, Review, Done")]
    InvalidColumnName(String),

    #[error("Board not initialized")]
    BoardNotInitialized,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("Configuration encoding error: {0}")]
    ConfigEncodeError(#[from] toml::ser::Error),
}
