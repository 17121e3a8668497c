use crate::{
    domain::{BoardConfig, BoardState},
    error::Result,
};
use async_trait::async_trait;

pub mod file_storage;

pub use file_storage::FileStorage;

/// Storage trait for persisting board snapshots.
///
/// Loaded boards are handed to the engine through `Action::Hydrate`; the
/// engine itself never touches storage.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Initializes the storage backend
    async fn initialize(&self) -> Result<()>;

    /// Saves the board state
    async fn save_board(&self, board: &BoardState) -> Result<()>;

    /// Loads the board state
    async fn load_board(&self) -> Result<BoardState>;

    /// Loads the board configuration, falling back to the default
    async fn load_config(&self) -> Result<BoardConfig>;

    /// Checks if a board has been saved
    async fn is_initialized(&self) -> bool;
}
