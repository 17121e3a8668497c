use crate::{
    domain::{BoardConfig, BoardState},
    error::{BoardError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// File-based storage implementation
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const KANBAN_DIR: &'static str = ".kanban";
    const BOARD_FILE: &'static str = "board.json";
    const CONFIG_FILE: &'static str = "config.toml";

    /// Creates a new FileStorage instance for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::KANBAN_DIR),
        }
    }

    fn board_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARD_FILE)
    }

    fn config_file(&self) -> PathBuf {
        self.root_path.join(Self::CONFIG_FILE)
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        // Write the default config so it can be edited before the first board
        let config_path = self.config_file();
        if !config_path.exists() {
            let raw = BoardConfig::default().to_toml_string()?;
            fs::write(&config_path, raw).await?;
        }

        info!(path = %self.root_path.display(), "Initialized board storage");
        Ok(())
    }

    async fn save_board(&self, board: &BoardState) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        let json = serde_json::to_string_pretty(board)?;
        fs::write(self.board_file(), json).await?;

        debug!(
            project = %board.project().id,
            columns = board.columns().len(),
            tickets = board.tickets().len(),
            "Saved board"
        );
        Ok(())
    }

    async fn load_board(&self) -> Result<BoardState> {
        let board_file = self.board_file();

        if !board_file.exists() {
            return Err(BoardError::BoardNotInitialized);
        }

        let contents = fs::read_to_string(&board_file).await?;
        let board: BoardState = serde_json::from_str(&contents)?;

        debug!(project = %board.project().id, "Loaded board");
        Ok(board)
    }

    async fn load_config(&self) -> Result<BoardConfig> {
        let config_path = self.config_file();

        if !config_path.exists() {
            return Ok(BoardConfig::default());
        }

        let contents = fs::read_to_string(&config_path).await?;
        BoardConfig::from_toml_str(&contents)
    }

    async fn is_initialized(&self) -> bool {
        self.root_path.exists() && self.board_file().exists()
    }
}
