use chrono::Local;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::{draw::Pick, error::LottoError, game::GameConfig};

#[derive(Debug, Serialize)]
struct HistoryRecord<'a> {
    date: String,
    game: &'a str,
    max_number: u8,
    game_size: u8,
    round: u32,
    pick: u8,
    value: u8,
    powerball: bool,
}

/// Append-only CSV of every pick. Write-only; nothing reads it back.
#[derive(Debug, Clone)]
pub struct DrawHistory {
    path: PathBuf,
}

impl DrawHistory {
    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    /// `history.csv` next to the config file.
    pub fn default_location() -> Self {
        Self::with_path(crate::app_dirs::AppDirs::history_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self, game: &GameConfig, pick: &Pick) -> Result<(), LottoError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // If the file doesn't exist yet, the writer emits the header
        let needs_header = !self.path.exists();

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);

        let game_name = game.game_type.to_string();
        writer.serialize(HistoryRecord {
            date: Local::now().format("%c").to_string(),
            game: &game_name,
            max_number: game.max_number,
            game_size: game.game_size,
            round: pick.round,
            pick: pick.position,
            value: pick.value,
            powerball: pick.powerball,
        })?;
        writer.flush()?;
        Ok(())
    }
}
