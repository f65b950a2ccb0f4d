use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::LottoError;

/// Largest pool a game may draw from.
pub const MAX_NUMBER_LIMIT: u8 = 45;

/// Range of the separate PowerBall pick that closes a PowerBall round.
pub const POWERBALL_MAX: u8 = 20;

/// Game types in menu order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
pub enum GameType {
    #[value(name = "powerball")]
    PowerBall,
    #[value(name = "ozlotto")]
    OzLotto,
    Lotto,
    Custom,
}

impl GameType {
    pub const MENU: [GameType; 4] = [
        GameType::PowerBall,
        GameType::OzLotto,
        GameType::Lotto,
        GameType::Custom,
    ];

    pub fn from_menu_index(idx: usize) -> Option<Self> {
        Self::MENU.get(idx).copied()
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            GameType::PowerBall => "PowerBall",
            GameType::OzLotto => "OzLotto",
            GameType::Lotto => "Lotto",
            GameType::Custom => "custom",
        }
    }

    /// `(max_number, game_size)` for the fixed games; `None` for Custom.
    pub fn preset(&self) -> Option<(u8, u8)> {
        match self {
            GameType::PowerBall => Some((35, 8)),
            GameType::OzLotto => Some((45, 7)),
            GameType::Lotto => Some((45, 6)),
            GameType::Custom => None,
        }
    }
}

/// Rules of the game being drawn. Fixed once drawing starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub game_type: GameType,
    pub max_number: u8,
    pub game_size: u8,
}

impl GameConfig {
    /// Config for one of the fixed games.
    pub fn preset(game_type: GameType) -> Option<Self> {
        game_type.preset().map(|(max_number, game_size)| Self {
            game_type,
            max_number,
            game_size,
        })
    }

    /// Custom game, validated against `MAX_NUMBER_LIMIT`.
    pub fn custom(max_number: u16, game_size: u16) -> Result<Self, LottoError> {
        if max_number == 0 || max_number > u16::from(MAX_NUMBER_LIMIT) {
            return Err(LottoError::MaxNumber {
                max_number,
                limit: MAX_NUMBER_LIMIT,
            });
        }
        let max_number = max_number as u8;
        if game_size == 0 || game_size > u16::from(max_number) {
            return Err(LottoError::GameSize {
                game_size,
                max_number,
            });
        }
        Ok(Self {
            game_type: GameType::Custom,
            max_number,
            game_size: game_size as u8,
        })
    }

    pub fn has_powerball(&self) -> bool {
        self.game_type == GameType::PowerBall
    }
}
