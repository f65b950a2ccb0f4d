use thiserror::Error;

#[derive(Debug, Error)]
pub enum LottoError {
    #[error("max number must be between 1 and {limit}, got {max_number}")]
    MaxNumber { max_number: u16, limit: u8 },
    #[error("game size must be between 1 and the max number {max_number}, got {game_size}")]
    GameSize { game_size: u16, max_number: u8 },
    #[error("custom game needs both --max-number and --game-size")]
    MissingCustomParams,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("history error: {0}")]
    History(#[from] csv::Error),
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
