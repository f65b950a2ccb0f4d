use rand::Rng;
use std::fmt;

use crate::{
    game::{GameConfig, POWERBALL_MAX},
    pool::NumberPool,
};

/// Progress through the current round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub picks_so_far: u8,
    pub round: u32,
    pub pool: NumberPool,
}

impl RoundState {
    pub fn new(max_number: u8) -> Self {
        Self {
            picks_so_far: 0,
            round: 1,
            pool: NumberPool::initialize(max_number),
        }
    }

    fn restart(&mut self) {
        self.pool.reset();
        self.picks_so_far = 0;
        self.round += 1;
    }
}

/// One drawn number and where it sits in its round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    pub value: u8,
    pub round: u32,
    /// 1-based position within the round.
    pub position: u8,
    pub first: bool,
    pub last: bool,
    pub powerball: bool,
}

impl fmt::Display for Pick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first {
            write!(f, ".")?;
        }
        write!(f, "{}", self.value)?;
        if self.last {
            write!(f, ".")?;
        }
        if self.powerball {
            write!(f, "PB")?;
        }
        Ok(())
    }
}

/// Owns the game rules and the round in progress.
#[derive(Debug, Clone)]
pub struct DrawSession {
    config: GameConfig,
    state: RoundState,
}

impl DrawSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: RoundState::new(config.max_number),
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn round_complete(&self) -> bool {
        self.state.picks_so_far >= self.config.game_size
    }

    /// One draw action. Starts a new round first if the last one is done.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Pick> {
        if self.round_complete() {
            self.state.restart();
        }

        let picks = self.state.picks_so_far;
        let last = picks + 1 == self.config.game_size;
        let drawn = self.state.pool.draw_and_remove(rng)?;

        // The closing PowerBall pick comes from its own smaller range; the
        // pool entry drawn above is still spent.
        let powerball = last && self.config.has_powerball();
        let value = if powerball {
            rng.gen_range(1..=POWERBALL_MAX)
        } else {
            drawn
        };

        self.state.picks_so_far += 1;
        Some(Pick {
            value,
            round: self.state.round,
            position: picks + 1,
            first: picks == 0,
            last,
            powerball,
        })
    }
}
