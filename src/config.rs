use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{app_dirs::AppDirs, error::LottoError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Highest analog reading (10-bit ADC).
    pub analog_max: i32,
    /// Knob travel per arrow key in the simulator.
    pub pot_step: i32,
    pub tick_ms: u64,
    /// How long the LED/tone stays on after a pick; input is not read meanwhile.
    pub pulse_ms: u64,
    pub seed: Option<u64>,
    pub history: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analog_max: 1023,
            pot_step: 16,
            tick_ms: 50,
            pulse_ms: 100,
            seed: None,
            history: false,
        }
    }
}

impl Config {
    /// Polls skipped after a pick to cover the feedback pulse.
    pub fn quiet_polls(&self) -> u32 {
        if self.tick_ms == 0 {
            return 0;
        }
        (self.pulse_ms / self.tick_ms) as u32
    }

    /// Seeded when the config carries a seed, from entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> Result<(), LottoError>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(cfg) = serde_json::from_slice::<Config>(&bytes) {
                return cfg;
            }
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> Result<(), LottoError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
