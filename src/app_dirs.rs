use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> PathBuf {
        if let Some(pd) = ProjectDirs::from("", "", "lottopick") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("lottopick_config.json")
        }
    }

    pub fn history_path() -> PathBuf {
        if let Some(pd) = ProjectDirs::from("", "", "lottopick") {
            pd.data_local_dir().join("history.csv")
        } else {
            PathBuf::from("lottopick_history.csv")
        }
    }
}
