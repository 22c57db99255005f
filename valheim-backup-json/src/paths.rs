use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Resolved against the working directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[cfg(target_os = "windows")]
const SAVE_DIR: &[&str] = &["AppData", "LocalLow", "IronGate", "Valheim", "worlds_local"];
#[cfg(target_os = "macos")]
const SAVE_DIR: &[&str] = &["Library", "Application Support", "IronGate", "Valheim", "worlds_local"];
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const SAVE_DIR: &[&str] = &[".config", "unity3d", "IronGate", "Valheim", "worlds_local"];

pub fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|b| b.home_dir().to_path_buf())
}

pub fn save_dir_under(home: &Path) -> PathBuf {
    SAVE_DIR.iter().fold(home.to_path_buf(), |p, seg| p.join(seg))
}

/// Where Valheim keeps local world saves for the current user.
pub fn default_save_dir() -> Option<PathBuf> {
    home_dir().map(|h| save_dir_under(&h))
}
