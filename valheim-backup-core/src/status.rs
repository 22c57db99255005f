use crate::Config;
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileState {
    pub size: u64,
    pub modified: Option<DateTime<Local>>,
}

/// Presence and timestamps of one world file on both sides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileStatus {
    pub file: String,
    pub local: Option<FileState>,
    pub repo: Option<FileState>,
}

pub fn inspect(config: &Config) -> Vec<FileStatus> {
    config
        .world_files()
        .into_iter()
        .map(|file| FileStatus {
            local: file_state(&config.local_path.join(&file)),
            repo: file_state(&config.repo_path.join(&file)),
            file,
        })
        .collect()
}

fn file_state(path: &Path) -> Option<FileState> {
    let meta = fs::metadata(path).ok().filter(|m| m.is_file())?;
    Some(FileState {
        size: meta.len(),
        modified: meta.modified().ok().map(DateTime::<Local>::from),
    })
}
