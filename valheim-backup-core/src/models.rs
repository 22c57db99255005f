use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DB_EXTENSION: &str = "db";
pub const FWL_EXTENSION: &str = "fwl";

pub const FIELD_WORLD_FILE_NAME: &str = "world_file_name";
pub const FIELD_LOCAL_PATH: &str = "local_path";
pub const FIELD_REPO_PATH: &str = "repo_path";

pub const REQUIRED_FIELDS: [&str; 3] = [FIELD_WORLD_FILE_NAME, FIELD_LOCAL_PATH, FIELD_REPO_PATH];

/// The persisted backup configuration. Field order here is the order written to disk.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Config {
    pub world_file_name: String,
    pub local_path: PathBuf,
    pub repo_path: PathBuf,
}

impl Config {
    pub fn new(
        world_file_name: impl Into<String>,
        local_path: impl Into<PathBuf>,
        repo_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            world_file_name: world_file_name.into(),
            local_path: local_path.into(),
            repo_path: repo_path.into(),
        }
    }

    pub fn world_files(&self) -> [String; 2] {
        world_files(&self.world_file_name)
    }

    /// Source and destination directories for a copy in `direction`.
    pub fn endpoints(&self, direction: Direction) -> (&Path, &Path) {
        match direction {
            Direction::Upload => (self.local_path.as_path(), self.repo_path.as_path()),
            Direction::Download => (self.repo_path.as_path(), self.local_path.as_path()),
        }
    }
}

/// The `.db`/`.fwl` pair that makes up one world save.
pub fn world_files(world: &str) -> [String; 2] {
    [
        format!("{world}.{DB_EXTENSION}"),
        format!("{world}.{FWL_EXTENSION}"),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Upload,
    Download,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Upload => "upload",
            Direction::Download => "download",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action: {}", self.0)
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for Direction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upload" => Ok(Direction::Upload),
            "download" => Ok(Direction::Download),
            _ => Err(UnknownAction(s.to_string())),
        }
    }
}
