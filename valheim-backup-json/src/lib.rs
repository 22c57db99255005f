use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{error, info};
use valheim_backup_core::{parse_config, repo::ConfigRepository, Config, ConfigError};

pub mod paths;

/// The configuration store backed by a single JSON file.
///
/// Nothing is cached: every [`load`](Self::load) reads and validates the file
/// again, so hand edits take effect on the next operation.
pub struct JsonConfigStore {
    path: PathBuf,
    save_dir: Option<PathBuf>,
}

impl JsonConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            save_dir: None,
        }
    }

    /// Overrides the local save directory used by interactive generation.
    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = Some(dir.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Failures are returned, not logged; callers decide how to report them.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let meta = fs::metadata(&self.path).map_err(|e| ConfigError::from_io(&self.path, e))?;
        if meta.is_dir() {
            return Err(ConfigError::InvalidPath {
                path: self.path.clone(),
            });
        }
        let bytes = fs::read(&self.path).map_err(|e| ConfigError::from_io(&self.path, e))?;
        let text = std::str::from_utf8(&bytes).map_err(|e| ConfigError::Parse(e.to_string()))?;
        parse_config(text)
    }

    /// Rewrites the whole file through a temp file in the same directory.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        write_atomic(&self.path, config).map_err(|e| {
            error!(path = %self.path.display(), "failed to save config: {e}");
            e
        })?;
        info!(path = %self.path.display(), world = %config.world_file_name, "saved config");
        Ok(())
    }

    pub fn generate_interactive(&self) -> Result<Config, ConfigError> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        self.generate_with(&mut input, &mut io::stdout())
    }

    /// Prompts for the world name and repo path, derives the local save
    /// directory, then saves and returns the new config.
    pub fn generate_with<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<Config, ConfigError> {
        let local_path = match &self.save_dir {
            Some(dir) => dir.clone(),
            None => paths::default_save_dir().ok_or(ConfigError::NoHomeDir)?,
        };

        writeln!(out, "\nNew configuration:\n").map_err(console_err)?;
        let world = prompt(input, out, "  Name of the Valheim world: ")?;
        let repo = prompt(input, out, "  Path to Valheim remote repository: ")?;

        let config = Config::new(world, local_path, repo);
        self.save(&config)?;
        Ok(config)
    }
}

impl ConfigRepository for JsonConfigStore {
    fn load(&self) -> Result<Config, ConfigError> {
        JsonConfigStore::load(self)
    }

    fn save(&self, config: &Config) -> Result<(), ConfigError> {
        JsonConfigStore::save(self, config)
    }
}

fn write_atomic(path: &Path, config: &Config) -> Result<(), ConfigError> {
    // to_vec_pretty indents with two spaces and leaves non-ASCII unescaped
    let json = serde_json::to_vec_pretty(config).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidData, e),
    })?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| ConfigError::from_io(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ConfigError::from_io(dir, e))?;
    tmp.write_all(&json).map_err(|e| ConfigError::from_io(tmp.path(), e))?;
    tmp.flush().map_err(|e| ConfigError::from_io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| ConfigError::from_io(path, e.error))?;
    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<String, ConfigError> {
    loop {
        write!(out, "{label}").map_err(console_err)?;
        out.flush().map_err(console_err)?;

        let mut line = String::new();
        if input.read_line(&mut line).map_err(console_err)? == 0 {
            return Err(console_err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before configuration was complete",
            )));
        }
        let answer = line.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
        writeln!(out, "  A value is required.").map_err(console_err)?;
    }
}

fn console_err(source: io::Error) -> ConfigError {
    ConfigError::Io {
        path: PathBuf::from("<console>"),
        source,
    }
}
