use crate::{ConfigRepository, Direction};
use std::fs::{self, FileTimes, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { bytes: u64 },
    Missing,
    Failed { reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileCopy {
    pub file: String,
    pub outcome: CopyOutcome,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyReport {
    pub src: PathBuf,
    pub dst: PathBuf,
    pub files: Vec<FileCopy>,
}

impl CopyReport {
    pub fn copied(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, CopyOutcome::Copied { .. }))
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.copied() == self.files.len()
    }
}

/// Copies a world's save pair between the configured directories.
pub struct FileSynchronizer {
    repo: Arc<dyn ConfigRepository>,
}

impl FileSynchronizer {
    pub fn new(repo: Arc<dyn ConfigRepository>) -> Self {
        Self { repo }
    }

    /// Copies each of `files` from `src` to `dst`. A failure on one file is
    /// logged and does not stop the rest.
    pub fn copy_pair<S: AsRef<str>>(&self, src: &Path, dst: &Path, files: &[S]) -> CopyReport {
        let mut report = CopyReport {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
            files: Vec::with_capacity(files.len()),
        };

        for name in files {
            let name = name.as_ref();
            let src_file = src.join(name);
            let dst_file = dst.join(name);
            let outcome = match copy_preserving_times(&src_file, &dst_file) {
                Ok(bytes) => {
                    info!(file = name, src = %src.display(), dst = %dst.display(), bytes, "copied world file");
                    CopyOutcome::Copied { bytes }
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound && !src_file.exists() => {
                    warn!(path = %src_file.display(), "file not found: {e}");
                    CopyOutcome::Missing
                }
                Err(e) => {
                    error!(file = name, src = %src.display(), dst = %dst.display(), "error copying file: {e}");
                    CopyOutcome::Failed { reason: e.to_string() }
                }
            };
            report.files.push(FileCopy {
                file: name.to_string(),
                outcome,
            });
        }

        report
    }

    /// Loads the current config and copies its world pair in `direction`.
    /// Config failures are logged and yield `None`; nothing is propagated.
    pub fn sync(&self, direction: Direction) -> Option<CopyReport> {
        let config = match self.repo.load() {
            Ok(c) => c,
            Err(e) => {
                error!(%direction, "an error occurred while syncing files: {e}");
                return None;
            }
        };
        let files = config.world_files();
        let (src, dst) = config.endpoints(direction);
        info!(%direction, world = %config.world_file_name, "syncing world files");
        Some(self.copy_pair(src, dst, &files))
    }

    /// Text entry point for menu-style callers; unknown actions are a warning, not an error.
    pub fn sync_action(&self, action: &str) -> Option<CopyReport> {
        match action.parse::<Direction>() {
            Ok(direction) => self.sync(direction),
            Err(e) => {
                warn!("{e}");
                None
            }
        }
    }
}

fn copy_preserving_times(src: &Path, dst: &Path) -> io::Result<u64> {
    if dst.exists() && fs::canonicalize(src)? == fs::canonicalize(dst)? {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source and destination are the same file",
        ));
    }
    let bytes = fs::copy(src, dst)?;
    // data is in place at this point; a timestamp failure does not undo the copy
    if let Err(e) = copy_times(src, dst) {
        warn!(path = %dst.display(), "copied but could not preserve timestamps: {e}");
    }
    Ok(bytes)
}

fn copy_times(src: &Path, dst: &Path) -> io::Result<()> {
    let meta = fs::metadata(src)?;
    let mut times = FileTimes::new().set_modified(meta.modified()?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    OpenOptions::new().write(true).open(dst)?.set_times(times)
}
