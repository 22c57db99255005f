use crate::cli::menu;
use crate::cli::opts::*;

use anyhow::Result;
use std::io::{self, stdout, BufRead, Write};
use std::sync::Arc;
use tracing::info;
use valheim_backup_core::{inspect, Config, CopyOutcome, CopyReport, Direction, FileState, FileSynchronizer};
use valheim_backup_json::JsonConfigStore;

pub fn run_cli(args: Cli) -> Result<()> {
    let store = Arc::new(JsonConfigStore::new(args.config.clone()));
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = stdout();

    match args.cmd.unwrap_or(Command::Menu) {
        Command::Upload => sync_cmd(store, Direction::Upload, &mut input, &mut out),
        Command::Download => sync_cmd(store, Direction::Download, &mut input, &mut out),
        Command::Show => {
            let cfg = load_or_generate(&store, &mut input, &mut out)?;
            print_config(&mut out, &cfg)?;
            Ok(())
        }
        Command::Init => {
            let cfg = store.generate_with(&mut input, &mut out)?;
            print_config(&mut out, &cfg)?;
            Ok(())
        }
        Command::Status => {
            let cfg = load_or_generate(&store, &mut input, &mut out)?;
            print_status(&mut out, &cfg)?;
            Ok(())
        }
        Command::Menu => menu::run(store, &mut input, &mut out),
    }
}

/// Missing config means first run: build one interactively. Any other
/// problem with the file is reported to the caller.
pub fn load_or_generate(store: &JsonConfigStore, input: &mut impl BufRead, out: &mut impl Write) -> Result<Config> {
    match store.load() {
        Ok(cfg) => Ok(cfg),
        Err(e) if e.is_not_found() => {
            writeln!(out, "Config file not found.")?;
            Ok(store.generate_with(input, out)?)
        }
        Err(e) => Err(e.into()),
    }
}

fn sync_cmd(
    store: Arc<JsonConfigStore>,
    direction: Direction,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    // only a missing file is handled here; the synchronizer loads and reports everything else
    if !store.path().exists() {
        writeln!(out, "Config file not found.")?;
        store.generate_with(input, out)?;
    }
    let sync = FileSynchronizer::new(store);
    print_report(out, direction, sync.sync(direction).as_ref())?;
    Ok(())
}

pub fn print_config(out: &mut impl Write, cfg: &Config) -> io::Result<()> {
    writeln!(out, "\nCurrent configuration:\n")?;
    writeln!(out, "  World Name: {}", cfg.world_file_name)?;
    writeln!(out, "  Valheim Save Location: {}", cfg.local_path.display())?;
    writeln!(out, "  Repo Path: {}", cfg.repo_path.display())
}

pub fn print_report(out: &mut impl Write, direction: Direction, report: Option<&CopyReport>) -> io::Result<()> {
    let Some(report) = report else {
        return writeln!(out, "{direction} did not run, check the log for details");
    };
    for f in &report.files {
        match &f.outcome {
            CopyOutcome::Copied { bytes } => writeln!(out, "  {}: copied ({bytes} bytes)", f.file)?,
            CopyOutcome::Missing => writeln!(out, "  {}: not found in {}", f.file, report.src.display())?,
            CopyOutcome::Failed { reason } => writeln!(out, "  {}: failed ({reason})", f.file)?,
        }
    }
    info!(%direction, copied = report.copied(), total = report.files.len(), "sync finished");
    writeln!(out, "{direction}: {}/{} files copied", report.copied(), report.files.len())
}

pub fn print_status(out: &mut impl Write, cfg: &Config) -> io::Result<()> {
    for st in inspect(cfg) {
        writeln!(out, "{}", st.file)?;
        writeln!(out, "  local: {}", describe(st.local.as_ref()))?;
        writeln!(out, "  repo:  {}", describe(st.repo.as_ref()))?;
    }
    Ok(())
}

fn describe(state: Option<&FileState>) -> String {
    match state {
        None => "missing".to_string(),
        Some(s) => match s.modified {
            Some(t) => format!("{} bytes, modified {}", s.size, t.format("%Y-%m-%d %H:%M:%S")),
            None => format!("{} bytes", s.size),
        },
    }
}
