use crate::cli::commands::{print_config, print_report, print_status};

use anyhow::Result;
use std::io::{BufRead, Write};
use std::sync::Arc;
use valheim_backup_core::{Direction, FileSynchronizer};
use valheim_backup_json::JsonConfigStore;

const TITLE: &str = "Valheim Backup Utility";

/// Console menu. Returns on `0` or when input is closed.
pub fn run<R: BufRead, W: Write>(store: Arc<JsonConfigStore>, input: &mut R, out: &mut W) -> Result<()> {
    let sync = FileSynchronizer::new(store.clone());

    loop {
        header(out)?;
        writeln!(out, "Loading config file...")?;
        match store.load() {
            Ok(_) => {}
            Err(e) if e.is_not_found() => {
                writeln!(out, "Config file not found.")?;
                if let Err(e) = store.generate_with(input, out) {
                    writeln!(out, "Could not create config: {e}")?;
                }
            }
            Err(e) => writeln!(out, "{e}\nChoose 4 to regenerate the config.")?,
        }

        options(out)?;
        write!(out, "Choose an option (1-5, 0 to exit): ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match line.trim() {
            "1" => print_report(out, Direction::Upload, sync.sync(Direction::Upload).as_ref())?,
            "2" => print_report(out, Direction::Download, sync.sync(Direction::Download).as_ref())?,
            "3" => match store.load() {
                Ok(cfg) => print_config(out, &cfg)?,
                Err(e) => writeln!(out, "{e}")?,
            },
            "4" => {
                if let Err(e) = store.generate_with(input, out) {
                    writeln!(out, "Could not create config: {e}")?;
                }
            }
            "5" => match store.load() {
                Ok(cfg) => print_status(out, &cfg)?,
                Err(e) => writeln!(out, "{e}")?,
            },
            "0" => {
                writeln!(out, "Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(out, "Not an option. Try again.")?,
        }
    }
}

fn header(out: &mut impl Write) -> std::io::Result<()> {
    let border = "-".repeat(TITLE.len());
    writeln!(out, "{border}\n{TITLE}\n{border}")
}

fn options(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "(1) Upload world files to repository")?;
    writeln!(out, "(2) Download world files from repository")?;
    writeln!(out, "(3) Read current config")?;
    writeln!(out, "(4) Regenerate config")?;
    writeln!(out, "(5) Show world file status")
}
