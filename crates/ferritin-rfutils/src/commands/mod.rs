pub mod job_name;
pub mod legend;
pub mod msa;
pub mod renumber;

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Write to `path`, or to stdout when no path is given.
pub(crate) fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => {
            info!("Writing {:?}", path);
            fs::write(path, contents).with_context(|| format!("failed to write {:?}", path))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
