//! Append-only activity log
//!
//! Every transaction outcome, success or failure, lands here as exactly one
//! timestamp-prefixed line. Failing to open the sink is the one fatal
//! condition of the whole process; once open, write errors are ignored so
//! the closed business error taxonomy stays the engine's only failure
//! surface.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::Result;

/// Append-only, timestamp-prefixing log sink over a file
pub struct ActivityLog {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl ActivityLog {
    /// Open the sink in append mode, creating the file if needed.
    ///
    /// Fatal on failure: callers are expected to abort startup.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    /// Append one line, prefixed with the current UTC time.
    ///
    /// Lines are flushed per call so they land in call order.
    pub fn log(&mut self, msg: &str) {
        let stamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(self.writer, "[{}] {}", stamp, msg);
        let _ = self.writer.flush();
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
