//! Rotating log file writer with size-based rotation and backup retention.
//!
//! The TUI owns the terminal, so log output has to go to a file. This module
//! provides a writer that automatically rotates the file when it exceeds a
//! size threshold, keeping a fixed number of timestamped backups so disk
//! usage stays bounded.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

/// Maximum file size before rotation (5 MB).
const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 2;

/// Size-rotating log file writer.
///
/// Opens the file lazily on first write. Before each write, checks the
/// current size; past the threshold, the file is renamed with a timestamp
/// suffix, a fresh file is started, and backups beyond the retention limit
/// are removed.
///
/// Not internally synchronized: the tracing subscriber wraps it in a `Mutex`
/// to serialize writers.
pub struct LogFileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Lazily-initialized file handle.
    file: Option<File>,
    /// Bytes written since open, to avoid a stat per write.
    written: u64,
}

impl LogFileWriter {
    /// Creates a writer for the given path.
    ///
    /// The file is not opened until the first write, so construction cannot
    /// fail.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            file: None,
            written: 0,
        }
    }

    fn open(&mut self) -> io::Result<&mut File> {
        if self.file.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            self.written = file.metadata()?.len();
            self.file = Some(file);
        }
        // Just opened above when absent.
        Ok(self.file.as_mut().expect("file is open"))
    }

    /// Renames the current file with a timestamp suffix and prunes backups.
    fn rotate(&mut self) -> io::Result<()> {
        self.file = None;
        self.written = 0;

        let suffix = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let mut backup = self.file_path.clone();
        backup.set_extension(format!("log.{suffix}"));
        fs::rename(&self.file_path, &backup)?;

        self.prune_backups()
    }

    /// Removes the oldest backups beyond the retention limit.
    fn prune_backups(&self) -> io::Result<()> {
        let Some(dir) = self.file_path.parent() else {
            return Ok(());
        };
        let Some(stem) = self.file_path.file_stem().and_then(|s| s.to_str()) else {
            return Ok(());
        };

        let prefix = format!("{stem}.log.");
        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect();

        // Timestamp suffixes sort lexicographically; oldest first.
        backups.sort();
        while backups.len() > MAX_BACKUP_FILES {
            let oldest = backups.remove(0);
            let _ = fs::remove_file(oldest);
        }
        Ok(())
    }
}

impl Write for LogFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written + buf.len() as u64 > MAX_FILE_SIZE_BYTES && self.file.is_some() {
            self.rotate()?;
        }

        let file = self.open()?;
        let n = file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}
