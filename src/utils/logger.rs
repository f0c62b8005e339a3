//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation for the standard
//! log crate. Records go to stderr, so they never mix with rendered output
//! on stdout, and optionally to a log file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level that is recorded
    level: LevelFilter,
}

impl Logger {
    /// Creates a logger that writes to stderr only
    pub fn stderr(level: LevelFilter) -> Self {
        Logger {
            file: Mutex::new(None),
            level,
        }
    }

    /// Creates a logger that also writes to a log file
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file, truncated if it exists
    /// * `level` - Most verbose level that is recorded
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn with_file(log_file: &str, level: LevelFilter) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level,
        })
    }

    /// Appends a line to the log file, if one is open
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Installs a logger as the global `log` backend
    ///
    /// # Arguments
    ///
    /// * `log_file` - Optional path of a log file to write alongside stderr
    /// * `level` - Most verbose level that is recorded
    pub fn init_global_logger(log_file: Option<&str>, level: LevelFilter) -> io::Result<()> {
        let global_logger = match log_file {
            Some(path) => Logger::with_file(path, level)?,
            None => Logger::stderr(level),
        };

        // Only one logger can be installed per process; keep the first one
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
