use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application
///
/// Keeps every entry in memory for the log view. [`Logger::install`] makes it
/// the sink of the `log` facade and, when file logging is enabled, chains a
/// log file under the platform data directory.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            log_file: None,
        }
    }

    /// Create a logger, preparing the log file location when `enabled`
    pub fn from_config(enabled: bool) -> Result<Self> {
        let mut logger = Self::new();
        if !enabled {
            return Ok(logger);
        }

        let path = Self::get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        logger.log_file = Some(path);
        Ok(logger)
    }

    /// Route the `log` facade into this logger, filtered at `level`.
    ///
    /// Only the first call in a process succeeds.
    pub fn install(&self, level: log::LevelFilter) -> Result<()> {
        let sink = self.clone();
        let mut dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {:<5} {}: {}",
                    Utc::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .chain(fern::Output::call(move |record| sink.push(record.args().to_string())));

        if let Some(path) = &self.log_file {
            let file =
                fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(file);
        }

        dispatch.apply().context("Failed to install logger")
    }

    /// Add a log entry to the in-memory buffer
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        self.push(format!("[{}] {}", timestamp, message));
    }

    fn push(&self, entry: String) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.push(entry);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            // Reverse to show newest logs first (descending order by timestamp)
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    /// File chained into the dispatch by [`Logger::install`], if enabled
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Flush every installed output
    pub fn flush(&self) {
        log::logger().flush();
    }

    /// Path of the log file: `<data dir>/slotgrid/slotgrid.log`
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
