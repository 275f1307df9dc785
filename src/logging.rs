use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

/// Appends log lines to a file so the terminal UI is never written over.
struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

pub(crate) fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
    log::set_boxed_logger(Box::new(FileLogger {
        level,
        file: Mutex::new(file),
    }))
    .context("Logger already initialized")?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use log::Level;

    fn logger_at(path: &Path, level: LevelFilter) -> FileLogger {
        FileLogger {
            level,
            file: Mutex::new(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .unwrap(),
            ),
        }
    }

    #[test]
    fn test_writes_enabled_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");
        let logger = logger_at(&path, LevelFilter::Info);

        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .target("moneypaz::ledger")
                .args(format_args!("write failed"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .target("moneypaz::ledger")
                .args(format_args!("too chatty"))
                .build(),
        );
        logger.flush();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("WARN  [moneypaz::ledger] write failed"));
        assert!(!content.contains("too chatty"));
    }

    #[test]
    fn test_ignores_other_crates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");
        let logger = logger_at(&path, LevelFilter::Trace);
        let metadata = Metadata::builder()
            .level(Level::Error)
            .target("rusqlite")
            .build();
        assert!(!logger.enabled(&metadata));
    }
}
