//! Console diagnostics
//!
//! Thin wrapper over `web_sys::console` with a page-configurable minimum
//! level. Messages carry a common prefix so they are easy to filter.
//!
//! `hisab_core` reports through `tracing`; [`install_tracing`] routes those
//! events to the same console with the same level filter.

use std::cell::Cell;
use std::io;

use hisab_core::LogLevel;
use tracing::Metadata;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

const PREFIX: &str = "[hisab-ui]";

thread_local! {
    static MIN_LEVEL: Cell<LogLevel> = const { Cell::new(LogLevel::Info) };
}

/// Set the minimum level for the rest of the page's life.
pub fn set_level(level: LogLevel) {
    MIN_LEVEL.with(|min| min.set(level));
}

/// Whether a message at `level` would be written.
#[must_use]
pub fn enabled(level: LogLevel) -> bool {
    MIN_LEVEL.with(|min| min.get().allows(level))
}

fn format_message(message: &str) -> String {
    format!("{PREFIX} {message}")
}

fn write(level: LogLevel, message: &str) {
    if !enabled(level) {
        return;
    }
    let line = format_message(message).into();
    match level {
        LogLevel::Debug => web_sys::console::debug_1(&line),
        LogLevel::Info => web_sys::console::info_1(&line),
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Error => web_sys::console::error_1(&line),
    }
}

pub fn debug(message: &str) {
    write(LogLevel::Debug, message);
}

pub fn info(message: &str) {
    write(LogLevel::Info, message);
}

pub fn warn(message: &str) {
    write(LogLevel::Warn, message);
}

pub fn error(message: &str) {
    write(LogLevel::Error, message);
}

/// Install a global `tracing` subscriber writing to the console.
///
/// Only the first call installs; later calls are reported and ignored.
pub fn install_tracing(level: LogLevel) {
    let installed = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_max_level(level_filter(level))
        .with_level(false)
        .without_time()
        .try_init();

    if let Err(err) = installed {
        debug(&format!("tracing subscriber not installed: {err}"));
    }
}

const fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
    }
}

fn log_level(level: tracing::Level) -> LogLevel {
    match level {
        tracing::Level::ERROR => LogLevel::Error,
        tracing::Level::WARN => LogLevel::Warn,
        tracing::Level::INFO => LogLevel::Info,
        _ => LogLevel::Debug,
    }
}

/// Hands out one [`ConsoleWriter`] per `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(LogLevel::Info)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(log_level(*meta.level()))
    }
}

/// Buffers one formatted event and writes it to the console on drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: LogLevel,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(level: LogLevel) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    fn line(&self) -> Option<String> {
        let text = String::from_utf8_lossy(&self.buffer);
        let trimmed = text.trim_end();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.line() {
            write(self.level, &line);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_level_filtering() {
        set_level(LogLevel::Warn);
        assert!(!enabled(LogLevel::Info));
        assert!(enabled(LogLevel::Warn));
        assert!(enabled(LogLevel::Error));

        set_level(LogLevel::Debug);
        assert!(enabled(LogLevel::Debug));
    }

    #[test]
    fn test_prefix() {
        assert_eq!(format_message("wired"), "[hisab-ui] wired");
    }

    #[test]
    fn test_tracing_levels_map_to_console_levels() {
        assert_eq!(log_level(tracing::Level::TRACE), LogLevel::Debug);
        assert_eq!(log_level(tracing::Level::DEBUG), LogLevel::Debug);
        assert_eq!(log_level(tracing::Level::WARN), LogLevel::Warn);
        assert_eq!(level_filter(LogLevel::Warn), LevelFilter::WARN);
    }

    #[test]
    fn test_writer_collects_one_line() -> io::Result<()> {
        let mut writer = ConsoleWriter::new(LogLevel::Debug);
        writer.write_all(b"hisab_core::modal: ")?;
        writer.write_all(b"dropping stale response\n")?;
        assert_eq!(
            writer.line().as_deref(),
            Some("hisab_core::modal: dropping stale response")
        );

        // Clear before drop so nothing reaches the console natively
        writer.buffer.clear();
        assert_eq!(writer.line(), None);
        Ok(())
    }
}
