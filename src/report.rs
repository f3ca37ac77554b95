// Reporter: the user-facing log sink. It is built once in `main` and
// handed to every command handler, so handlers never reach for global
// state to print their results. Process-wide `log` macros remain for
// developer diagnostics only (enabled through RUST_LOG).

use chrono::{SecondsFormat, Utc};
use crossterm::style::Stylize;
use log::Level;
use std::cell::RefCell;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// One reported line, before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub level: Level,
    pub message: String,
}

/// Destination for reported entries.
pub trait Sink {
    fn emit(&mut self, timestamp: &str, entry: &Entry);
}

/// Plain `[timestamp] LEVEL: message` line shared by all sinks.
pub fn format_line(timestamp: &str, entry: &Entry) -> String {
    format!(
        "[{}] {}: {}",
        timestamp,
        entry.level.as_str().to_uppercase(),
        entry.message
    )
}

/// Writes coloured lines to stdout.
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn emit(&mut self, timestamp: &str, entry: &Entry) {
        let line = format_line(timestamp, entry);
        let styled = match entry.level {
            Level::Error => line.red(),
            Level::Warn => line.yellow(),
            Level::Info => line.green(),
            Level::Debug | Level::Trace => line.dark_grey(),
        };
        // A closed stdout (e.g. piped into `head`) must not abort the command.
        let _ = writeln!(io::stdout().lock(), "{}", styled);
    }
}

/// Appends plain lines to a log file. The file is opened lazily so a
/// read-only working directory only costs a warning.
pub struct FileSink {
    path: PathBuf,
    file: Option<File>,
    failed: bool,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSink {
            path: path.into(),
            file: None,
            failed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn handle(&mut self) -> Option<&mut File> {
        if self.file.is_none() && !self.failed {
            match OpenOptions::new().create(true).append(true).open(&self.path) {
                Ok(f) => self.file = Some(f),
                Err(e) => {
                    log::warn!("cannot open log file {}: {}", self.path.display(), e);
                    self.failed = true;
                }
            }
        }
        self.file.as_mut()
    }
}

impl Sink for FileSink {
    fn emit(&mut self, timestamp: &str, entry: &Entry) {
        let line = format_line(timestamp, entry);
        if let Some(file) = self.handle() {
            if let Err(e) = writeln!(file, "{}", line) {
                log::warn!("failed to append to log file: {}", e);
            }
        }
    }
}

/// Keeps entries in memory; clones share the same buffer.
#[derive(Clone, Default)]
pub struct MemorySink {
    entries: Rc<RefCell<Vec<Entry>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.entries.borrow().clone()
    }

    /// All messages joined by newlines, handy for `contains` checks.
    pub fn text(&self) -> String {
        self.entries
            .borrow()
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Sink for MemorySink {
    fn emit(&mut self, _timestamp: &str, entry: &Entry) {
        self.entries.borrow_mut().push(entry.clone());
    }
}

/// Fans every entry out to its sinks.
#[derive(Default)]
pub struct Reporter {
    sinks: Vec<Box<dyn Sink>>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Console output plus an optional append-only log file.
    pub fn standard(log_file: Option<&Path>) -> Self {
        let mut reporter = Reporter::new().with_sink(ConsoleSink);
        if let Some(path) = log_file {
            reporter = reporter.with_sink(FileSink::new(path));
        }
        reporter
    }

    /// Reporter that only records into the returned `MemorySink`.
    pub fn capture() -> (Self, MemorySink) {
        let sink = MemorySink::new();
        (Reporter::new().with_sink(sink.clone()), sink)
    }

    pub fn with_sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn log(&mut self, level: Level, message: impl Into<String>) {
        let entry = Entry {
            level,
            message: message.into(),
        };
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        for sink in &mut self.sinks {
            sink.emit(&timestamp, &entry);
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.log(Level::Info, message)
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.log(Level::Warn, message)
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.log(Level::Error, message)
    }
}
