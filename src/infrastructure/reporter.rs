//! Reporter implementations
//!
//! `ConsoleReporter` writes progress and warnings to stderr and results to
//! stdout. `MemoryReporter` records everything for assertions.

use std::io::Write;

use crate::config::Verbosity;
use crate::domain::ports::Reporter;

/// Terminal reporter
pub struct ConsoleReporter {
    verbosity: Verbosity,
    json: bool,
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl ConsoleReporter {
    /// Reporter on the process stdout/stderr
    pub fn new(verbosity: Verbosity, json: bool) -> Self {
        Self::with_writers(
            verbosity,
            json,
            Box::new(std::io::stdout()),
            Box::new(std::io::stderr()),
        )
    }

    /// Reporter on custom writers (for testing)
    pub fn with_writers(
        verbosity: Verbosity,
        json: bool,
        out: Box<dyn Write>,
        err: Box<dyn Write>,
    ) -> Self {
        Self {
            verbosity,
            json,
            out,
            err,
        }
    }
}

impl Reporter for ConsoleReporter {
    fn progress(&mut self, message: &str) {
        if self.json || self.verbosity == Verbosity::Quiet {
            return;
        }
        let _ = writeln!(self.err, "{}", message);
    }

    fn warn(&mut self, message: &str) {
        let _ = writeln!(self.err, "{}", message);
    }

    fn output(&mut self, line: &str) {
        // JSON mode prints one document at the end instead
        if self.json {
            return;
        }
        let _ = writeln!(self.out, "{}", line);
    }
}

/// A recorded reporter event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Progress(String),
    Warning(String),
    Output(String),
}

/// In-memory reporter
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    events: Vec<ReportEvent>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ReportEvent] {
        &self.events
    }

    pub fn progress_lines(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ReportEvent::Progress(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ReportEvent::Warning(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn outputs(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ReportEvent::Output(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn progress(&mut self, message: &str) {
        self.events.push(ReportEvent::Progress(message.to_string()));
    }

    fn warn(&mut self, message: &str) {
        self.events.push(ReportEvent::Warning(message.to_string()));
    }

    fn output(&mut self, line: &str) {
        self.events.push(ReportEvent::Output(line.to_string()));
    }
}
