//! Reporter Port
//!
//! Sink for user-visible output produced by configuration checks and
//! transfers. Progress and warnings are diagnostics; `output` carries the
//! actual result lines (e.g. listed keys).

/// Receives user-facing messages from the core
pub trait Reporter {
    /// Human-readable progress line, emitted before each action
    fn progress(&mut self, message: &str);

    /// Non-fatal configuration warning
    fn warn(&mut self, message: &str);

    /// Result line written to standard output
    fn output(&mut self, line: &str);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn progress(&mut self, message: &str) {
        (**self).progress(message);
    }

    fn warn(&mut self, message: &str) {
        (**self).warn(message);
    }

    fn output(&mut self, line: &str) {
        (**self).output(line);
    }
}
