//! Progress Sink Port
//!
//! Spinner-style progress reporting, decoupled from terminal rendering.

/// Receives progress for the current step of a sync run.
///
/// Implementations:
/// - `ConsoleProgress` (CLI): spinner or plain lines
/// - `JsonProgress` (CLI): NDJSON events
/// - `NoopProgress`: silent
pub trait ProgressSink {
    /// A new step begins
    fn start(&self, label: &str);

    /// The current step moved on (e.g. `[3/10] Uploading ...`)
    fn update(&self, label: &str);

    /// The current step finished
    fn succeed(&self, label: &str);

    /// The current step failed
    fn fail(&self, label: &str);
}

/// Silent progress sink
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn start(&self, _label: &str) {}

    fn update(&self, _label: &str) {}

    fn succeed(&self, _label: &str) {}

    fn fail(&self, _label: &str) {}
}

impl<T: ProgressSink + ?Sized> ProgressSink for &T {
    fn start(&self, label: &str) {
        (**self).start(label)
    }

    fn update(&self, label: &str) {
        (**self).update(label)
    }

    fn succeed(&self, label: &str) {
        (**self).succeed(label)
    }

    fn fail(&self, label: &str) {
        (**self).fail(label)
    }
}

impl<T: ProgressSink + ?Sized> ProgressSink for Box<T> {
    fn start(&self, label: &str) {
        (**self).start(label)
    }

    fn update(&self, label: &str) {
        (**self).update(label)
    }

    fn succeed(&self, label: &str) {
        (**self).succeed(label)
    }

    fn fail(&self, label: &str) {
        (**self).fail(label)
    }
}
