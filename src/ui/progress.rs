//! `ProgressSink` implementations for the terminal and for `--json`.

use std::cell::RefCell;
use std::io::{self, Write};

use ssh_sftp::domain::ports::ProgressSink;

use crate::ui::context::UiContext;
use crate::ui::json::events::{ProgressEvent, ProgressPhase};
use crate::ui::json::write_event;
use crate::ui::live_region::LiveRegion;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::spinner::Spinner;

/// Console progress on stderr.
///
/// With animation a spinner is redrawn in place; otherwise every event is
/// its own line so CI logs keep the full history.
pub struct ConsoleProgress<W: Write> {
    out: RefCell<W>,
    active: RefCell<Option<(Spinner, LiveRegion)>>,
    color: bool,
    unicode: bool,
    animation: bool,
}

impl ConsoleProgress<io::Stderr> {
    pub fn stderr(ui: &UiContext) -> Self {
        Self::new(io::stderr(), ui)
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W, ui: &UiContext) -> Self {
        Self {
            out: RefCell::new(out),
            active: RefCell::new(None),
            color: ui.color,
            unicode: ui.unicode,
            animation: ui.animation,
        }
    }

    fn line(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        let _ = writeln!(out, "{}", text);
        let _ = out.flush();
    }

    fn redraw(&self, spinner: &Spinner, region: &mut LiveRegion) {
        let frame = spinner.render(self.unicode);
        let _ = region.update(&mut *self.out.borrow_mut(), &frame);
    }

    fn finish(&self, label: &str, ok: bool) {
        let active = self.active.borrow_mut().take();
        let rendered = match active {
            Some((spinner, mut region)) => {
                let text = if ok {
                    spinner.succeed(label, self.color, self.unicode)
                } else {
                    spinner.fail(label, self.color, self.unicode)
                };
                let _ = region.update(&mut *self.out.borrow_mut(), &text);
                region.commit();
                return;
            }
            None if ok => format!(
                "{} {}",
                Icon::Success.colored(self.color, self.unicode),
                label
            ),
            None => format!(
                "{} {}",
                Icon::Error.colored(self.color, self.unicode),
                ColoredText::error(label).render(self.color)
            ),
        };
        self.line(&rendered);
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> ProgressSink for ConsoleProgress<W> {
    fn start(&self, label: &str) {
        if !self.animation {
            self.line(&format!(
                "{} {}",
                Icon::Progress.colored(self.color, self.unicode),
                label
            ));
            return;
        }

        let mut active = self.active.borrow_mut();
        let (spinner, region) = active.get_or_insert_with(|| (Spinner::new(label), LiveRegion::new()));
        spinner.set_message(label);
        self.redraw(spinner, region);
    }

    fn update(&self, label: &str) {
        if !self.animation {
            self.line(&format!("  {}", ColoredText::dim(label).render(self.color)));
            return;
        }

        let mut active = self.active.borrow_mut();
        let (spinner, region) = active.get_or_insert_with(|| (Spinner::new(label), LiveRegion::new()));
        spinner.tick();
        spinner.set_message(label);
        self.redraw(spinner, region);
    }

    fn succeed(&self, label: &str) {
        self.finish(label, true);
    }

    fn fail(&self, label: &str) {
        self.finish(label, false);
    }
}

/// NDJSON progress events on stdout.
pub struct JsonProgress<W: Write> {
    out: RefCell<W>,
}

impl JsonProgress<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonProgress<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    fn emit(&self, phase: ProgressPhase, label: &str) {
        if let Err(e) = write_event(&mut *self.out.borrow_mut(), &ProgressEvent::new(phase, label)) {
            tracing::debug!(error = %e, "failed to write progress event");
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> ProgressSink for JsonProgress<W> {
    fn start(&self, label: &str) {
        self.emit(ProgressPhase::Start, label);
    }

    fn update(&self, label: &str) {
        self.emit(ProgressPhase::Update, label);
    }

    fn succeed(&self, label: &str) {
        self.emit(ProgressPhase::Succeed, label);
    }

    fn fail(&self, label: &str) {
        self.emit(ProgressPhase::Fail, label);
    }
}
