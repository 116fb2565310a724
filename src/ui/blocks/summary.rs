use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Success,
    Stopped,
}

/// End-of-command box: counts, notes, and an optional follow-up hint.
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    verdict: Verdict,
    stats: Vec<(String, usize)>,
    notes: Vec<(Icon, String)>,
    next_step: Option<String>,
}

impl ResultSummary {
    fn with_verdict(title: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            title: title.into(),
            verdict,
            stats: Vec::new(),
            notes: Vec::new(),
            next_step: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::with_verdict(title, Verdict::Success)
    }

    /// A run that ended early without an error.
    pub fn stopped(title: impl Into<String>) -> Self {
        Self::with_verdict(title, Verdict::Stopped)
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    pub fn add_info(&mut self, message: impl Into<String>) {
        self.notes.push((Icon::Success, message.into()));
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.notes.push((Icon::Warning, message.into()));
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (style, icon, title) = match self.verdict {
            Verdict::Success => (
                BoxStyle::Success,
                Icon::Success,
                ColoredText::success(self.title.as_str()),
            ),
            Verdict::Stopped => (
                BoxStyle::Warning,
                Icon::Warning,
                ColoredText::warning(self.title.as_str()),
            ),
        };

        let mut b = Box::with_title(format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            title.bold().render(supports_color)
        ))
        .style(style);

        if !self.stats.is_empty() {
            b.add_empty();
            let width = self
                .stats
                .iter()
                .map(|(_, n)| n.to_string().len())
                .max()
                .unwrap_or(1);
            for (label, count) in &self.stats {
                b.add_line(format!("{:>width$} {}", count, label, width = width));
            }
        }

        if !self.notes.is_empty() {
            b.add_empty();
            for (icon, note) in &self.notes {
                b.add_line(format!(
                    "{} {}",
                    icon.colored(supports_color, supports_unicode),
                    note
                ));
            }
        }

        if let Some(next_step) = &self.next_step {
            b.add_empty();
            b.add_line(format!(
                "{} {} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }

        b.render(supports_color, supports_unicode)
    }
}
