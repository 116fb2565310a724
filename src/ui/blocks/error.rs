use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed error: a headline, optional location, and an optional fix.
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    location: Option<String>,
    causes: Vec<String>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            causes: Vec::new(),
            fix: None,
        }
    }

    /// Where the failure happened, e.g. "while uploading (uploaded 2/3, deleted 0/0)".
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut b = Box::with_title(format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("ERROR").bold().render(supports_color)
        ))
        .style(BoxStyle::Error);

        if let Some(location) = &self.location {
            b.add_line(ColoredText::dim(location.as_str()).render(supports_color));
        }
        b.add_empty();
        b.add_line(self.message.as_str());

        for cause in &self.causes {
            b.add_line(format!(
                "{} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                cause
            ));
        }

        if let Some(fix) = &self.fix {
            b.add_empty();
            b.add_line(format!("Fix: {}", fix));
        }

        b.render(supports_color, supports_unicode)
    }
}
