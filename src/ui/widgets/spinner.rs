use crate::ui::primitives::icon::Icon;

const FRAMES_UNICODE: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const FRAMES_ASCII: &[char] = &['-', '\\', '|', '/'];

/// One-line activity indicator; advanced once per progress event.
#[derive(Debug, Clone)]
pub struct Spinner {
    current: usize,
    message: String,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            current: 0,
            message: message.into(),
        }
    }

    pub fn tick(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let frames = if supports_unicode {
            FRAMES_UNICODE
        } else {
            FRAMES_ASCII
        };
        format!("{} {}", frames[self.current % frames.len()], self.message)
    }

    pub fn succeed(self, message: &str, supports_color: bool, supports_unicode: bool) -> String {
        format!(
            "{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            message
        )
    }

    pub fn fail(self, message: &str, supports_color: bool, supports_unicode: bool) -> String {
        format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            message
        )
    }
}
