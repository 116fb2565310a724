use ssh_sftp::presentation::ColorWhen;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Rendering decisions for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    pub animation: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(json, verbose, cli_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        // Verbose runs interleave log lines with progress; redrawing would eat them.
        let animation = !json && caps.is_tty && !caps.is_ci && verbose == 0;

        Self {
            json,
            verbose,
            caps,
            color,
            unicode: caps.supports_unicode,
            animation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_caps(is_ci: bool) -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            supports_color: true,
            supports_unicode: true,
            is_ci,
        }
    }

    #[test]
    fn ci_disables_color_and_animation_by_default() {
        let ui = UiContext::from_caps(false, 0, None, tty_caps(true));
        assert!(!ui.color);
        assert!(!ui.animation);
    }

    #[test]
    fn color_always_overrides_ci() {
        let ui = UiContext::from_caps(false, 0, Some(ColorWhen::Always), tty_caps(true));
        assert!(ui.color);
    }

    #[test]
    fn json_never_animates() {
        let ui = UiContext::from_caps(true, 0, None, tty_caps(false));
        assert!(!ui.animation);
    }

    #[test]
    fn verbose_uses_line_mode() {
        let ui = UiContext::from_caps(false, 1, None, tty_caps(false));
        assert!(ui.color);
        assert!(!ui.animation);
    }
}
