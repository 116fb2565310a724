//! Interactive Prompt
//!
//! Asks the operator on the terminal via `dialoguer`.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use crate::domain::ports::Prompt;

/// Yes/no prompt on the controlling terminal.
///
/// Defaults to "no". Any prompt failure (no TTY, Ctrl-C) counts as "no".
pub struct DialoguerPrompt {
    theme: ColorfulTheme,
}

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for DialoguerPrompt {
    fn confirm(&self, message: &str) -> bool {
        match Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                tracing::debug!(error = %e, "prompt failed; treating as no");
                false
            }
        }
    }
}
