use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Skipped,
    Arrow,
    Upload,
    Delete,
    Directory,
    Remote,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use theme::{icons, icons_ascii};
        let (unicode, ascii) = match self {
            Icon::Success => (icons::SUCCESS, icons_ascii::SUCCESS),
            Icon::Error => (icons::ERROR, icons_ascii::ERROR),
            Icon::Warning => (icons::WARNING, icons_ascii::WARNING),
            Icon::Progress => (icons::PROGRESS, icons_ascii::PROGRESS),
            Icon::Skipped => (icons::SKIPPED, icons_ascii::SKIPPED),
            Icon::Arrow => (icons::ARROW, icons_ascii::ARROW),
            Icon::Upload => (icons::UPLOAD, icons_ascii::UPLOAD),
            Icon::Delete => (icons::DELETE, icons_ascii::DELETE),
            Icon::Directory => (icons::DIRECTORY, icons_ascii::DIRECTORY),
            Icon::Remote => (icons::REMOTE, icons_ascii::REMOTE),
        };
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Upload => theme::colors::SUCCESS,
            Icon::Error | Icon::Delete => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Progress | Icon::Remote => theme::colors::INFO,
            Icon::Skipped | Icon::Arrow | Icon::Directory => theme::colors::DIM,
        };
        format!("{}", s.with(color))
    }
}
