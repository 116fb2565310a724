use ssh_sftp::application::{PreviewRequest, SyncPreview};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn section(out: &mut String, title: &str, count: usize, color: bool) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&format!(
        "{} {}\n",
        ColoredText::info(title).bold().render(color),
        ColoredText::dim(format!("({})", count)).render(color)
    ));
}

/// Plain listing of what a sync would do, one entry per line.
pub fn render_preview(
    preview: &SyncPreview,
    request: PreviewRequest,
    color: bool,
    unicode: bool,
) -> String {
    let mut out = String::new();

    if request.uploads {
        section(&mut out, "Uploads", preview.uploads.len(), color);
        for entry in &preview.uploads {
            let icon = if entry.is_dir() {
                Icon::Directory
            } else {
                Icon::Upload
            };
            out.push_str(&format!(
                "  {} {}\n",
                icon.colored(color, unicode),
                entry.remote_path()
            ));
        }
    }

    if request.deletions {
        match &preview.deletions {
            Some(deletions) => {
                section(&mut out, "Deletions", deletions.len(), color);
                for entry in deletions {
                    let suffix = if entry.is_dir { "/" } else { "" };
                    out.push_str(&format!(
                        "  {} {}{}\n",
                        Icon::Delete.colored(color, unicode),
                        entry.path,
                        suffix
                    ));
                }
            }
            None => {
                section(&mut out, "Deletions", 0, color);
                out.push_str(&format!(
                    "  {}\n",
                    ColoredText::dim("cleanRemoteFiles is off; nothing is pruned").render(color)
                ));
            }
        }
    }

    if request.ignored {
        section(&mut out, "Ignored", preview.ignored.len(), color);
        for path in &preview.ignored {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Skipped.colored(color, unicode),
                path.display()
            ));
        }
    }

    out
}
