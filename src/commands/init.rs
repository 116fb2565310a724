//! Init command - write a template `.sftprc.json`

use anyhow::Result;

use ssh_sftp::config::{self, ProjectManifest};

use super::{current_dir, CommandContext, Exit};
use crate::ui::json::emit_event;
use crate::ui::json::events::CompleteEvent;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn cmd_init(ctx: &CommandContext, force: bool) -> Result<Exit> {
    let cwd = current_dir()?;
    let manifest = ProjectManifest::discover(&cwd)?;
    tracing::debug!(manifest = %manifest.path.display(), "project manifest found");

    let path = match &ctx.config {
        Some(path) => path.clone(),
        None => cwd.join(config::CONFIG_FILE_NAME),
    };
    config::write_template(&path, force)?;

    if ctx.ui.json {
        emit_event(&CompleteEvent::success("init").with_path(path.display().to_string()))?;
        return Ok(Exit::Success);
    }

    let ui = &ctx.ui;
    println!(
        "{} Created {}",
        Icon::Success.colored(ui.color, ui.unicode),
        path.display()
    );
    println!(
        "{} {} fill in localPath, remotePath and connectOptions, then run `ssh-sftp`.",
        Icon::Arrow.colored(ui.color, ui.unicode),
        ColoredText::dim("Next:").render(ui.color)
    );
    if manifest.name().is_none() {
        println!(
            "{} {} declares no name; the security lock will refuse to run until it does.",
            Icon::Warning.colored(ui.color, ui.unicode),
            manifest.kind.file_name()
        );
    }
    Ok(Exit::Success)
}
