//! List command - preview a sync without changing anything

use anyhow::Result;

use ssh_sftp::application::PreviewRequest;
use ssh_sftp::presentation::create_preview_use_case;
use ssh_sftp::SyncError;

use super::{CommandContext, Exit};
use crate::ui::json::emit_event;
use crate::ui::json::events::PreviewEvent;
use crate::ui::views::list::render_preview;

pub fn cmd_list(ctx: &CommandContext, uploads: bool, deletions: bool, ignored: bool) -> Result<Exit> {
    let project = ctx.load_project()?;
    let request = PreviewRequest::from_flags(uploads, deletions, ignored);

    let preview = match create_preview_use_case(ctx.cancel.clone())
        .execute(&project.validated.options, request)
    {
        Ok(preview) => preview,
        Err(SyncError::Interrupted) => return Ok(Exit::Interrupted),
        Err(e) => return Err(e.into()),
    };

    if ctx.ui.json {
        emit_event(&PreviewEvent::new(&preview, request.uploads, request.ignored))?;
    } else {
        print!(
            "{}",
            render_preview(&preview, request, ctx.ui.color, ctx.ui.unicode)
        );
    }
    Ok(Exit::Success)
}
