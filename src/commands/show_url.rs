//! Show-url command - public URL for the configured remote path

use anyhow::Result;

use ssh_sftp::config::derive_url;

use super::{CommandContext, Exit};
use crate::ui::json::emit_event;
use crate::ui::json::events::CompleteEvent;

pub fn cmd_show_url(ctx: &CommandContext, path: Option<&str>) -> Result<Exit> {
    let (_, config) = ctx.load_config()?;

    let remote_path = match path {
        Some(p) => p.trim_end_matches('/').to_string(),
        None => config
            .remote_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| p.trim_end_matches('/').to_string())
            .ok_or(ssh_sftp::SyncError::EmptyRemotePath)?,
    };
    let remote_path = if remote_path.is_empty() {
        "/".to_string()
    } else {
        remote_path
    };

    let url = derive_url(&config.urls, &remote_path);
    tracing::debug!(remote = %remote_path, url = ?url, "url lookup");

    if ctx.ui.json {
        let mut event = CompleteEvent::success("show-url")
            .with_path(remote_path)
            .with_url(url.clone());
        event.success = url.is_some();
        emit_event(&event)?;
        return Ok(if url.is_some() {
            Exit::Success
        } else {
            Exit::Failure
        });
    }

    match url {
        Some(url) => {
            println!("{}", url);
            Ok(Exit::Success)
        }
        None => {
            anyhow::bail!(
                "no entry in \"urls\" covers {}; add a remote path prefix mapping to .sftprc.json",
                remote_path
            )
        }
    }
}
