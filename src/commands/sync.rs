//! Sync command - the default action

use anyhow::Result;

use ssh_sftp::application::{AbortReason, SyncOutcome};
use ssh_sftp::config::derive_url;
use ssh_sftp::domain::ports::ProgressSink;
use ssh_sftp::domain::services::SecurityCheck;
use ssh_sftp::domain::value_objects::CleanPatterns;
use ssh_sftp::presentation::{create_prompt, create_sync_executor};

use super::{CommandContext, Exit, Project};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::json::emit_event;
use crate::ui::json::events::{StartEvent, SyncAbortedEvent, SyncCompleteEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::progress::{ConsoleProgress, JsonProgress};
use crate::ui::views::sync::{render_aborted, render_sync_report};

fn header(project: &Project) -> CommandHeader {
    let options = &project.validated.options;
    let mut header = CommandHeader::new(Icon::Remote, "ssh-sftp sync");
    header.add("Local", options.local_path.display().to_string());
    header.add(
        "Remote",
        format!("{}:{}", options.connect.endpoint(), options.remote_path),
    );
    header.add(
        "Prune",
        match &options.clean {
            CleanPatterns::None => "off".to_string(),
            CleanPatterns::All => "everything not re-uploaded".to_string(),
            CleanPatterns::Matching(_) => "entries matching cleanRemoteFiles".to_string(),
        },
    );
    header.add(
        "Lock",
        match &project.validated.security {
            SecurityCheck::Passed { project } => format!("on ({})", project),
            SecurityCheck::Bypassed => "off".to_string(),
        },
    );
    header
}

pub fn cmd_sync(ctx: &CommandContext) -> Result<Exit> {
    let project = ctx.load_project()?;
    let options = &project.validated.options;
    let ui = &ctx.ui;

    let progress: Box<dyn ProgressSink> = if ui.json {
        emit_event(&StartEvent::new("sync"))?;
        Box::new(JsonProgress::stdout())
    } else {
        print!("{}", header(&project).render(ui.color, ui.unicode));
        Box::new(ConsoleProgress::stderr(ui))
    };

    let executor = create_sync_executor(create_prompt(ctx.yes), progress, ctx.cancel.clone());

    match executor.run(options)? {
        SyncOutcome::Completed { report, .. } => {
            let url = derive_url(&project.config.urls, &report.remote_root);
            if ui.json {
                emit_event(&SyncCompleteEvent::from(&report))?;
            } else {
                print!(
                    "{}",
                    render_sync_report(&report, url.as_deref(), ui.color, ui.unicode)
                );
            }
            Ok(Exit::Success)
        }
        SyncOutcome::Aborted { reason, progress } => {
            if ui.json {
                emit_event(&SyncAbortedEvent::new(reason, progress))?;
            } else {
                print!(
                    "{}",
                    render_aborted(reason, &progress, ui.color, ui.unicode)
                );
            }
            Ok(match reason {
                AbortReason::Interrupted => Exit::Interrupted,
                AbortReason::RemoteRootDeclined | AbortReason::DeletionGateDeclined => {
                    Exit::Declined
                }
            })
        }
    }
}
