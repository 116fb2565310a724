use ssh_sftp::application::SyncFailure;
use ssh_sftp::SyncError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::ErrorEvent;

fn error_kind(err: &SyncError) -> &'static str {
    if err.is_auth_error() {
        "authentication"
    } else if err.is_connection_error() {
        "connection"
    } else if err.is_config_error() {
        "config"
    } else if matches!(err, SyncError::Remote { .. }) {
        "remote_io"
    } else {
        "io"
    }
}

fn to_event(err: &anyhow::Error) -> ErrorEvent {
    if let Some(failure) = err.downcast_ref::<SyncFailure>() {
        return ErrorEvent {
            event: "error",
            kind: error_kind(&failure.error),
            message: failure.error.to_string(),
            stage: Some(failure.stage.to_string()),
            progress: Some(failure.progress.into()),
            help: failure.error.fix_hint(),
        };
    }

    let sync = err.downcast_ref::<SyncError>();
    ErrorEvent {
        event: "error",
        kind: sync.map(error_kind).unwrap_or("internal"),
        message: format!("{:#}", err),
        stage: None,
        progress: None,
        help: sync.and_then(SyncError::fix_hint),
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let block = if let Some(failure) = err.downcast_ref::<SyncFailure>() {
        let block = ErrorBlock::new(failure.error.to_string())
            .with_location(format!("while {} ({})", failure.stage, failure.progress));
        match failure.error.fix_hint() {
            Some(fix) => block.with_fix(fix),
            None => block,
        }
    } else {
        let mut chain = err.chain();
        let headline = chain
            .next()
            .map(ToString::to_string)
            .unwrap_or_default();
        let mut block = chain.fold(ErrorBlock::new(headline), |b, cause| {
            b.with_cause(cause.to_string())
        });
        if let Some(fix) = err.downcast_ref::<SyncError>().and_then(SyncError::fix_hint) {
            block = block.with_fix(fix);
        }
        block
    };
    block.render(supports_color, supports_unicode)
}

/// Report a fatal error: an NDJSON `error` event or a boxed error on stderr.
pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let _ = emit_event(&to_event(err));
        return;
    }
    eprint!("{}", format_error(err, ui.color, ui.unicode));
}
