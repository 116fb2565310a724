//! Use Case Factory
//!
//! Wires use cases to the SFTP connector and terminal prompt.

use crate::application::{PreviewUseCase, SyncExecutor};
use crate::domain::ports::{AlwaysConfirm, ProgressSink, Prompt};
use crate::domain::value_objects::CancelFlag;
use crate::infrastructure::{DialoguerPrompt, SftpConnector};

/// Sync executor over a real SFTP session
pub type ConcreteSyncExecutor<P, S> = SyncExecutor<SftpConnector, P, S>;

/// Preview over a real SFTP session
pub type ConcretePreviewUseCase = PreviewUseCase<SftpConnector>;

/// Create a sync executor sharing `cancel` with the caller.
pub fn create_sync_executor<P: Prompt, S: ProgressSink>(
    prompt: P,
    progress: S,
    cancel: CancelFlag,
) -> ConcreteSyncExecutor<P, S> {
    SyncExecutor::new(SftpConnector::default(), prompt, progress).with_cancel(cancel)
}

pub fn create_preview_use_case(cancel: CancelFlag) -> ConcretePreviewUseCase {
    PreviewUseCase::new(SftpConnector::default()).with_cancel(cancel)
}

/// `--yes` approves every confirmation; otherwise ask on the terminal.
pub fn create_prompt(assume_yes: bool) -> Box<dyn Prompt> {
    if assume_yes {
        Box::new(AlwaysConfirm)
    } else {
        Box::new(DialoguerPrompt::new())
    }
}
