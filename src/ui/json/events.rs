//! Event types emitted in `--json` mode.

use serde::Serialize;

use ssh_sftp::application::{AbortReason, SyncPreview, SyncProgress, SyncReport};

#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressPhase {
    Start,
    Update,
    Succeed,
    Fail,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressEvent<'a> {
    pub event: &'static str,
    pub phase: ProgressPhase,
    pub message: &'a str,
}

impl<'a> ProgressEvent<'a> {
    pub fn new(phase: ProgressPhase, message: &'a str) -> Self {
        Self {
            event: "progress",
            phase,
            message,
        }
    }
}

/// Non-fatal problem: unknown config key, rejected pattern, lock bypassed.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent {
    pub event: &'static str,
    pub kind: &'static str,
    pub message: String,
}

impl WarningEvent {
    pub fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressCounts {
    pub uploads_total: usize,
    pub uploaded: usize,
    pub deletions_total: usize,
    pub deleted: usize,
}

impl From<SyncProgress> for ProgressCounts {
    fn from(p: SyncProgress) -> Self {
        Self {
            uploads_total: p.uploads_total,
            uploaded: p.uploaded,
            deletions_total: p.deletions_total,
            deleted: p.deleted,
        }
    }
}

/// Final event of a `sync` run that did not fail.
#[derive(Debug, Clone, Serialize)]
pub struct SyncCompleteEvent {
    pub event: &'static str,
    pub command: &'static str,
    pub success: bool,
    pub remote_path: String,
    pub uploaded_files: usize,
    pub uploaded_dirs: usize,
    pub deleted: usize,
    pub ignored: usize,
    pub created_remote_root: bool,
}

impl From<&SyncReport> for SyncCompleteEvent {
    fn from(report: &SyncReport) -> Self {
        Self {
            event: "complete",
            command: "sync",
            success: true,
            remote_path: report.remote_root.clone(),
            uploaded_files: report.uploaded_files,
            uploaded_dirs: report.uploaded_dirs,
            deleted: report.deleted,
            ignored: report.ignored,
            created_remote_root: report.created_root,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SyncAbortedEvent {
    pub event: &'static str,
    pub command: &'static str,
    pub reason: &'static str,
    pub message: String,
    pub progress: ProgressCounts,
}

impl SyncAbortedEvent {
    pub fn new(reason: AbortReason, progress: SyncProgress) -> Self {
        let code = match reason {
            AbortReason::RemoteRootDeclined => "remote_root_declined",
            AbortReason::DeletionGateDeclined => "deletion_declined",
            AbortReason::Interrupted => "interrupted",
        };
        Self {
            event: "aborted",
            command: "sync",
            reason: code,
            message: reason.to_string(),
            progress: progress.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl PlanEntry {
    fn new(path: impl Into<String>, is_dir: bool) -> Self {
        Self {
            path: path.into(),
            kind: if is_dir { "directory" } else { "file" },
        }
    }
}

/// Result of `list`; a section is absent when it was not requested.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewEvent {
    pub event: &'static str,
    pub command: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploads: Option<Vec<PlanEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletions: Option<Vec<PlanEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignored: Option<Vec<String>>,
}

impl PreviewEvent {
    pub fn new(preview: &SyncPreview, uploads: bool, ignored: bool) -> Self {
        Self {
            event: "preview",
            command: "list",
            uploads: uploads.then(|| {
                preview
                    .uploads
                    .iter()
                    .map(|e| PlanEntry::new(e.remote_path(), e.is_dir()))
                    .collect()
            }),
            deletions: preview.deletions.as_ref().map(|d| {
                d.iter()
                    .map(|e| PlanEntry::new(e.path.as_str(), e.is_dir))
                    .collect()
            }),
            ignored: ignored.then(|| {
                preview
                    .ignored
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect()
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            path: None,
            url: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_url(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<ProgressCounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssh_sftp::domain::entities::FileEntry;

    #[test]
    fn aborted_event_uses_stable_reason_code() {
        let event = SyncAbortedEvent::new(AbortReason::DeletionGateDeclined, SyncProgress::default());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "aborted");
        assert_eq!(json["reason"], "deletion_declined");
        assert_eq!(json["progress"]["uploaded"], 0);
    }

    #[test]
    fn preview_omits_unrequested_sections() {
        let preview = SyncPreview {
            uploads: vec![FileEntry::file("/tmp/a.txt", "/srv/app/a.txt")],
            deletions: None,
            ignored: Vec::new(),
        };
        let json = serde_json::to_value(PreviewEvent::new(&preview, true, false)).unwrap();
        assert_eq!(json["uploads"][0]["path"], "/srv/app/a.txt");
        assert_eq!(json["uploads"][0]["type"], "file");
        assert!(json.get("deletions").is_none());
        assert!(json.get("ignored").is_none());
    }
}
