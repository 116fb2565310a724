use ssh_sftp::application::{AbortReason, SyncProgress, SyncReport};

use crate::ui::blocks::summary::ResultSummary;

pub fn render_sync_report(
    report: &SyncReport,
    url: Option<&str>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = ResultSummary::success("Sync complete");
    summary.add_stat("files uploaded", report.uploaded_files);
    summary.add_stat("directories created or kept", report.uploaded_dirs);
    if report.deleted > 0 {
        summary.add_stat("remote entries deleted", report.deleted);
    }
    if report.ignored > 0 {
        summary.add_stat("local paths ignored", report.ignored);
    }
    if report.created_root {
        summary.add_info(format!("Created {}", report.remote_root));
    }
    if let Some(url) = url {
        summary.add_info(format!("Live at {}", url));
    }
    summary.render(supports_color, supports_unicode)
}

pub fn render_aborted(
    reason: AbortReason,
    progress: &SyncProgress,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = ResultSummary::stopped("Sync aborted");
    summary.add_warning(capitalize(&reason.to_string()));

    if progress.uploaded > 0 || progress.deleted > 0 {
        summary.add_stat("files uploaded before stopping", progress.uploaded);
        summary.add_stat("remote entries deleted before stopping", progress.deleted);
    }

    match reason {
        AbortReason::RemoteRootDeclined => {
            summary.with_next_step("Create the remote directory or correct remotePath.")
        }
        AbortReason::DeletionGateDeclined => {
            summary.with_next_step("Review the deletions with `ssh-sftp list -d`.")
        }
        AbortReason::Interrupted => {}
    }

    summary.render(supports_color, supports_unicode)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_counts_and_url() {
        let report = SyncReport {
            remote_root: "/var/www/app".to_string(),
            uploaded_files: 3,
            uploaded_dirs: 1,
            deleted: 2,
            ignored: 0,
            created_root: true,
        };
        let out = render_sync_report(&report, Some("https://app.example.com/"), false, false);
        assert!(out.contains("[OK] Sync complete"));
        assert!(out.contains("3 files uploaded"));
        assert!(out.contains("2 remote entries deleted"));
        assert!(!out.contains("ignored"));
        assert!(out.contains("Created /var/www/app"));
        assert!(out.contains("Live at https://app.example.com/"));
    }

    #[test]
    fn aborted_gate_suggests_review() {
        let out = render_aborted(
            AbortReason::DeletionGateDeclined,
            &SyncProgress::default(),
            false,
            false,
        );
        assert!(out.contains("[WARN] Sync aborted"));
        assert!(out.contains("Deletion was not confirmed"));
        assert!(out.contains("ssh-sftp list -d"));
        assert!(!out.contains("before stopping"));
    }

    #[test]
    fn interrupted_shows_partial_progress() {
        let progress = SyncProgress {
            uploads_total: 10,
            uploaded: 4,
            deletions_total: 0,
            deleted: 0,
        };
        let out = render_aborted(AbortReason::Interrupted, &progress, false, false);
        assert!(out.contains("4 files uploaded before stopping"));
        assert!(!out.contains("Next:"));
    }
}
