use ssh_sftp::config::ConfigWarning;
use ssh_sftp::domain::services::SecurityCheck;
use ssh_sftp::domain::value_objects::RejectedPattern;

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::WarningEvent;

fn unknown_key_message(w: &ConfigWarning) -> String {
    match w.line {
        Some(line) => format!(
            "Unknown config key '{}' in {}:{}",
            w.key,
            w.file.display(),
            line
        ),
        None => format!("Unknown config key '{}' in {}", w.key, w.file.display()),
    }
}

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if warnings.is_empty() {
        return;
    }

    if ui.json {
        for w in warnings {
            let mut message = unknown_key_message(w);
            if let Some(s) = &w.suggestion {
                message.push_str(&format!(" (did you mean '{}'?)", s));
            }
            let _ = emit_event(&WarningEvent::new("unknown_config_key", message));
        }
        return;
    }

    eprint!("{}", render_config_warnings(warnings, ui.color, ui.unicode));
}

fn render_config_warnings(warnings: &[ConfigWarning], color: bool, unicode: bool) -> String {
    let mut block = WarningBlock::new("Unknown config keys");
    for w in warnings {
        block.add_line(unknown_key_message(w));
        if let Some(s) = &w.suggestion {
            block.add_line(format!("  Did you mean '{}'?", s));
        }
    }
    block.render(color, unicode)
}

/// Warn loudly when the project-name lock is off.
pub fn print_security_check(check: &SecurityCheck, remote_path: &str, ui: &UiContext) {
    if !matches!(check, SecurityCheck::Bypassed) {
        return;
    }

    if ui.json {
        let _ = emit_event(&WarningEvent::new(
            "security_lock_disabled",
            format!("securityLock is off; {} is not checked against the project name", remote_path),
        ));
        return;
    }

    let mut block = WarningBlock::new("Security lock disabled");
    block.add_line(format!(
        "{} is not checked against the project name.",
        remote_path
    ));
    block.add_line("A wrong remotePath can prune files that belong to another site.");
    eprint!("{}", block.render(ui.color, ui.unicode));
}

/// Malformed globs never match; tell the operator which ones were dropped.
pub fn print_rejected_patterns(rejected: &[RejectedPattern], ui: &UiContext) {
    if rejected.is_empty() {
        return;
    }

    if ui.json {
        for r in rejected {
            let _ = emit_event(&WarningEvent::new(
                "invalid_pattern",
                format!("{}: {}", r.pattern, r.message),
            ));
        }
        return;
    }

    let mut block = WarningBlock::new("Ignored invalid patterns");
    for r in rejected {
        block.add_line(format!("{} ({})", r.pattern, r.message));
    }
    eprint!("{}", block.render(ui.color, ui.unicode));
}
