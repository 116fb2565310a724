#![no_main]

use libfuzzer_sys::fuzz_target;

use ssh_sftp::domain::value_objects::{CleanPatterns, PatternSet};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // First line is the probe path, the rest are patterns
        let mut lines = content.lines();
        let probe = lines.next().unwrap_or_default();
        let patterns: Vec<&str> = lines.collect();

        let set = PatternSet::normalize(&patterns, "/srv/app");
        let _ = set.matches(probe);
        let _ = CleanPatterns::from_patterns(&patterns, "/srv/app").selects(probe);
    }
});
