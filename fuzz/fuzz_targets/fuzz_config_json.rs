#![no_main]

use libfuzzer_sys::fuzz_target;

use ssh_sftp::config::SftpConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing must never panic, known keys or not
        let mut de = serde_json::Deserializer::from_str(content);
        if let Ok(config) = serde_ignored::deserialize::<_, _, SftpConfig>(&mut de, |_| {}) {
            let _ = config.ignore_patterns();
            let _ = config.security_lock();
        }
    }
});
